//! Content service configuration.
//!
//! The key comes from the build environment (`GEMINI_API_KEY`) and can be
//! overridden at runtime through `localStorage["gcm_api_key"]`. No key means
//! simulation mode: the app runs entirely on mock content.

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Delay before mock content resolves in simulation mode.
pub const MOCK_DELAY_MS: u32 = 800;

const API_KEY_STORAGE_KEY: &str = "gcm_api_key";

#[derive(Clone, Debug, PartialEq)]
pub struct ContentConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub mock_delay_ms: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            mock_delay_ms: MOCK_DELAY_MS,
        }
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl ContentConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_blank(option_env!("GEMINI_API_KEY")),
            model: non_blank(option_env!("GEMINI_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ..Default::default()
        }
    }

    /// Build-time config with the stored key override applied.
    pub fn load() -> Self {
        let mut cfg = Self::from_env();
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(API_KEY_STORAGE_KEY) {
                    if let Some(key) = non_blank(Some(&raw)) {
                        cfg.api_key = Some(key);
                    }
                }
            }
        }
        cfg
    }

    pub fn is_simulation(&self) -> bool {
        self.api_key.is_none()
    }

    pub fn generate_url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint.trim_end_matches('/'), self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_mean_simulation() {
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" k ")), Some("k".to_string()));
        assert!(ContentConfig::default().is_simulation());
    }

    #[test]
    fn generate_url_joins_endpoint_and_model() {
        let cfg = ContentConfig {
            endpoint: "https://example.test/models/".into(),
            ..Default::default()
        };
        assert_eq!(
            cfg.generate_url(),
            "https://example.test/models/gemini-2.5-flash:generateContent"
        );
    }
}
