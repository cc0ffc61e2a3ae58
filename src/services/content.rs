//! Content fetch adapter for the generative-language service.
//!
//! `fetch_content` never fails: without a key it resolves to mock content after
//! a short delay, and any request or parse failure falls back to the same mock.
//! Caching is the caller's job.

use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ContentConfig;
use crate::error::{FetchError, Result};
use crate::model::ContentBlob;
use crate::util::{clog, cwarn};

pub fn build_prompt(module_name: &str) -> String {
    format!(
        "Act as BESCOM Smart Grid AI. Analyze \"{module_name}\".\n\
         Constraints:\n\
         - statusUpdate: Max 10 words. Technical status.\n\
         - technicalMetrics: Max 8 words. Voltages, MW, Hz.\n\
         - impactAnalysis: Max 10 words. Affected areas/time."
    )
}

pub fn build_request_body(module_name: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(module_name) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "statusUpdate": { "type": "STRING" },
                    "technicalMetrics": { "type": "STRING" },
                    "impactAnalysis": { "type": "STRING" }
                },
                "required": ["statusUpdate", "technicalMetrics", "impactAnalysis"]
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extract and validate the content blob from a `generateContent` response body.
pub fn parse_response(body: &str) -> Result<ContentBlob> {
    let resp: GenerateResponse = serde_json::from_str(body)?;
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    Ok(serde_json::from_str(&text)?)
}

async fn request_content(cfg: &ContentConfig, key: &str, module_name: &str) -> Result<ContentBlob> {
    let resp = Request::post(&cfg.generate_url())
        .header("x-goog-api-key", key)
        .json(&build_request_body(module_name))?
        .send()
        .await?;
    if !resp.ok() {
        return Err(FetchError::Status { status: resp.status() });
    }
    let body = resp.text().await?;
    parse_response(&body)
}

pub async fn fetch_content(cfg: &ContentConfig, module_name: &str) -> ContentBlob {
    let Some(key) = cfg.api_key.as_deref() else {
        TimeoutFuture::new(cfg.mock_delay_ms).await;
        return ContentBlob::mock();
    };
    clog(&format!("content: requesting {module_name}"));
    match request_content(cfg, key, module_name).await {
        Ok(blob) => blob,
        Err(e) => {
            cwarn(&format!("content: {module_name} failed, using mock ({e})"));
            ContentBlob::mock()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
        })
        .to_string()
    }

    #[test]
    fn parses_three_field_payload() {
        let body = envelope(
            r#"{"statusUpdate":"Stable","technicalMetrics":"Load: 120MW","impactAnalysis":"Peenya only"}"#,
        );
        let blob = parse_response(&body).unwrap();
        assert_eq!(blob.technical_metrics, "Load: 120MW");
        assert_eq!(blob.impact_analysis, "Peenya only");
        assert_eq!(blob.status_update, "Stable");
    }

    #[test]
    fn missing_field_is_malformed() {
        let body = envelope(r#"{"statusUpdate":"Stable","technicalMetrics":"x"}"#);
        assert!(matches!(parse_response(&body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn non_json_candidate_text_is_malformed() {
        let body = envelope("Sure! Here is the analysis you asked for.");
        assert!(matches!(parse_response(&body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn empty_candidates_are_rejected() {
        assert!(matches!(
            parse_response(r#"{"candidates":[]}"#),
            Err(FetchError::EmptyResponse)
        ));
        assert!(matches!(parse_response("{}"), Err(FetchError::EmptyResponse)));
        assert!(matches!(parse_response("<html>"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn request_names_module_and_schema() {
        let body = build_request_body("Industrial Load");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"Industrial Load\""));
        let props = &body["generationConfig"]["responseSchema"]["properties"];
        for field in ["statusUpdate", "technicalMetrics", "impactAnalysis"] {
            assert_eq!(props[field]["type"], "STRING");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::Date;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn simulation_mode_resolves_to_mock_after_delay() {
        let cfg = ContentConfig { mock_delay_ms: 50, ..Default::default() };
        let start = Date::now();
        let blob = fetch_content(&cfg, "Industrial Load").await;
        let elapsed = Date::now() - start;
        assert_eq!(blob, ContentBlob::mock());
        assert!(elapsed >= 40.0, "resolved too early: {elapsed}ms");
        assert!(elapsed < 2000.0, "resolved too late: {elapsed}ms");
    }

    #[wasm_bindgen_test(async)]
    async fn unreachable_service_falls_back_to_mock() {
        let cfg = ContentConfig {
            api_key: Some("test-key".into()),
            endpoint: "http://127.0.0.1:9/none".into(),
            ..Default::default()
        };
        let blob = fetch_content(&cfg, "EV Charging Grid").await;
        assert_eq!(blob, ContentBlob::mock());
    }
}
