// Per-node info panel state machine and tap detection.

/// Pointer travel (px) above which a gesture counts as a drag, not a tap.
pub const TAP_THRESHOLD_PX: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentMode {
    /// Reserved: no panel control selects it.
    #[allow(dead_code)]
    Status,
    Metrics,
    Zone,
}

impl ContentMode {
    pub fn title(&self) -> &'static str {
        match self {
            ContentMode::Status => "STATUS UPDATE",
            ContentMode::Metrics => "TECHNICAL METRICS",
            ContentMode::Zone => "ZONE IMPACT",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodePanel {
    pub open: bool,
    pub mode: Option<ContentMode>,
}

impl NodePanel {
    /// Tap on the node body: opens a closed panel, closes an open one and drops its mode.
    pub fn tap(&mut self) {
        if self.open {
            self.open = false;
            self.mode = None;
        } else {
            self.open = true;
        }
    }

    /// Mode button press. Pressing the selected mode again clears it.
    /// Returns the newly selected mode, if any.
    pub fn select(&mut self, mode: ContentMode) -> Option<ContentMode> {
        if !self.open {
            return None;
        }
        self.mode = if self.mode == Some(mode) { None } else { Some(mode) };
        self.mode
    }
}

pub fn is_tap(start: (f64, f64), end: (f64, f64)) -> bool {
    let dist = (end.0 - start.0).hypot(end.1 - start.1);
    dist <= TAP_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_toggles_open_and_clears_mode_on_close() {
        let mut p = NodePanel::default();
        p.tap();
        assert!(p.open);
        assert_eq!(p.select(ContentMode::Metrics), Some(ContentMode::Metrics));
        p.tap();
        assert_eq!(p, NodePanel::default());
    }

    #[test]
    fn reselecting_a_mode_returns_to_no_content() {
        let mut p = NodePanel { open: true, mode: None };
        assert_eq!(p.select(ContentMode::Zone), Some(ContentMode::Zone));
        assert_eq!(p.select(ContentMode::Metrics), Some(ContentMode::Metrics));
        assert_eq!(p.select(ContentMode::Metrics), None);
        assert!(p.open);
    }

    #[test]
    fn closed_panel_ignores_mode_buttons() {
        let mut p = NodePanel::default();
        assert_eq!(p.select(ContentMode::Zone), None);
        assert_eq!(p.mode, None);
    }

    #[test]
    fn small_movements_are_taps() {
        assert!(is_tap((10.0, 10.0), (13.0, 14.0)));
        assert!(!is_tap((10.0, 10.0), (16.0, 10.0)));
    }
}
