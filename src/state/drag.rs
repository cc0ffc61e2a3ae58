// Drag session bookkeeping between pointer-down and pointer-up.

/// Height of the strip at the bottom of the viewport reserved for the dock.
pub const DOCK_STRIP_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width.max(0.0)), y.clamp(0.0, self.height.max(0.0)))
    }

    /// Whether a release at `y` lands on the map rather than the dock strip.
    pub fn accepts_drop(&self, y: f64) -> bool {
        y < self.height - DOCK_STRIP_PX
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragSource {
    /// A new module pulled out of the dock.
    Dock,
    /// An existing placement being moved; `origin` is where it sat at pointer-down.
    Placed { instance_id: String, origin: (f64, f64) },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub module_id: String,
    pub source: DragSource,
    pub start: (f64, f64),
    pub cursor: (f64, f64),
}

impl DragSession {
    pub fn new(module_id: &str, source: DragSource, x: f64, y: f64) -> Self {
        Self {
            module_id: module_id.to_string(),
            source,
            start: (x, y),
            cursor: (x, y),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self.source, DragSource::Dock)
    }

    /// Position of the dragged placement for a pointer at (x, y), or None for dock sessions.
    pub fn placed_position(&self, x: f64, y: f64, viewport: &Viewport) -> Option<(f64, f64)> {
        let DragSource::Placed { origin, .. } = &self.source else {
            return None;
        };
        let dx = x - self.start.0;
        let dy = y - self.start.1;
        Some(viewport.clamp(origin.0 + dx, origin.1 + dy))
    }
}
