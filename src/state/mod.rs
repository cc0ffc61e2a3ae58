pub mod camera;
pub mod drag;
pub mod panel;

pub use camera::{CameraAction, MapCamera};
pub use drag::{DragSession, DragSource, Viewport};
pub use panel::{ContentMode, NodePanel};
