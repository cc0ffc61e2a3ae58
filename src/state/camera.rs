// Map camera: bounded zoom plus free pan.
use std::rc::Rc;
use yew::Reducible;

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
/// Scale change per wheel delta unit.
pub const WHEEL_FACTOR: f64 = 0.001;
/// Scale change per zoom button press.
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub panning: bool,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            panning: false,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }
}

impl MapCamera {
    fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.set_scale(self.scale - delta_y * WHEEL_FACTOR);
    }

    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.panning = true;
        self.anchor_x = x - self.pan_x;
        self.anchor_y = y - self.pan_y;
    }

    pub fn pan_to(&mut self, x: f64, y: f64) {
        if !self.panning {
            return;
        }
        self.pan_x = x - self.anchor_x;
        self.pan_y = y - self.anchor_y;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// CSS transform for the map surface.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.scale
        )
    }
}

#[derive(Clone, Debug)]
pub enum CameraAction {
    Wheel { delta_y: f64 },
    ZoomIn,
    ZoomOut,
    BeginPan { x: f64, y: f64 },
    PanTo { x: f64, y: f64 },
    EndPan,
    Reset,
}

impl Reducible for MapCamera {
    type Action = CameraAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CameraAction::*;
        let mut cam = (*self).clone();
        match action {
            Wheel { delta_y } => cam.wheel(delta_y),
            ZoomIn => cam.set_scale(cam.scale + ZOOM_STEP),
            ZoomOut => cam.set_scale(cam.scale - ZOOM_STEP),
            BeginPan { x, y } => cam.begin_pan(x, y),
            PanTo { x, y } => {
                if !cam.panning {
                    return self;
                }
                cam.pan_to(x, y);
            }
            EndPan => cam.end_pan(),
            Reset => cam.reset(),
        }
        Rc::new(cam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(cam: MapCamera, actions: Vec<CameraAction>) -> MapCamera {
        let mut rc = Rc::new(cam);
        for a in actions {
            rc = rc.reduce(a);
        }
        (*rc).clone()
    }

    #[test]
    fn wheel_scrolling_up_zooms_in_proportionally() {
        let mut cam = MapCamera::default();
        cam.wheel(-100.0);
        assert!((cam.scale - 1.1).abs() < 1e-9);
        cam.wheel(200.0);
        assert!((cam.scale - 0.9).abs() < 1e-9);
    }

    #[test]
    fn scale_is_clamped_to_bounds() {
        let mut cam = MapCamera::default();
        cam.wheel(-100_000.0);
        assert_eq!(cam.scale, MAX_SCALE);
        cam.wheel(100_000.0);
        assert_eq!(cam.scale, MIN_SCALE);
        let cam = apply(MapCamera::default(), vec![CameraAction::ZoomOut; 10]);
        assert_eq!(cam.scale, MIN_SCALE);
    }

    #[test]
    fn pan_follows_pointer_relative_to_anchor() {
        let cam = apply(
            MapCamera::default(),
            vec![
                CameraAction::BeginPan { x: 100.0, y: 100.0 },
                CameraAction::PanTo { x: 130.0, y: 90.0 },
                CameraAction::EndPan,
                CameraAction::BeginPan { x: 10.0, y: 10.0 },
                CameraAction::PanTo { x: 20.0, y: 30.0 },
            ],
        );
        assert_eq!((cam.pan_x, cam.pan_y), (40.0, 10.0));
        assert!(cam.panning);
    }

    #[test]
    fn moves_outside_a_pan_session_are_ignored() {
        let cam = apply(
            MapCamera::default(),
            vec![CameraAction::PanTo { x: 300.0, y: 300.0 }],
        );
        assert_eq!((cam.pan_x, cam.pan_y), (0.0, 0.0));
    }

    #[test]
    fn reset_restores_identity_transform() {
        let cam = apply(
            MapCamera::default(),
            vec![
                CameraAction::ZoomIn,
                CameraAction::BeginPan { x: 0.0, y: 0.0 },
                CameraAction::PanTo { x: 50.0, y: -20.0 },
                CameraAction::EndPan,
                CameraAction::Reset,
            ],
        );
        assert_eq!(cam.scale, 1.0);
        assert_eq!((cam.pan_x, cam.pan_y), (0.0, 0.0));
        assert_eq!(cam.transform_css(), "translate(0px, 0px) scale(1)");
    }
}
