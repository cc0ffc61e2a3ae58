use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, PointerEvent};
use yew::Callback;

fn client_pos(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<PointerEvent>()?;
    Some((event.client_x() as f64, event.client_y() as f64))
}

/// Window-level pointer listeners owned by a single drag or pan session.
///
/// Acquire it when the session starts and drop it when the session ends;
/// dropping deregisters every listener.
pub struct PointerCapture {
    _move: EventListener,
    _up: EventListener,
    _cancel: EventListener,
}

impl PointerCapture {
    pub fn acquire(on_move: Callback<(f64, f64)>, on_release: Callback<(f64, f64)>) -> Option<Self> {
        let window = web_sys::window()?;
        let move_listener = EventListener::new_with_options(
            &window,
            "pointermove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if let Some(pos) = client_pos(event) {
                    on_move.emit(pos);
                }
            },
        );
        let up_release = on_release.clone();
        let up_listener = EventListener::new(&window, "pointerup", move |event: &Event| {
            if let Some(pos) = client_pos(event) {
                up_release.emit(pos);
            }
        });
        let cancel_listener = EventListener::new(&window, "pointercancel", move |event: &Event| {
            if let Some(pos) = client_pos(event) {
                on_release.emit(pos);
            }
        });
        Some(Self {
            _move: move_listener,
            _up: up_listener,
            _cancel: cancel_listener,
        })
    }
}
