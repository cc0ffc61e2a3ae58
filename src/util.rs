// Console helpers; no-ops off wasm so unit tests never reach JS imports.

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::warn!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Current window inner size, with a sane fallback when the window is unavailable.
pub fn window_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (1280.0, 800.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    (width, height)
}
