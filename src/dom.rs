// Small window helpers shared by the components.

use crate::layout::Viewport;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(800.0, 600.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    Viewport::new(width, height)
}

/// Blocking notice, as the page shows for rejected clicks.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            warn!("alert failed: {}", message);
        }
    }
}

/// `resize` listener on the window, removed on drop.
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn new(on_resize: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
        }
    }
}
