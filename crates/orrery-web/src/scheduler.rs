use orrery_engine::{FrameCallback, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `FrameScheduler` backed by `window.requestAnimationFrame`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let Some(window) = web_sys::window() else {
            log::error!("requestAnimationFrame unavailable: no window");
            return;
        };
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(err) = window.request_animation_frame(closure.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }
}
