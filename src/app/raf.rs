//! `requestAnimationFrame`-backed [`FrameScheduler`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::wasm_bindgen::JsCast;
use leptos::wasm_bindgen::closure::Closure;

use super::animation::FrameScheduler;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared slot for the frame callback. The callback usually needs to reach
/// the object that owns the scheduler, so it is installed after construction.
#[derive(Clone, Default)]
pub struct FrameCallbackSlot(Rc<RefCell<Option<FrameCallback>>>);

impl FrameCallbackSlot {
    pub fn install(&self, callback: impl FnMut(f64) + 'static) {
        *self.0.borrow_mut() = Some(Closure::wrap(Box::new(callback) as Box<dyn FnMut(f64)>));
    }
}

pub struct RafScheduler {
    callback: FrameCallbackSlot,
    handle: Option<i32>,
}

impl RafScheduler {
    pub fn new() -> (Self, FrameCallbackSlot) {
        let slot = FrameCallbackSlot::default();
        (Self { callback: slot.clone(), handle: None }, slot)
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let callback = self.callback.0.borrow();
        let Some(callback) = callback.as_ref() else {
            log::warn!("frame requested before a callback was installed");
            return;
        };
        match leptos::web_sys::window()
            .and_then(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).ok())
        {
            Some(handle) => self.handle = Some(handle),
            None => log::error!("requestAnimationFrame unavailable"),
        }
    }

    fn cancel_frame(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Some(window) = leptos::web_sys::window() {
            // Cancelling a handle that already fired is harmless.
            let _ = window.cancel_animation_frame(handle);
        }
    }
}
