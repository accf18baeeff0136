//! requestAnimationFrame run loop
//!
//! The browser owns the schedule; we own cancellation. Each frame re-registers
//! itself, so the loop runs until the page is torn down or the handle cancels
//! it. Cancellation lets embedding contexts stop the loop deterministically.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Handle to a running loop. Dropping it does NOT stop the loop.
#[derive(Clone)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Stop the loop at its next scheduled frame
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Start a frame loop; `frame` receives the rAF timestamp in milliseconds
pub fn start<F>(frame: F) -> LoopHandle
where
    F: FnMut(f64) + 'static,
{
    let cancelled = Rc::new(Cell::new(false));
    let frame: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(frame));
    schedule(frame, cancelled.clone());
    LoopHandle { cancelled }
}

fn schedule(frame: Rc<RefCell<dyn FnMut(f64)>>, cancelled: Rc<Cell<bool>>) {
    let closure = Closure::once(move |time: f64| {
        if cancelled.get() {
            return;
        }
        (frame.borrow_mut())(time);
        schedule(frame, cancelled);
    });
    let window = web_sys::window().expect("no window");
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
