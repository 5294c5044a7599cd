//! Self-rescheduling timer chains with a cancellation handle.

use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Stops the task it was returned for. Dropping the handle cancels too, so a
/// component can own it and have the chain end with the component.
#[derive(Debug, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// One-shot follow-up tied to this handle's lifetime.
    pub fn after(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let cancelled = self.cancelled.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if !cancelled.get() {
                f();
            }
        });
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `step` after `initial_delay_ms`, then again after whatever delay it
/// returns, until the handle is cancelled. A pending wait still elapses, but
/// no step runs after cancellation.
pub fn spawn_repeating<F>(initial_delay_ms: u32, mut step: F) -> TaskHandle
where
    F: FnMut() -> u32 + 'static,
{
    let handle = TaskHandle::default();
    let cancelled = handle.cancelled.clone();
    spawn_local(async move {
        let mut delay = initial_delay_ms;
        loop {
            TimeoutFuture::new(delay).await;
            if cancelled.get() {
                break;
            }
            delay = step();
        }
    });
    handle
}
