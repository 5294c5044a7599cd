//! `requestAnimationFrame` loop that can be started, stops itself when the
//! tick asks it to, and is cancelled on drop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct Inner {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    raf_id: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl Inner {
    fn request(&self) {
        let Some(window) = web_sys::window() else {
            self.running.set(false);
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(_) => self.running.set(false),
            }
        }
    }
}

pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    /// `tick` receives the frame timestamp in ms and returns whether another
    /// frame is wanted.
    pub fn new(mut tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(Inner {
            callback: RefCell::new(None),
            raf_id: Cell::new(None),
            running: Cell::new(false),
        });
        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else { return };
            inner.raf_id.set(None);
            if !inner.running.get() {
                return;
            }
            if tick(ts) {
                inner.request();
            } else {
                inner.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(closure);
        Self { inner }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.request();
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
