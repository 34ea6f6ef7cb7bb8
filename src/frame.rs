use crate::WebSession;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use valentine_core::{LoopHandle, Tick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A running requestAnimationFrame loop.
pub struct WebLoop {
    handle: LoopHandle,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl WebLoop {
    pub fn handle(&self) -> &LoopHandle {
        &self.handle
    }

    /// Stops scheduling and cancels the pending callback, if any.
    pub fn stop(&self) {
        self.handle.stop();
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(session: Rc<RefCell<WebSession>>) -> WebLoop {
    let handle = LoopHandle::new();
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        match session.borrow_mut().frame(&handle_tick) {
            Tick::Continue => raf_tick.set(request_frame(&tick_clone)),
            Tick::Stop => log::debug!("[frame] loop ended"),
        }
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));
    log::info!("[frame] loop started");
    WebLoop { handle, raf_id }
}
