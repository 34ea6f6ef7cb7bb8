use crate::dom;
use crate::input;
use crate::WebSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps camera aspect and drawing buffer in step with the window.
pub fn wire_resize(session: Rc<RefCell<WebSession>>) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let viewport = dom::window_viewport(&win);
        session.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Orbit controls: drag to rotate, right/shift drag to pan, wheel to zoom.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, session: Rc<RefCell<WebSession>>) {
    // pointerdown
    {
        let session = session.clone();
        let canvas_c = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(button) = input::pointer_button(ev.button()) else {
                return;
            };
            _ = canvas_c.set_pointer_capture(ev.pointer_id());
            let pos = input::pointer_canvas_css(&ev, &canvas_c);
            session
                .borrow_mut()
                .controls
                .pointer_down(button, input::modifiers(&ev), pos);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // pointermove
    {
        let session = session.clone();
        let canvas_c = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_css(&ev, &canvas_c);
            let height = input::canvas_css_height(&canvas_c);
            let mut s = session.borrow_mut();
            let s = &mut *s;
            s.controls.pointer_move(pos, &s.camera, height);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // pointerup / pointercancel
    {
        let session = session.clone();
        let canvas_c = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            _ = canvas_c.release_pointer_capture(ev.pointer_id());
            session.borrow_mut().controls.pointer_up();
        }) as Box<dyn FnMut(_)>);
        for kind in ["pointerup", "pointercancel"] {
            _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    // wheel
    {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            session.borrow_mut().controls.wheel(ev.delta_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
    // contextmenu: right drag pans instead of opening the menu
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
