use crate::core::{self, SharedPointer};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub pointer: SharedPointer,
    pub touch_sensitivity: f32,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(wnd) = web::window() else {
        log::warn!("[input] no window; pointer steering disabled");
        return;
    };
    wire_mousemove(&wnd, &w);
    wire_touch(&wnd, &w, "touchstart");
    wire_touch(&wnd, &w, "touchmove");
}

fn wire_mousemove(wnd: &web::Window, w: &InputWiring) {
    let pointer = w.pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let Some(wnd) = web::window() else {
            return;
        };
        let (ww, wh) = dom::window_size(&wnd);
        *pointer.borrow_mut() =
            core::from_mouse(ev.client_x() as f32, ev.client_y() as f32, ww, wh);
    }) as Box<dyn FnMut(_)>);
    _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(wnd: &web::Window, w: &InputWiring, event_name: &str) {
    let pointer = w.pointer.clone();
    let sensitivity = w.touch_sensitivity;
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = ev.touches();
        if !core::single_touch(touches.length()) {
            return;
        }
        let (Some(t), Some(wnd)) = (touches.get(0), web::window()) else {
            return;
        };
        let (ww, wh) = dom::window_size(&wnd);
        *pointer.borrow_mut() =
            core::from_touch(t.page_x() as f32, t.page_y() as f32, ww, wh, sensitivity);
    }) as Box<dyn FnMut(_)>);
    _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    closure.forget();
}
