use crate::frame::FrameLoop;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cancel the frame loop while hidden; restart it with a fresh baseline when shown.
pub fn wire_visibility(document: &web::Document, frames: Rc<FrameLoop>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.hidden() {
            frames.suspend();
        } else {
            frames.resume();
        }
    }) as Box<dyn FnMut()>);

    _ = document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
