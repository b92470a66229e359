use crate::boot::PointerSource;
use crate::dom;
use crate::distort::Distortion;
use crate::geometry::SurfaceGeometry;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record the client position only; drawing happens on the next frame.
pub fn wire_pointermove(
    window: &web::Window,
    source: PointerSource,
    state: Rc<RefCell<Distortion>>,
) {
    // pointermove delivers a MouseEvent subtype, so one handler covers both sources
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        state
            .borrow_mut()
            .pointer
            .set_target(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback(source.event_name(), closure.as_ref().unchecked_ref());
    closure.forget();
    log::info!("[distort] listening for {}", source.event_name());
}

/// Recompute the surface geometry on resize. Pointer state is kept.
pub fn wire_resize(window: &web::Window, state: Rc<RefCell<Distortion>>, surface: CanvasSurface) {
    let mut surface = surface;
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let geometry = SurfaceGeometry::from_viewport(dom::viewport(&w));
        state.borrow_mut().resize(geometry, &mut surface);
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
