use crate::boot::Capabilities;
use crate::config::Theme;
use crate::constants::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::geometry::Viewport;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing <canvas id=\"{}\">", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Opaque, low-latency 2D context. `None` when the browser refuses one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    let opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(&opts, &"alpha".into(), &JsValue::FALSE);
    _ = js_sys::Reflect::set(&opts, &"desynchronized".into(), &JsValue::TRUE);
    match canvas.get_context_with_context_options("2d", &opts) {
        Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::warn!("[distort] getContext failed: {:?}", e);
            None
        }
    }
}

#[inline]
fn js_f64(v: Result<JsValue, JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport(window: &web::Window) -> Viewport {
    Viewport {
        width: js_f64(window.inner_width()),
        height: js_f64(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

/// `Some(matches)` when `matchMedia` answered, `None` otherwise.
fn media_matches(window: &web::Window, query: &str) -> Option<bool> {
    window.match_media(query).ok().flatten().map(|m| m.matches())
}

#[inline]
fn has_global(window: &web::Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn capabilities(window: &web::Window) -> Capabilities {
    let reduced_motion = media_matches(window, "(prefers-reduced-motion: reduce)").unwrap_or(false);
    let coarse_pointer = media_matches(window, "(pointer: coarse)")
        .or_else(|| media_matches(window, "(hover: none)"))
        .unwrap_or_else(|| has_global(window, "ontouchstart"));
    Capabilities {
        reduced_motion,
        coarse_pointer,
        pointer_events: has_global(window, "PointerEvent"),
    }
}

/// `data-theme` on `<html>` or `<body>`, then the stored preference, then dark.
pub fn theme(window: &web::Window, document: &web::Document) -> Theme {
    let html = document
        .document_element()
        .and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
    let body = document
        .body()
        .and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::resolve([html.as_deref(), body.as_deref(), stored.as_deref()])
}
