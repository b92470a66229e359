#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod boot;
mod clock;
mod config;
mod constants;
mod distort;
mod dom;
mod events;
mod frame;
mod geometry;
mod noise;
mod pointer;
mod surface;

use boot::Mode;
use config::RenderConfig;
use distort::Distortion;
use geometry::SurfaceGeometry;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixel-distort starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&e.to_string()));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("[distort] 2d context unavailable; effect disabled");
        return Ok(());
    };
    let mut surface = surface::CanvasSurface::new(canvas, ctx);

    let caps = dom::capabilities(&window);
    let theme = dom::theme(&window, &document);
    let geometry = SurfaceGeometry::from_viewport(dom::viewport(&window));
    let config = RenderConfig::for_theme(theme);
    log::info!(
        "[distort] {}x{} dpr={:.2} buffer={}x{} theme={:?}",
        geometry.width,
        geometry.height,
        geometry.dpr,
        geometry.buffer_width,
        geometry.buffer_height,
        theme
    );

    let background = config.background;
    let state = Rc::new(RefCell::new(Distortion::new(
        config,
        geometry,
        instant::now(),
    )));
    let mut host = events::WebHost::new(window, document, state, surface.clone());

    match boot::boot(caps, &geometry, background, &mut host, &mut surface) {
        Mode::Active => log::info!("[gate] active"),
        Mode::StaticFallback => log::info!(
            "[gate] static fallback (reduced_motion={}, coarse_pointer={})",
            caps.reduced_motion,
            caps.coarse_pointer
        ),
    }
    Ok(())
}
