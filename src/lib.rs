#![cfg(target_arch = "wasm32")]
use reveal_core::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::OVERLAY_CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::overlay_canvas(&document, OVERLAY_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let cfg = config::from_attributes(|attr| canvas.get_attribute(attr));
    log::info!(
        "[config] points={} radius={:.0} max_particles={} seed={}",
        cfg.boundary.anchor_count,
        cfg.boundary.rest_radius,
        cfg.particles.max_particles,
        cfg.seed
    );

    let rect = canvas.get_bounding_client_rect();
    let start = input::canvas_center(rect.width() as f32, rect.height() as f32);
    let driver = Rc::new(RefCell::new(FrameDriver::new(cfg, start)?));

    events::wire_pointer_tracking(canvas.clone(), driver.clone());

    let surface = render::Canvas2dSurface::new(canvas, ctx);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(driver, surface)));
    frame::start_loop(frame_ctx);
    Ok(())
}

