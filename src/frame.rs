use crate::render::Canvas2dSurface;
use reveal_core::{FrameDriver, FrameStats, TickOutcome, STATS_INTERVAL_SEC};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: Rc<RefCell<FrameDriver>>,
    pub surface: Canvas2dSurface,
    pub stats: FrameStats,
    pub skipped: u64,
}

impl FrameContext {
    pub fn new(driver: Rc<RefCell<FrameDriver>>, surface: Canvas2dSurface) -> Self {
        Self {
            driver,
            surface,
            stats: FrameStats::new(STATS_INTERVAL_SEC),
            skipped: 0,
        }
    }

    pub fn frame(&mut self) {
        let outcome = self.driver.borrow_mut().tick(&mut self.surface);
        if outcome == TickOutcome::Skipped {
            self.skipped += 1;
            if self.skipped == 1 {
                log::info!("[frame] canvas has no size yet, skipping ticks");
            }
            return;
        }
        self.skipped = 0;
        if let Some(fps) = self.stats.record() {
            let driver = self.driver.borrow();
            log::debug!(
                "[frame] {:.1} fps, ticks={} particles={}",
                fps,
                driver.ticks(),
                driver.emitter().len()
            );
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Run `frame` on every animation frame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
