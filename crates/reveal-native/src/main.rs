use glam::Vec2;
use reveal_core::{FrameDriver, FrameStats, RevealConfig, TickOutcome, STATS_INTERVAL_SEC};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod batch;
mod gpu;

use batch::FrameBatch;
use gpu::GpuState;

const SEED_ENV: &str = "REVEAL_SEED";

fn load_config() -> RevealConfig {
    let mut config = RevealConfig::default();
    if let Ok(raw) = std::env::var(SEED_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = seed,
            Err(e) => log::warn!("[config] ignoring {SEED_ENV}={raw:?}: {e}"),
        }
    }
    config
}

/// Keep polling while frames render; sleep until the next window event while
/// there is nothing to draw into (minimized or zero-sized).
fn control_flow_after(outcome: TickOutcome) -> ControlFlow {
    match outcome {
        TickOutcome::Rendered => ControlFlow::Poll,
        TickOutcome::Skipped => ControlFlow::Wait,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Reveal (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let (w, h) = state.size();
    let mut driver = FrameDriver::new(load_config(), Vec2::new(w as f32, h as f32) * 0.5)?;
    let mut batch = FrameBatch::default();
    let mut stats = FrameStats::new(STATS_INTERVAL_SEC);
    log::info!("reveal-native running, seed={}", driver.config().seed);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => driver.set_pointer(Vec2::new(position.x as f32, position.y as f32)),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            let size = state.window.inner_size();
            batch.begin(size.width, size.height);
            let outcome = driver.tick(&mut batch);
            elwt.set_control_flow(control_flow_after(outcome));
            if outcome == TickOutcome::Skipped {
                return;
            }
            match state.render(&batch) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    elwt.exit()
                }
                Err(e) => log::warn!("render error: {e:?}"),
            }
            if let Some(fps) = stats.record() {
                log::debug!("[frame] {:.1} fps, particles={}", fps, driver.emitter().len());
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_stops_polling() {
        let mut driver = FrameDriver::new(RevealConfig::default(), Vec2::new(400.0, 300.0)).unwrap();
        let mut batch = FrameBatch::default();

        batch.begin(0, 0);
        let outcome = driver.tick(&mut batch);
        assert_eq!(outcome, TickOutcome::Skipped);
        assert_eq!(control_flow_after(outcome), ControlFlow::Wait);

        batch.begin(800, 600);
        let outcome = driver.tick(&mut batch);
        assert_eq!(outcome, TickOutcome::Rendered);
        assert_eq!(control_flow_after(outcome), ControlFlow::Poll);
    }
}
