//! One tick of the reveal effect: sample the pointer, simulate, composite.
//!
//! The driver knows nothing about scheduling. Hosts call [`FrameDriver::tick`]
//! from their frame callback (requestAnimationFrame, a winit redraw) and feed
//! pointer events through [`FrameDriver::set_pointer`] between ticks.

use crate::boundary::BoundarySimulator;
use crate::color::Rgba;
use crate::config::RevealConfig;
use crate::error::ConfigError;
use crate::particles::ParticleEmitter;
use crate::pointer::{PointerSample, PointerState};
use crate::surface::{BlendMode, Surface, Veil};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    /// No drawable surface; simulation state was left untouched.
    Skipped,
}

pub struct FrameDriver {
    config: RevealConfig,
    pointer: PointerState,
    boundary: BoundarySimulator,
    emitter: ParticleEmitter,
    ticks: u64,
}

impl FrameDriver {
    /// Build a driver with the pointer resting at `pointer`.
    pub fn new(config: RevealConfig, pointer: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;
        let boundary = BoundarySimulator::new(config.boundary.clone());
        let emitter = ParticleEmitter::new(config.particles.clone(), config.seed);
        Ok(Self {
            config,
            pointer: PointerState::at(pointer),
            boundary,
            emitter,
            ticks: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Latest pointer position from the input collaborator.
    #[inline]
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer.set_position(position);
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn boundary(&self) -> &BoundarySimulator {
        &self.boundary
    }

    #[inline]
    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    /// Number of rendered ticks.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickOutcome {
        let Some(size) = surface.size().filter(|s| s.x >= 1.0 && s.y >= 1.0) else {
            // Keep a pointer jump made while hidden from turning into a burst.
            self.pointer.resync();
            return TickOutcome::Skipped;
        };

        surface.clear();
        surface.paint_veil(&self.veil(self.pointer.position(), size));

        let sample: PointerSample = self.pointer.sample();
        self.boundary.advance(sample.velocity);

        surface.set_blend(BlendMode::Erase);
        surface.fill_outline(&self.boundary.outline(sample.position), Rgba::BLACK);
        // Particles must paint over the veil, not cut more holes in it.
        surface.set_blend(BlendMode::Over);

        self.emitter
            .try_spawn(sample.velocity, sample.position, self.boundary.points());
        self.emitter.advance();

        let color = self.emitter.config().color;
        for p in self.emitter.particles() {
            surface.fill_circle(p.position, p.radius, color.with_alpha(p.opacity));
        }

        self.ticks += 1;
        TickOutcome::Rendered
    }

    fn veil(&self, center: Vec2, size: Vec2) -> Veil {
        let cfg = &self.config.veil;
        Veil {
            center,
            inner_radius: cfg.inner_radius,
            outer_radius: (size.x * cfg.outer_radius_factor).max(cfg.inner_radius + 1.0),
            inner_color: cfg.inner_color,
            outer_color: cfg.outer_color,
        }
    }
}
