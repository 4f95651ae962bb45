//! Short-lived bubbles shed from the trailing side of the boundary ring.

use crate::boundary::AnchorPoint;
use crate::config::ParticleConfig;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Absolute surface coordinates.
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub decay_rate: f32,
}

impl Particle {
    /// Move, slow down and fade by one tick. Returns whether it is still visible.
    #[inline]
    fn step(&mut self, damping: f32) -> bool {
        self.position += self.velocity;
        self.velocity *= damping;
        self.opacity -= self.decay_rate;
        self.opacity > 0.0
    }
}

/// Anchor index whose angle sector contains `angle`.
///
/// The angle is wrapped into `[0, 2π)` before scaling; an index that still
/// lands on `count` through rounding wraps to 0.
pub fn spawn_index(angle: f32, count: usize) -> usize {
    if count == 0 || !angle.is_finite() {
        return 0;
    }
    let wrapped = angle.rem_euclid(TAU);
    let idx = (wrapped / TAU * count as f32).floor() as usize;
    idx % count
}

pub struct ParticleEmitter {
    config: ParticleConfig,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleEmitter {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        let particles = Vec::with_capacity(config.max_particles);
        Self {
            config,
            particles,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn at most one particle on the trailing side of the ring.
    ///
    /// `origin` is the pointer position the anchors are relative to. Returns
    /// whether a particle was added.
    pub fn try_spawn(
        &mut self,
        pointer_velocity: Vec2,
        origin: Vec2,
        anchors: &[AnchorPoint],
    ) -> bool {
        let speed = pointer_velocity.length();
        if !speed.is_finite() || speed <= self.config.motion_threshold {
            return false;
        }
        let trailing = pointer_velocity.y.atan2(pointer_velocity.x) + PI;
        let emission = trailing + self.jitter(self.config.angle_jitter);

        if speed <= self.config.spawn_threshold || self.particles.len() >= self.config.max_particles
        {
            return false;
        }
        let Some(anchor) = anchors.get(spawn_index(emission, anchors.len())) else {
            return false;
        };

        let cfg = &self.config;
        let (radius_min, radius_max) = (cfg.radius_min, cfg.radius_max);
        let (decay_min, decay_max) = (cfg.decay_min, cfg.decay_max);
        let (inherit, vel_jitter, opacity) =
            (cfg.velocity_inherit, cfg.velocity_jitter, cfg.initial_opacity);

        let velocity = -pointer_velocity * inherit
            + Vec2::new(self.jitter(vel_jitter), self.jitter(vel_jitter));
        let radius = self.rng.gen_range(radius_min..=radius_max);
        let decay_rate = self.rng.gen_range(decay_min..=decay_max);

        self.particles.push(Particle {
            position: origin + anchor.position,
            velocity,
            radius,
            opacity,
            decay_rate,
        });
        log::trace!("[particles] spawned, live={}", self.particles.len());
        true
    }

    /// Age every live particle by one tick and drop the ones that faded out.
    pub fn advance(&mut self) {
        let damping = self.config.damping;
        self.particles.retain_mut(|p| p.step(damping));
    }

    /// Uniform value in `[-span/2, span/2]`.
    #[inline]
    fn jitter(&mut self, span: f32) -> f32 {
        if span > 0.0 {
            self.rng.gen_range(-0.5 * span..=0.5 * span)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_index_maps_sectors() {
        assert_eq!(spawn_index(0.0, 32), 0);
        assert_eq!(spawn_index(PI, 32), 16);
        assert_eq!(spawn_index(PI + 0.01, 4), 2);
        assert_eq!(spawn_index(TAU - 0.01, 4), 3);
    }

    #[test]
    fn spawn_index_wraps_out_of_range_angles() {
        // atan2 + pi reaches 2*pi and beyond once jitter is added
        assert_eq!(spawn_index(TAU + 0.1, 32), spawn_index(0.1, 32));
        assert_eq!(spawn_index(-0.1, 4), 3);
        assert_eq!(spawn_index(-1e-9, 8), 0);
        assert_eq!(spawn_index(TAU, 8), 0);
        assert_eq!(spawn_index(f32::NAN, 8), 0);
        assert_eq!(spawn_index(1.0, 0), 0);
    }

    #[test]
    fn particle_step_moves_damps_and_fades() {
        let mut p = Particle {
            position: Vec2::ZERO,
            velocity: Vec2::new(2.0, 0.0),
            radius: 4.0,
            opacity: 0.5,
            decay_rate: 0.1,
        };
        assert!(p.step(0.5));
        assert_eq!(p.position, Vec2::new(2.0, 0.0));
        assert_eq!(p.velocity, Vec2::new(1.0, 0.0));
        assert!((p.opacity - 0.4).abs() < 1e-6);
    }
}
