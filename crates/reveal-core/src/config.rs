//! Tuning for the reveal effect.
//!
//! Every constant the simulation uses is carried here so front-ends can
//! override individual values; `Default` reproduces the stock look.

use crate::color::Rgba;
use crate::constants::*;
use crate::error::ConfigError;

/// Spring ring that forms the hole in the veil.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryConfig {
    pub anchor_count: usize,
    pub rest_radius: f32,
    pub tension: f32,
    pub damping: f32,
    pub velocity_gain: f32,
    pub drag: f32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            anchor_count: ANCHOR_COUNT,
            rest_radius: REST_RADIUS,
            tension: SPRING_TENSION,
            damping: BOUNDARY_DAMPING,
            velocity_gain: VELOCITY_GAIN,
            drag: DRAG,
        }
    }
}

/// Trailing bubbles.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub max_particles: usize,
    /// Speed above which motion is considered present.
    pub motion_threshold: f32,
    /// Speed above which a particle is actually spawned.
    pub spawn_threshold: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub velocity_inherit: f32,
    pub velocity_jitter: f32,
    pub angle_jitter: f32,
    pub initial_opacity: f32,
    pub decay_min: f32,
    pub decay_max: f32,
    pub damping: f32,
    pub color: Rgba,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            motion_threshold: MOTION_THRESHOLD,
            spawn_threshold: SPAWN_THRESHOLD,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            velocity_inherit: VELOCITY_INHERIT,
            velocity_jitter: VELOCITY_JITTER,
            angle_jitter: ANGLE_JITTER,
            initial_opacity: INITIAL_OPACITY,
            decay_min: DECAY_RATE_MIN,
            decay_max: DECAY_RATE_MAX,
            damping: PARTICLE_DAMPING,
            color: Rgba::from_rgb_array(PARTICLE_RGB),
        }
    }
}

/// Radial color wash the boundary cuts into.
#[derive(Clone, Debug, PartialEq)]
pub struct VeilConfig {
    pub inner_color: Rgba,
    pub outer_color: Rgba,
    pub inner_radius: f32,
    /// Outer gradient radius as a fraction of the surface width.
    pub outer_radius_factor: f32,
}

impl VeilConfig {
    /// Same color at both gradient stops.
    pub fn solid(color: Rgba) -> Self {
        Self {
            inner_color: color,
            outer_color: color,
            ..Self::default()
        }
    }
}

impl Default for VeilConfig {
    fn default() -> Self {
        let color = Rgba::from_rgb_array(VEIL_RGB);
        Self {
            inner_color: color,
            outer_color: color,
            inner_radius: VEIL_INNER_RADIUS,
            outer_radius_factor: VEIL_OUTER_RADIUS_FACTOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub boundary: BoundaryConfig,
    pub particles: ParticleConfig,
    pub veil: VeilConfig,
    /// Seed for particle jitter.
    pub seed: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryConfig::default(),
            particles: ParticleConfig::default(),
            veil: VeilConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn damping(field: &'static str, value: f32) -> Result<(), ConfigError> {
    let v = finite(field, value)?;
    if v > 0.0 && v < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::DampingOutOfRange { field, value })
    }
}

fn range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, min)?;
    finite(field, max)?;
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

impl BoundaryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchor_count < MIN_ANCHOR_COUNT {
            return Err(ConfigError::TooFewAnchors {
                count: self.anchor_count,
                min: MIN_ANCHOR_COUNT,
            });
        }
        positive("rest_radius", self.rest_radius)?;
        positive("tension", self.tension)?;
        damping("boundary damping", self.damping)?;
        non_negative("velocity_gain", self.velocity_gain)?;
        non_negative("drag", self.drag)?;
        Ok(())
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroParticleCap);
        }
        non_negative("motion_threshold", self.motion_threshold)?;
        non_negative("spawn_threshold", self.spawn_threshold)?;
        if self.spawn_threshold < self.motion_threshold {
            return Err(ConfigError::ThresholdOrder {
                motion: self.motion_threshold,
                spawn: self.spawn_threshold,
            });
        }
        range("particle radius", self.radius_min, self.radius_max)?;
        positive("radius_min", self.radius_min)?;
        range("decay rate", self.decay_min, self.decay_max)?;
        positive("decay_min", self.decay_min)?;
        non_negative("velocity_inherit", self.velocity_inherit)?;
        non_negative("velocity_jitter", self.velocity_jitter)?;
        non_negative("angle_jitter", self.angle_jitter)?;
        positive("initial_opacity", self.initial_opacity)?;
        damping("particle damping", self.damping)?;
        Ok(())
    }
}

impl VeilConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("veil inner_radius", self.inner_radius)?;
        positive("veil outer_radius_factor", self.outer_radius_factor)?;
        Ok(())
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.boundary.validate()?;
        self.particles.validate()?;
        self.veil.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RevealConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_ring() {
        let mut cfg = RevealConfig::default();
        cfg.boundary.anchor_count = 2;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooFewAnchors { count: 2, min: 3 })
        );
    }

    #[test]
    fn rejects_undamped_springs() {
        let mut cfg = RevealConfig::default();
        cfg.boundary.damping = 1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DampingOutOfRange { .. })
        ));
        cfg.boundary.damping = f32::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::NotFinite { .. })));
    }

    #[test]
    fn rejects_swapped_thresholds() {
        let mut cfg = RevealConfig::default();
        cfg.particles.motion_threshold = 4.0;
        cfg.particles.spawn_threshold = 3.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ThresholdOrder {
                motion: 4.0,
                spawn: 3.0
            })
        );
    }

    #[test]
    fn rejects_inverted_ranges_and_zero_cap() {
        let mut cfg = RevealConfig::default();
        cfg.particles.decay_min = 0.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedRange { field: "decay rate", .. })
        ));

        let mut cfg = RevealConfig::default();
        cfg.particles.max_particles = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroParticleCap));
    }

    #[test]
    fn degenerate_ranges_are_allowed() {
        let mut cfg = RevealConfig::default();
        cfg.particles.decay_min = 0.05;
        cfg.particles.decay_max = 0.05;
        cfg.particles.radius_min = 4.0;
        cfg.particles.radius_max = 4.0;
        assert_eq!(cfg.validate(), Ok(()));
    }
}
