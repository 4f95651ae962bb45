//! Spring ring that outlines the hole in the veil.
//!
//! Each anchor is pulled toward its home on a circle of `rest_radius` and
//! pushed along the pointer's motion in proportion to how much it faces the
//! direction of travel. Anchors never read each other's state, so one pass
//! over the ring in any order gives the same result.

use crate::config::BoundaryConfig;
use crate::outline::Outline;
use crate::pointer::direction_and_speed;
use glam::Vec2;
use std::f32::consts::TAU;

/// One vertex of the ring, positioned relative to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPoint {
    angle: f32,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl AnchorPoint {
    fn new(angle: f32, radius: f32) -> Self {
        Self {
            angle,
            position: home_position(angle, radius),
            velocity: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn home(&self, radius: f32) -> Vec2 {
        home_position(self.angle, radius)
    }

    #[inline]
    pub fn normal(&self) -> Vec2 {
        Vec2::new(-self.angle.sin(), self.angle.cos())
    }
}

#[inline]
fn home_position(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * radius
}

pub struct BoundarySimulator {
    config: BoundaryConfig,
    points: Vec<AnchorPoint>,
}

impl BoundarySimulator {
    pub fn new(config: BoundaryConfig) -> Self {
        let n = config.anchor_count;
        let points = (0..n)
            .map(|i| AnchorPoint::new(TAU * i as f32 / n as f32, config.rest_radius))
            .collect();
        Self { config, points }
    }

    /// Anchors in ascending angle order.
    #[inline]
    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    /// Mutable anchors; the ring length and angles stay fixed.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [AnchorPoint] {
        &mut self.points
    }

    /// Advance every anchor by one tick under the given pointer velocity.
    pub fn advance(&mut self, pointer_velocity: Vec2) {
        let (dir, speed) = direction_and_speed(pointer_velocity);
        let cfg = &self.config;
        for p in self.points.iter_mut() {
            let home = p.home(cfg.rest_radius);
            let influence = p.normal().dot(dir);
            let offset = influence * speed * cfg.velocity_gain;
            p.velocity += (home - p.position) * cfg.tension + dir * offset * cfg.drag;
            p.velocity *= cfg.damping;
            p.position += p.velocity;
        }
    }

    /// Largest distance of any anchor from its home position.
    pub fn max_home_distance(&self) -> f32 {
        let r = self.config.rest_radius;
        self.points
            .iter()
            .map(|p| p.position.distance(p.home(r)))
            .fold(0.0, f32::max)
    }

    /// Closed curve through the ring, translated to `origin`.
    pub fn outline(&self, origin: Vec2) -> Outline {
        Outline::from_anchors(origin, &self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_ring() -> BoundarySimulator {
        BoundarySimulator::new(BoundaryConfig {
            anchor_count: 8,
            rest_radius: 100.0,
            ..BoundaryConfig::default()
        })
    }

    #[test]
    fn anchors_start_home_in_angle_order() {
        let ring = small_ring();
        assert_eq!(ring.points().len(), 8);
        assert_eq!(ring.max_home_distance(), 0.0);
        for pair in ring.points().windows(2) {
            assert!(pair[1].angle() > pair[0].angle());
        }
        let p0 = ring.points()[0];
        assert!((p0.position - Vec2::new(100.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn still_pointer_keeps_ring_at_rest() {
        let mut ring = small_ring();
        for _ in 0..50 {
            ring.advance(Vec2::ZERO);
        }
        assert!(ring.max_home_distance() < 1e-3);
        assert!(ring.points().iter().all(|p| p.position.is_finite()));
    }

    #[test]
    fn motion_deforms_ring_then_settles() {
        let mut ring = small_ring();
        for _ in 0..5 {
            ring.advance(Vec2::new(40.0, 0.0));
        }
        let bent = ring.max_home_distance();
        assert!(bent > 1.0, "ring did not react to motion: {bent}");
        for _ in 0..400 {
            ring.advance(Vec2::ZERO);
        }
        assert!(ring.max_home_distance() < 0.01);
    }

    #[test]
    fn push_follows_facing_of_each_anchor() {
        let mut ring = small_ring();
        ring.advance(Vec2::new(0.0, 10.0));
        // Anchor 0 sits at angle 0, its normal (0, 1) faces +y motion.
        assert!(ring.points()[0].velocity.y > 0.0);
        // Anchor 4 sits at angle pi, its normal (0, -1) faces away.
        assert!(ring.points()[4].velocity.y < 0.0);
        // Anchor 2 at pi/2 has normal (-1, 0), perpendicular to motion.
        assert!(ring.points()[2].velocity.y.abs() < 1e-4);
    }
}
