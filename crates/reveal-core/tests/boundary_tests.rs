// Convergence and stability of the boundary ring.

use glam::Vec2;
use rand::prelude::*;
use reveal_core::{BoundaryConfig, BoundarySimulator};

fn stock_ring() -> BoundarySimulator {
    BoundarySimulator::new(BoundaryConfig {
        anchor_count: 32,
        rest_radius: 800.0,
        ..BoundaryConfig::default()
    })
}

#[test]
fn ring_converges_from_random_offsets() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let mut ring = stock_ring();
        for p in ring.points_mut() {
            p.position += Vec2::new(rng.gen_range(-400.0..400.0), rng.gen_range(-400.0..400.0));
            p.velocity = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        }
        assert!(ring.max_home_distance() > 1.0);
        for _ in 0..500 {
            ring.advance(Vec2::ZERO);
        }
        let d = ring.max_home_distance();
        assert!(d < 1.0, "ring did not settle, max distance {d}");
    }
}

#[test]
fn ring_stays_bounded_under_erratic_motion() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut ring = stock_ring();
    for _ in 0..2000 {
        let v = Vec2::new(rng.gen_range(-120.0..120.0), rng.gen_range(-120.0..120.0));
        ring.advance(v);
        assert!(ring.points().iter().all(|p| p.position.is_finite()));
    }
    assert!(
        ring.max_home_distance() < 800.0 * 4.0,
        "ring blew up: {}",
        ring.max_home_distance()
    );
}

#[test]
fn angles_never_change() {
    let mut ring = stock_ring();
    let before: Vec<f32> = ring.points().iter().map(|p| p.angle()).collect();
    for i in 0..100 {
        ring.advance(Vec2::new(i as f32, -(i as f32) * 0.5));
    }
    let after: Vec<f32> = ring.points().iter().map(|p| p.angle()).collect();
    assert_eq!(before, after);
    assert_eq!(ring.points().len(), 32);
}

#[test]
fn zero_velocity_is_not_a_fault() {
    let mut ring = stock_ring();
    ring.advance(Vec2::ZERO);
    assert!(ring.points().iter().all(|p| p.position.is_finite()));
    assert_eq!(ring.max_home_distance(), 0.0);
}
