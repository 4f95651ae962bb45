// Effect configuration for the page.
//
// Defaults come from `reveal_core`; the overlay canvas may override a few of
// them through `data-*` attributes. A malformed override is logged and
// ignored, and a combination that fails validation falls back to defaults.

use crate::constants::*;
use reveal_core::{RevealConfig, Rgba, VeilConfig, MIN_ANCHOR_COUNT};
use std::fmt::Display;
use std::str::FromStr;

fn parse_attr<T>(get: &impl Fn(&str) -> Option<String>, attr: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = get(attr)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[config] ignoring {attr}={raw:?}: {e}");
            None
        }
    }
}

fn in_bounds<T: PartialOrd + Display + Copy>(attr: &str, v: T, min: T, max: T) -> Option<T> {
    if v >= min && v <= max {
        Some(v)
    } else {
        log::warn!("[config] ignoring {attr}={v}: expected {min}..={max}");
        None
    }
}

/// Build the effect configuration from attribute lookups on the overlay canvas.
pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> RevealConfig {
    let mut config = RevealConfig::default();

    if let Some(raw) = get(ATTR_VEIL_COLOR) {
        match Rgba::from_hex(&raw) {
            Ok(color) => config.veil = VeilConfig::solid(color),
            Err(e) => log::warn!("[config] ignoring {ATTR_VEIL_COLOR}: {e}"),
        }
    }
    if let Some(n) = parse_attr::<usize>(&get, ATTR_POINTS)
        .and_then(|n| in_bounds(ATTR_POINTS, n, MIN_ANCHOR_COUNT, MAX_POINTS_OVERRIDE))
    {
        config.boundary.anchor_count = n;
    }
    if let Some(r) = parse_attr::<f32>(&get, ATTR_RADIUS)
        .and_then(|r| in_bounds(ATTR_RADIUS, r, 1.0, 10_000.0))
    {
        config.boundary.rest_radius = r;
    }
    if let Some(cap) = parse_attr::<usize>(&get, ATTR_MAX_PARTICLES)
        .and_then(|c| in_bounds(ATTR_MAX_PARTICLES, c, 1, MAX_PARTICLES_OVERRIDE))
    {
        config.particles.max_particles = cap;
    }
    if let Some(seed) = parse_attr::<u64>(&get, ATTR_SEED) {
        config.seed = seed;
    }

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] overrides rejected ({e}); using defaults");
            RevealConfig::default()
        }
    }
}
