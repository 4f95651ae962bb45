use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("anchor count must be at least {min}, got {count}")]
    TooFewAnchors { count: usize, min: usize },

    #[error("{field} must lie in (0, 1), got {value}")]
    DampingOutOfRange { field: &'static str, value: f32 },

    #[error("{field} range is inverted: {min} > {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("spawn threshold {spawn} is below motion threshold {motion}")]
    ThresholdOrder { motion: f32, spawn: f32 },

    #[error("particle cap must be at least 1")]
    ZeroParticleCap,

    #[error("invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),
}
