//! Cursor reveal veil: a spring ring that cuts a hole in a color wash around
//! the pointer, shedding fading bubbles behind it.
//!
//! Platform-free; the web and native front-ends supply a [`Surface`] and call
//! [`FrameDriver::tick`] once per frame.

pub mod boundary;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod outline;
pub mod particles;
pub mod pointer;
pub mod stats;
pub mod surface;

pub use boundary::{AnchorPoint, BoundarySimulator};
pub use color::Rgba;
pub use config::{BoundaryConfig, ParticleConfig, RevealConfig, VeilConfig};
pub use constants::*;
pub use driver::{FrameDriver, TickOutcome};
pub use error::ConfigError;
pub use outline::{Outline, PathCommand};
pub use particles::{spawn_index, Particle, ParticleEmitter};
pub use pointer::{direction_and_speed, PointerSample, PointerState};
pub use stats::FrameStats;
pub use surface::{BlendMode, Surface, Veil};
