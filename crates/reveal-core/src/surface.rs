//! Drawing target abstraction the frame driver composites into.
//!
//! Front-ends implement [`Surface`] over whatever they render with: a 2D
//! canvas context in the browser, a recorded batch for the GPU natively, a
//! command log in tests.

use crate::color::Rgba;
use crate::outline::Outline;
use glam::Vec2;

/// How subsequent fills combine with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Normal source-over painting.
    #[default]
    Over,
    /// Fills remove existing content by their alpha (canvas `destination-out`).
    Erase,
}

/// Radial color wash covering the whole surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Veil {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub inner_color: Rgba,
    pub outer_color: Rgba,
}

pub trait Surface {
    /// Drawable size in pixels, `None` when there is nothing to draw into yet.
    fn size(&self) -> Option<Vec2>;
    fn clear(&mut self);
    fn paint_veil(&mut self, veil: &Veil);
    fn set_blend(&mut self, mode: BlendMode);
    fn fill_outline(&mut self, outline: &Outline, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}
