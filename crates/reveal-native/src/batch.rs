//! Records one tick's drawing as GPU-ready vertex lists.
//!
//! The GPU cannot read back the veil to erase it, so erase fills become
//! triangle fans rendered into the stencil buffer with an invert op (even-odd
//! coverage) and the veil is then drawn only where the stencil is clear. That
//! matches `destination-out` for what the driver does: erase the veil, then
//! paint over it.

use glam::Vec2;
use reveal_core::{BlendMode, Outline, Rgba, Surface, Veil, CURVE_FLATTEN_SEGMENTS};
use std::f32::consts::TAU;

pub const CIRCLE_SEGMENTS: usize = 24;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[derive(Default)]
pub struct FrameBatch {
    size: Option<Vec2>,
    blend: BlendMode,
    pub veil: Option<Veil>,
    /// Triangle list for the stencil cut-out.
    pub erase: Vec<ColorVertex>,
    /// Triangle list painted over the veil with alpha blending.
    pub over: Vec<ColorVertex>,
}

impl FrameBatch {
    /// Start a new frame for a surface of `width` x `height` pixels.
    pub fn begin(&mut self, width: u32, height: u32) {
        self.size = (width > 0 && height > 0).then(|| Vec2::new(width as f32, height as f32));
        self.reset();
    }

    fn reset(&mut self) {
        self.blend = BlendMode::Over;
        self.veil = None;
        self.erase.clear();
        self.over.clear();
    }

    fn target(&mut self) -> &mut Vec<ColorVertex> {
        match self.blend {
            BlendMode::Over => &mut self.over,
            BlendMode::Erase => &mut self.erase,
        }
    }
}

/// Fan triangles `(pts[0], pts[i], pts[i + 1])` over a closed polygon.
fn push_fan(out: &mut Vec<ColorVertex>, pts: &[Vec2], color: [f32; 4]) {
    if pts.len() < 3 {
        return;
    }
    let v = |p: Vec2| ColorVertex {
        pos: p.to_array(),
        color,
    };
    for pair in pts[1..].windows(2) {
        out.push(v(pts[0]));
        out.push(v(pair[0]));
        out.push(v(pair[1]));
    }
}

impl Surface for FrameBatch {
    fn size(&self) -> Option<Vec2> {
        self.size
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn paint_veil(&mut self, veil: &Veil) {
        self.veil = Some(*veil);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn fill_outline(&mut self, outline: &Outline, color: Rgba) {
        let pts = outline.flatten(CURVE_FLATTEN_SEGMENTS);
        let color = color.to_f32_array();
        push_fan(self.target(), &pts, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let pts: Vec<Vec2> = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let a = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
                center + Vec2::new(a.cos(), a.sin()) * radius
            })
            .collect();
        let color = color.to_f32_array();
        push_fan(self.target(), &pts, color);
    }
}
