//! Smoothed closed path through the boundary ring.
//!
//! The path starts at the midpoint of anchors 0 and 1 and then runs one
//! quadratic curve per anchor, using the anchor as control point and the
//! midpoint to its successor as end point. The last curve is controlled by
//! anchor 0 and lands back on the start, so the loop closes for any N.

use crate::boundary::AnchorPoint;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    commands: SmallVec<[PathCommand; 36]>,
}

impl Outline {
    pub fn from_anchors(origin: Vec2, anchors: &[AnchorPoint]) -> Self {
        let n = anchors.len();
        let mut commands = SmallVec::new();
        if n == 0 {
            return Self { commands };
        }
        let at = |i: usize| origin + anchors[i % n].position;
        let start = at(0).lerp(at(1), 0.5);
        commands.push(PathCommand::MoveTo(start));
        for i in 1..=n {
            let ctrl = at(i);
            let to = ctrl.lerp(at(i + 1), 0.5);
            commands.push(PathCommand::QuadTo { ctrl, to });
        }
        commands.push(PathCommand::Close);
        Self { commands }
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Approximate the path with a polyline, `segments` points per curve.
    ///
    /// The closing point is not repeated.
    pub fn flatten(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let mut out = Vec::with_capacity(self.commands.len() * segments);
        let mut pen = Vec2::ZERO;
        let mut start = Vec2::ZERO;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push(p);
                    pen = p;
                    start = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    for s in 1..=segments {
                        let t = s as f32 / segments as f32;
                        out.push(quad_point(pen, ctrl, to, t));
                    }
                    pen = to;
                }
                PathCommand::Close => {
                    if out.len() > 1 && out.last().is_some_and(|p| p.distance(start) < 1e-3) {
                        out.pop();
                    }
                    pen = start;
                }
            }
        }
        out
    }
}

#[inline]
fn quad_point(p0: Vec2, ctrl: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + ctrl * (2.0 * u * t) + p1 * (t * t)
}
