//! `Surface` over a 2D canvas context.
//!
//! Drawing happens in CSS pixels; the context transform scales to the
//! devicePixelRatio-sized backing store.

use crate::constants::{COMPOSITE_ERASE, COMPOSITE_OVER};
use crate::dom;
use crate::input;
use glam::Vec2;
use reveal_core::{BlendMode, Outline, PathCommand, Rgba, Surface, Veil};
use std::f64::consts::TAU;
use web_sys as web;

pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            dpr: dom::device_pixel_ratio(),
        }
    }

    #[inline]
    fn fill_style(&self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> Option<Vec2> {
        // read the ratio fresh: clear() runs after size() within a tick
        input::backing_to_css(
            self.canvas.width(),
            self.canvas.height(),
            dom::device_pixel_ratio(),
        )
    }

    fn clear(&mut self) {
        // the ratio can change when the window moves between screens
        self.dpr = dom::device_pixel_ratio();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    fn paint_veil(&mut self, veil: &Veil) {
        let (cx, cy) = (veil.center.x as f64, veil.center.y as f64);
        match self.ctx.create_radial_gradient(
            cx,
            cy,
            veil.inner_radius as f64,
            cx,
            cy,
            veil.outer_radius as f64,
        ) {
            Ok(gradient) => {
                _ = gradient.add_color_stop(0.0, &veil.inner_color.to_css());
                _ = gradient.add_color_stop(1.0, &veil.outer_color.to_css());
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Err(e) => {
                log::warn!("[render] radial gradient failed: {:?}", e);
                self.fill_style(veil.inner_color);
            }
        }
        if let Some(size) = self.size() {
            self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
        }
    }

    fn set_blend(&mut self, mode: BlendMode) {
        let op = match mode {
            BlendMode::Over => COMPOSITE_OVER,
            BlendMode::Erase => COMPOSITE_ERASE,
        };
        _ = self.ctx.set_global_composite_operation(op);
    }

    fn fill_outline(&mut self, outline: &Outline, color: Rgba) {
        if outline.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for cmd in outline.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCommand::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCommand::Close => self.ctx.close_path(),
            }
        }
        self.fill_style(color);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.fill_style(color);
        self.ctx.fill();
    }
}
