use glam::Vec2;
use web_sys as web;

/// CSS-pixel size of a backing store of `width` x `height` device pixels.
///
/// `None` for an empty backing store or a non-positive ratio.
pub fn backing_to_css(width: u32, height: u32, dpr: f64) -> Option<Vec2> {
    if width == 0 || height == 0 || !(dpr.is_finite() && dpr > 0.0) {
        return None;
    }
    Some(Vec2::new(width as f32, height as f32) / dpr as f32)
}

/// Map client coordinates into the canvas' CSS pixel space.
///
/// `rect_origin`/`rect_size` are the canvas bounding rect. A collapsed rect
/// maps everything to its origin.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    client - rect_origin
}

/// Starting pointer position: middle of the canvas.
#[inline]
pub fn canvas_center(css_width: f32, css_height: f32) -> Vec2 {
    Vec2::new(css_width.max(0.0), css_height.max(0.0)) * 0.5
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}
