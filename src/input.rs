use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Wheel delta as zoom notches; positive zooms out.
#[inline]
pub fn wheel_notches(delta_y: f64, delta_mode: u32) -> f32 {
    use crate::constants::{DOM_DELTA_LINE, DOM_DELTA_PIXEL, WHEEL_LINE_PX, WHEEL_NOTCH_PX};
    let dy = delta_y as f32;
    match delta_mode {
        DOM_DELTA_PIXEL => dy / WHEEL_NOTCH_PX,
        DOM_DELTA_LINE => dy * WHEEL_LINE_PX / WHEEL_NOTCH_PX,
        _ => dy.signum(),
    }
}
