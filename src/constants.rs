// Front-end constants for DOM wiring and drawing.

// Canvas element used when present; created and appended to <body> otherwise
pub const CANVAS_ID: &str = "app-canvas";

// Six vertices (two triangles) per image plane quad
pub const PLANE_VERTEX_COUNT: u32 = 6;

// Wheel delta (in CSS pixels) treated as one zoom notch
pub const WHEEL_NOTCH_PX: f32 = 100.0;

// WheelEvent.deltaMode values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;

// Line-mode deltas are roughly this many pixels per line
pub const WHEEL_LINE_PX: f32 = 16.0;
