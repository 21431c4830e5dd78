use crate::constants::*;
use crate::grid::rgb_from_hex;
use crate::pick::SelectionPolicy;
use glam::Vec3;

/// Construction parameters for a viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// CSS pixel size of the canvas. `None` tracks the browser viewport.
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: u32,
    pub background_alpha: f32,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub grid_size: f32,
    pub grid_divisions: u32,
    pub selection: SelectionPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: DEFAULT_BACKGROUND,
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
            camera_eye: Vec3::from_array(DEFAULT_CAMERA_EYE),
            camera_target: Vec3::ZERO,
            fovy_degrees: DEFAULT_FOVY_DEGREES,
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
            grid_size: GRID_SIZE,
            grid_divisions: GRID_DIVISIONS,
            selection: SelectionPolicy::Sticky,
        }
    }
}

impl ViewerConfig {
    /// Size is fixed only when both dimensions are given.
    pub fn fixed_size(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    /// Premultiplied RGBA clear color.
    pub fn clear_rgba(&self) -> [f64; 4] {
        let [r, g, b] = rgb_from_hex(self.background);
        let a = self.background_alpha.clamp(0.0, 1.0);
        [(r * a) as f64, (g * a) as f64, (b * a) as f64, a as f64]
    }
}
