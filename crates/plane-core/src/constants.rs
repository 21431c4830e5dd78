// Shared tuning constants used by the core and the web front-end.

// Debug-panel slider ranges (inclusive)
pub const BRIGHTNESS_RANGE: (f32, f32) = (-1.0, 1.0);
pub const CONTRAST_RANGE: (f32, f32) = (-1.0, 2.0);
pub const OPACITY_RANGE: (f32, f32) = (0.0, 1.0);

// Initial tone state
pub const DEFAULT_BRIGHTNESS: f32 = 0.001;
pub const DEFAULT_CONTRAST: f32 = 1.0;
pub const DEFAULT_OPACITY: f32 = 1.0;

// Contrast curve constants (8-bit domain)
pub const CONTRAST_SCALE: f32 = 1.0156;
pub const CONTRAST_DOMAIN: f32 = 255.0;

// Camera defaults
pub const DEFAULT_CAMERA_EYE: [f32; 3] = [5.0, 10.0, 30.0];
pub const DEFAULT_FOVY_DEGREES: f32 = 75.0;
pub const DEFAULT_ZNEAR: f32 = 0.1;
pub const DEFAULT_ZFAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
pub const ORBIT_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
pub const ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch toward the target
pub const MIN_ORBIT_DISTANCE: f32 = 1.0;
pub const MAX_ORBIT_DISTANCE: f32 = 500.0;

// Background
pub const DEFAULT_BACKGROUND: u32 = 0xaaaaaa;
pub const DEFAULT_BACKGROUND_ALPHA: f32 = 0.3;

// Grid helper
pub const GRID_SIZE: f32 = 100.0;
pub const GRID_DIVISIONS: u32 = 20;
pub const GRID_CENTER_COLOR: u32 = 0x0000ff;
pub const GRID_LINE_COLOR: u32 = 0x808080;

// Frame stats logging period (seconds)
pub const FPS_LOG_PERIOD_SEC: f32 = 5.0;
