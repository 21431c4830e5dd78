// Shaders bundled as string constants
pub static PLANE_WGSL: &str = include_str!("../shaders/plane.wgsl");
pub static GRID_WGSL: &str = include_str!("../shaders/grid.wgsl");
