//! Line geometry for the ground grid helper.

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GridVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Line list on the XZ plane: `divisions + 1` lines along each axis.
/// The two lines through the origin use `center_color` when `divisions` is even.
pub fn grid_vertices(size: f32, divisions: u32, center_color: u32, line_color: u32) -> Vec<GridVertex> {
    let divisions = divisions.max(1);
    let half = size / 2.0;
    let step = size / divisions as f32;
    let center = rgb_from_hex(center_color);
    let line = rgb_from_hex(line_color);

    let mut out = Vec::with_capacity((divisions as usize + 1) * 4);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if 2 * i == divisions { center } else { line };
        out.push(GridVertex { pos: [-half, 0.0, k], color });
        out.push(GridVertex { pos: [half, 0.0, k], color });
        out.push(GridVertex { pos: [k, 0.0, -half], color });
        out.push(GridVertex { pos: [k, 0.0, half], color });
    }
    out
}
