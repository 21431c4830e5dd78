use super::helpers;

pub struct RenderTargets {
    pub depth_tex: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, width, height);
        Self {
            depth_tex,
            depth_view,
        }
    }

    pub fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_tex.destroy();
        let (tex, view) = helpers::create_depth_texture(device, width, height);
        self.depth_tex = tex;
        self.depth_view = view;
    }
}
