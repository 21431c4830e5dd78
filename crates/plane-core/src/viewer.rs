//! Viewer state shared by the input handlers and the frame loop.

use crate::camera::{Camera, OrbitCamera, Ray, Viewport};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::pick::{PickController, PickResult};
use crate::plane::{ImagePlane, PlaneDesc, PlaneId, PlaneRegistry, PlaneShading};
use crate::texture::TextureLoader;
use crate::tone::ToneSettings;
use glam::{Mat4, Vec2};
use std::cell::RefCell;

/// Pointer input in canvas backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Move(Vec2),
    Down(Vec2),
    Up(Vec2),
    /// Wheel notches; positive moves away from the target.
    Wheel(f32),
}

/// Everything a renderer needs for one frame.
pub struct FrameInput<'a, T> {
    pub camera: Camera,
    pub view_proj: Mat4,
    pub planes: &'a [ImagePlane<T>],
}

pub struct Viewer<T> {
    pub config: ViewerConfig,
    pub tone: ToneSettings,
    planes: PlaneRegistry<T>,
    picker: PickController,
    orbit: OrbitCamera,
    viewport: Viewport,
    drag_from: Option<Vec2>,
}

impl<T> Viewer<T> {
    pub fn new(config: ViewerConfig, viewport: Viewport) -> Self {
        let orbit = OrbitCamera::looking_at(config.camera_eye, config.camera_target)
            .with_projection(config.fovy_degrees, config.znear, config.zfar);
        Self {
            picker: PickController::new(config.selection),
            config,
            tone: ToneSettings::default(),
            planes: PlaneRegistry::new(),
            orbit,
            viewport,
            drag_from: None,
        }
    }

    #[inline]
    pub fn planes(&self) -> &PlaneRegistry<T> {
        &self.planes
    }

    #[inline]
    pub fn planes_mut(&mut self) -> &mut PlaneRegistry<T> {
        &mut self.planes
    }

    #[inline]
    pub fn picker(&self) -> &PickController {
        &self.picker
    }

    #[inline]
    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn camera(&self) -> Camera {
        self.orbit.camera(self.viewport)
    }

    pub fn insert_plane(&mut self, desc: PlaneDesc, texture: T) -> PlaneId {
        let shading = PlaneShading::initial(&self.tone);
        let (w, h, src) = (desc.width, desc.height, desc.src.clone());
        let id = self.planes.insert(desc, texture, shading);
        log::info!("[planes] added {} `{}` ({}x{})", id, src, w, h);
        id
    }

    pub fn handle_pointer(&mut self, input: PointerInput) -> PickResult {
        match input {
            PointerInput::Move(px) => {
                if let Some(prev) = self.drag_from {
                    self.orbit.rotate(px - prev);
                    self.drag_from = Some(px);
                }
                let ray = self.ray_at(px);
                self.picker.pointer_move(&ray, &mut self.planes)
            }
            PointerInput::Down(px) => {
                self.drag_from = Some(px);
                let ray = self.ray_at(px);
                self.picker.pointer_down(&ray, &mut self.planes)
            }
            PointerInput::Up(_) => {
                self.drag_from = None;
                PickResult::default()
            }
            PointerInput::Wheel(notches) => {
                self.orbit.zoom(notches);
                PickResult::default()
            }
        }
    }

    fn ray_at(&self, px: Vec2) -> Ray {
        Ray::from_pixel(&self.camera(), self.viewport, px)
    }

    /// Plane targeted by the zero-argument panel actions: the selected one,
    /// otherwise the most recently added.
    pub fn action_target(&self) -> Option<PlaneId> {
        self.planes.selected_id().or_else(|| self.planes.last_id())
    }

    pub fn flip(&mut self) -> Result<()> {
        match self.action_target() {
            Some(id) => self.planes.flip(id),
            None => Ok(()),
        }
    }

    pub fn mirror(&mut self) -> Result<()> {
        match self.action_target() {
            Some(id) => self.planes.mirror(id),
            None => Ok(()),
        }
    }

    pub fn clear_selection(&mut self) {
        self.planes.clear_selection();
    }

    pub fn reset_camera(&mut self) {
        self.orbit.reset();
    }

    /// Copy the scene tone onto the selected plane only.
    pub fn push_tone_to_selected(&mut self) {
        let tone = self.tone;
        if let Some(plane) = self.planes.selected_mut() {
            plane.shading.apply_tone(&tone);
        }
    }

    pub fn frame_input(&self) -> FrameInput<'_, T> {
        let camera = self.camera();
        FrameInput {
            view_proj: camera.view_proj(),
            camera,
            planes: self.planes.as_slice(),
        }
    }
}

/// Load the texture for `desc` and append the plane once it is ready.
///
/// The viewer is only borrowed after the load resolves, so input handlers and
/// frames keep running while the fetch is in flight. A failed load is logged
/// and the registry is left unchanged.
pub async fn add_image_plane<L>(
    viewer: &RefCell<Viewer<L::Texture>>,
    loader: &L,
    desc: PlaneDesc,
) -> Option<PlaneId>
where
    L: TextureLoader,
{
    match loader.load(&desc.src).await {
        Ok(texture) => Some(viewer.borrow_mut().insert_plane(desc, texture)),
        Err(e) => {
            log::error!("[planes] texture load failed: {}", e);
            None
        }
    }
}
