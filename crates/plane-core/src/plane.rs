//! Image planes and the registry that owns them.
//!
//! The registry is an ordered collection: insertion order is draw order.
//! Planes are never removed, so a [`PlaneId`] is a stable index.

use crate::error::{Result, ViewerError};
use crate::tone::ToneSettings;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::{PI, TAU};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaneId(pub u32);

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the caller asks for when adding a plane.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneDesc {
    pub src: String,
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
}

impl PlaneDesc {
    pub fn new(src: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
            position: Vec3::ZERO,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

/// Per-plane shader state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneShading {
    pub brightness: f32,
    pub contrast_factor: f32,
    pub opacity: f32,
    pub hovered: bool,
    pub selected: bool,
}

impl PlaneShading {
    /// Shading for a freshly added plane: current tone, full opacity, no flags.
    pub fn initial(tone: &ToneSettings) -> Self {
        Self {
            brightness: tone.brightness,
            contrast_factor: tone.contrast_factor(),
            opacity: 1.0,
            hovered: false,
            selected: false,
        }
    }

    pub fn apply_tone(&mut self, tone: &ToneSettings) {
        self.brightness = tone.brightness;
        self.contrast_factor = tone.contrast_factor();
        self.opacity = tone.opacity;
    }
}

pub struct ImagePlane<T> {
    pub id: PlaneId,
    pub src: String,
    pub size: Vec2,
    pub position: Vec3,
    /// XYZ Euler angles in radians, each kept in `[0, 2π)`.
    pub rotation: Vec3,
    pub shading: PlaneShading,
    pub texture: T,
}

impl<T> ImagePlane<T> {
    pub fn new(id: PlaneId, desc: PlaneDesc, texture: T, shading: PlaneShading) -> Self {
        Self {
            id,
            src: desc.src,
            size: Vec2::new(desc.width, desc.height),
            position: desc.position,
            rotation: Vec3::ZERO,
            shading,
            texture,
        }
    }

    /// Half turn about the vertical axis.
    pub fn flip(&mut self) {
        self.rotation.y = wrap_angle(self.rotation.y + PI);
    }

    /// Half turn about the horizontal axis.
    pub fn mirror(&mut self) {
        self.rotation.x = wrap_angle(self.rotation.x + PI);
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }

    /// Distance along the ray to this plane's rectangle, if hit.
    ///
    /// Both faces are pickable. `ray_dir` is expected to be normalized.
    pub fn intersect(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let rot = self.orientation();
        let normal = rot * Vec3::Z;
        let denom = normal.dot(ray_dir);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = normal.dot(self.position - ray_origin) / denom;
        if t < 0.0 {
            return None;
        }
        let local = rot.inverse() * (ray_origin + ray_dir * t - self.position);
        let half = self.size * 0.5;
        (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
    }
}

#[inline]
fn wrap_angle(radians: f32) -> f32 {
    radians.rem_euclid(TAU)
}

/// Ordered owner of every plane in the scene.
///
/// At most one plane is selected at any time.
pub struct PlaneRegistry<T> {
    planes: Vec<ImagePlane<T>>,
    selected: Option<PlaneId>,
}

impl<T> Default for PlaneRegistry<T> {
    fn default() -> Self {
        Self {
            planes: Vec::new(),
            selected: None,
        }
    }
}

impl<T> PlaneRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, desc: PlaneDesc, texture: T, shading: PlaneShading) -> PlaneId {
        let id = PlaneId(self.planes.len() as u32);
        self.planes.push(ImagePlane::new(id, desc, texture, shading));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn get(&self, id: PlaneId) -> Option<&ImagePlane<T>> {
        self.planes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: PlaneId) -> Option<&mut ImagePlane<T>> {
        self.planes.get_mut(id.0 as usize)
    }

    fn get_checked(&mut self, id: PlaneId) -> Result<&mut ImagePlane<T>> {
        self.get_mut(id).ok_or(ViewerError::UnknownPlane(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImagePlane<T>> {
        self.planes.iter()
    }

    pub fn as_slice(&self) -> &[ImagePlane<T>] {
        &self.planes
    }

    pub fn last_id(&self) -> Option<PlaneId> {
        self.planes.last().map(|p| p.id)
    }

    #[inline]
    pub fn selected_id(&self) -> Option<PlaneId> {
        self.selected
    }

    pub fn selected_mut(&mut self) -> Option<&mut ImagePlane<T>> {
        let id = self.selected?;
        self.get_mut(id)
    }

    /// Make `id` the only selected plane.
    pub fn set_selected(&mut self, id: PlaneId) -> Result<()> {
        self.get_checked(id)?;
        for plane in &mut self.planes {
            plane.shading.selected = plane.id == id;
        }
        if self.selected != Some(id) {
            log::info!("[planes] selected {}", id);
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for plane in &mut self.planes {
            plane.shading.selected = false;
        }
        if let Some(prev) = self.selected.take() {
            log::info!("[planes] cleared selection (was {})", prev);
        }
    }

    /// Clear every hover flag, then set it on `id` if given.
    pub fn set_hovered(&mut self, id: Option<PlaneId>) {
        for plane in &mut self.planes {
            plane.shading.hovered = Some(plane.id) == id;
        }
    }

    pub fn hovered_id(&self) -> Option<PlaneId> {
        self.planes.iter().find(|p| p.shading.hovered).map(|p| p.id)
    }

    pub fn flip(&mut self, id: PlaneId) -> Result<()> {
        self.get_checked(id)?.flip();
        log::info!("[planes] flip {}", id);
        Ok(())
    }

    pub fn mirror(&mut self, id: PlaneId) -> Result<()> {
        self.get_checked(id)?.mirror();
        log::info!("[planes] mirror {}", id);
        Ok(())
    }
}

/// GPU-facing layout of one plane's uniforms.
///
/// Matches `PlaneUniforms` in `plane.wgsl`; flags are encoded as 0.0 / 1.0.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub size: [f32; 2],
    pub brightness: f32,
    pub contrast: f32,
    pub opacity: f32,
    pub hovered: f32,
    pub selected: f32,
    pub _pad: f32,
}

impl PlaneUniforms {
    pub fn new<T>(view_proj: Mat4, plane: &ImagePlane<T>) -> Self {
        let s = &plane.shading;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: plane.model_matrix().to_cols_array_2d(),
            size: plane.size.to_array(),
            brightness: s.brightness,
            contrast: s.contrast_factor,
            opacity: s.opacity,
            hovered: if s.hovered { 1.0 } else { 0.0 },
            selected: if s.selected { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(n: usize) -> PlaneRegistry<()> {
        let mut reg = PlaneRegistry::new();
        for i in 0..n {
            reg.insert(
                PlaneDesc::new(format!("img{i}.png"), 40.0, 40.0),
                (),
                PlaneShading::initial(&ToneSettings::default()),
            );
        }
        reg
    }

    #[test]
    fn ids_follow_insertion_order() {
        let reg = registry_with(3);
        let ids: Vec<u32> = reg.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(reg.last_id(), Some(PlaneId(2)));
    }

    #[test]
    fn unknown_plane_is_rejected() {
        let mut reg = registry_with(1);
        assert!(matches!(
            reg.set_selected(PlaneId(7)),
            Err(ViewerError::UnknownPlane(PlaneId(7)))
        ));
        assert!(reg.selected_id().is_none());
    }

    #[test]
    fn uniforms_encode_flags_and_contrast_factor() {
        let mut reg = registry_with(2);
        reg.set_hovered(Some(PlaneId(1)));
        reg.set_selected(PlaneId(0)).unwrap();
        let tone = ToneSettings {
            brightness: 0.2,
            contrast: 50.0,
            opacity: 0.4,
        };
        reg.selected_mut().unwrap().shading.apply_tone(&tone);

        let selected = PlaneUniforms::new(Mat4::IDENTITY, reg.get(PlaneId(0)).unwrap());
        assert_eq!((selected.hovered, selected.selected), (0.0, 1.0));
        assert_eq!(selected.brightness, 0.2);
        assert_eq!(selected.contrast, tone.contrast_factor());
        assert_ne!(selected.contrast, tone.contrast);
        assert_eq!(selected.opacity, 0.4);
        assert_eq!(selected.size, [40.0, 40.0]);

        let hovered = PlaneUniforms::new(Mat4::IDENTITY, reg.get(PlaneId(1)).unwrap());
        assert_eq!((hovered.hovered, hovered.selected), (1.0, 0.0));
        assert_eq!(hovered.opacity, 1.0);
    }

    #[test]
    fn uniforms_are_sixteen_byte_aligned() {
        assert_eq!(std::mem::size_of::<PlaneUniforms>() % 16, 0);
    }
}
