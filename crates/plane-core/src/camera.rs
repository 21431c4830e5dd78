//! Camera description, orbit controls and screen-to-world rays.
//!
//! These types avoid platform APIs so picking can be exercised on the host.

use crate::constants::{
    DEFAULT_FOVY_DEGREES, DEFAULT_ZFAR, DEFAULT_ZNEAR, MAX_ORBIT_DISTANCE, MIN_ORBIT_DISTANCE,
    ORBIT_PITCH_LIMIT, ORBIT_RADIANS_PER_PX, ZOOM_STEP,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }
}

/// Drawable area in backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Pixel position (origin top-left, y down) to NDC (origin center, y up).
    #[inline]
    pub fn to_ndc(&self, px: Vec2) -> Vec2 {
        Vec2::new(
            (2.0 * px.x / self.width.max(1.0)) - 1.0,
            1.0 - (2.0 * px.y / self.height.max(1.0)),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn from_pixel(camera: &Camera, viewport: Viewport, px: Vec2) -> Self {
        camera.ray_through_ndc(viewport.to_ndc(px))
    }
}

/// Orbit controls around a fixed target: drag rotates, wheel zooms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    home: (f32, f32, f32),
}

impl OrbitCamera {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(MIN_ORBIT_DISTANCE);
        let pitch = (offset.y / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        let yaw = offset.x.atan2(offset.z);
        Self {
            target,
            distance,
            yaw,
            pitch,
            fovy_radians: DEFAULT_FOVY_DEGREES.to_radians(),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
            home: (distance, yaw, pitch),
        }
    }

    pub fn with_projection(mut self, fovy_degrees: f32, znear: f32, zfar: f32) -> Self {
        self.fovy_radians = fovy_degrees.to_radians();
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    /// Rotate by a pointer drag expressed in pixels.
    pub fn rotate(&mut self, delta_px: Vec2) {
        self.yaw -= delta_px.x * ORBIT_RADIANS_PER_PX;
        self.pitch = (self.pitch + delta_px.y * ORBIT_RADIANS_PER_PX)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Positive `notches` move away from the target.
    pub fn zoom(&mut self, notches: f32) {
        self.distance =
            (self.distance * ZOOM_STEP.powf(-notches)).clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
    }

    pub fn reset(&mut self) {
        (self.distance, self.yaw, self.pitch) = self.home;
    }

    pub fn camera(&self, viewport: Viewport) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: self.fovy_radians,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_at_reproduces_eye() {
        let eye = Vec3::new(5.0, 10.0, 30.0);
        let orbit = OrbitCamera::looking_at(eye, Vec3::ZERO);
        assert!((orbit.eye() - eye).length() < 1e-3);
    }

    #[test]
    fn center_pixel_maps_to_ndc_origin() {
        let vp = Viewport::new(800.0, 600.0);
        let ndc = vp.to_ndc(Vec2::new(400.0, 300.0));
        assert!(ndc.length() < 1e-6);
        assert_eq!(vp.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn center_ray_points_at_target() {
        let orbit = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 30.0), Vec3::ZERO);
        let vp = Viewport::new(640.0, 480.0);
        let ray = Ray::from_pixel(&orbit.camera(vp), vp, Vec2::new(320.0, 240.0));
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn eye_straight_above_target_stays_off_the_pole() {
        let orbit = OrbitCamera::looking_at(Vec3::new(0.0, 30.0, 0.0), Vec3::ZERO);
        assert!(orbit.pitch <= ORBIT_PITCH_LIMIT);
        let vp = Viewport::new(640.0, 480.0);
        let view_proj = orbit.camera(vp).view_proj();
        assert!(view_proj.is_finite());
        let eye = orbit.eye();
        assert!(eye.x.abs() + eye.z.abs() > 1e-3);
    }

    #[test]
    fn pitch_is_clamped_short_of_pole() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        orbit.rotate(Vec2::new(0.0, 1.0e6));
        assert!(orbit.pitch <= ORBIT_PITCH_LIMIT);
        orbit.reset();
        assert!(orbit.pitch.abs() < 1e-6);
    }

    #[test]
    fn zoom_stays_within_limits() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        orbit.zoom(-1000.0);
        assert_eq!(orbit.distance, MIN_ORBIT_DISTANCE);
        orbit.zoom(1000.0);
        assert_eq!(orbit.distance, MAX_ORBIT_DISTANCE);
    }
}
