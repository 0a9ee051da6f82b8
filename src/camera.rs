use glam::{Mat4, Vec2, Vec3};

use crate::types::CameraUniform;

pub const FIELD_OF_VIEW_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 1000.0;
/// Fraction of the remaining distance covered per frame
pub const DEFAULT_EASING: f32 = 0.05;
pub const DEFAULT_DISTANCE: f32 = 100.0;

/// Perspective camera that always looks at the scene origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub aspect: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub easing: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, DEFAULT_DISTANCE),
            aspect,
            fov_y: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            easing: DEFAULT_EASING,
        }
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.position.z = distance.max(0.0);
        self
    }

    pub fn with_easing(mut self, easing: f32) -> Self {
        self.easing = easing.clamp(0.0, 1.0);
        self
    }

    /// Move a fraction of the way toward `(pointer.x, -pointer.y)` in the XY plane
    pub fn ease_toward(&mut self, pointer: Vec2) {
        self.position.x += (pointer.x - self.position.x) * self.easing;
        self.position.y += (-pointer.y - self.position.y) * self.easing;
    }

    /// Dolly along z by a wheel delta; never passes behind the origin plane
    pub fn zoom(&mut self, delta_y: f32) {
        let z = self.position.z - delta_y;
        self.position.z = if z > 0.0 { z } else { 0.0 };
    }

    /// Update aspect ratio; ignores degenerate sizes
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn view_matrix(&self) -> Mat4 {
        let to_target = Vec3::ZERO - self.position;
        if to_target.length_squared() < f32::EPSILON {
            return Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y);
        }
        let up = if to_target.normalize().cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(self.position, Vec3::ZERO, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn to_uniform(&self, model: Mat4) -> CameraUniform {
        let view = self.view_matrix();
        CameraUniform {
            view_proj: (self.projection_matrix() * view).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            model_view: (view * model).to_cols_array_2d(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_z_axis() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_single_ease_step_is_five_percent() {
        let mut camera = Camera::default();
        camera.ease_toward(Vec2::new(100.0, 200.0));
        assert!((camera.position.x - 5.0).abs() < 1e-5);
        assert!((camera.position.y + 10.0).abs() < 1e-5);
        assert_eq!(camera.position.z, 100.0);
    }

    #[test]
    fn test_zoom_floors_at_zero() {
        let mut camera = Camera::default();
        camera.zoom(250.0);
        assert_eq!(camera.position.z, 0.0);
        camera.zoom(-40.0);
        assert_eq!(camera.position.z, 40.0);
    }

    #[test]
    fn test_view_matrix_finite_at_origin() {
        let camera = Camera::default().with_distance(0.0);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_view_matrix_finite_straight_above() {
        let mut camera = Camera::default().with_distance(0.0);
        camera.position.y = 50.0;
        assert!(camera.view_matrix().is_finite());
    }
}
