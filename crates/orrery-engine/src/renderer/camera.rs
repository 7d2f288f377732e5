use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Below this squared length two points are treated as coincident.
const DEGENERATE_EPS: f32 = 1e-8;

/// Perspective camera. Orientation is defined by the point it aims at.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub aim: Vec3,
    /// World up vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
/// 36 floats: view (16), projection (16), eye xyz + pad.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 36;
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            aim: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Aim the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.aim = target;
    }

    /// Update the aspect ratio on viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Unit vector from the eye toward the aim point, if defined.
    pub fn forward(&self) -> Option<Vec3> {
        let dir = self.aim - self.position;
        (dir.length_squared() > DEGENERATE_EPS).then(|| dir.normalize())
    }

    /// World-to-view matrix.
    ///
    /// With the eye on the aim point the camera keeps an identity orientation.
    /// Looking straight along the up axis falls back to -Z as screen up.
    pub fn view_matrix(&self) -> Mat4 {
        let Some(forward) = self.forward() else {
            return Mat4::from_translation(-self.position);
        };
        let up = if forward.cross(self.up).length_squared() < DEGENERATE_EPS {
            Vec3::NEG_Z
        } else {
            self.up
        };
        Mat4::look_to_rh(self.position, forward, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_36_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn eye_on_target_is_finite() {
        let cam = PerspectiveCamera::default();
        assert!(cam.forward().is_none());
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn top_down_view_is_finite() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(0.0, 300.0, 0.0);
        cam.look_at(Vec3::ZERO);
        let view = cam.view_matrix();
        assert!(view.is_finite());
        // Origin sits 300 units in front of the eye
        let origin = view.transform_point3(Vec3::ZERO);
        assert!((origin.z + 300.0).abs() < 1e-3, "origin in view = {origin:?}");
    }

    #[test]
    fn front_view_centers_origin() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(0.0, 140.0, 300.0);
        cam.look_at(Vec3::ZERO);
        let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-3 && origin.y.abs() < 1e-3);
        assert!(origin.z < 0.0);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut cam = PerspectiveCamera::default();
        cam.resize(800.0, 0.0);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
        cam.resize(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
