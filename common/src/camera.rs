//! Orbital camera for the atom viewer

use glam::{Mat4, Vec3};

/// 3D perspective camera with orbital controls
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    // Orbital parameters
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera3D {
    pub fn new(aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 75.0f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 1000.0,
            distance: 15.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        camera.update_orbital();
        camera
    }

    /// Update camera position based on orbital parameters
    pub fn update_orbital(&mut self) {
        self.position = self.target
            + Vec3::new(
                self.distance * self.pitch.cos() * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                self.distance * self.pitch.cos() * self.yaw.cos(),
            );
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-1.5, 1.5);
        self.update_orbital();
    }

    /// Zoom in/out, never closer than `min_distance`
    pub fn zoom(&mut self, delta: f32, min_distance: f32) {
        self.distance = (self.distance - delta).max(min_distance);
        self.update_orbital();
    }

    /// Unit vector from the camera towards its target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Screen-space right direction in world coordinates
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Screen-space up direction in world coordinates, orthogonal to `forward`
    pub fn screen_up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders.
///
/// `right` and `up` span the billboard plane used by the sphere impostors.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
    pub right: [f32; 4],
    pub up: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_3d(camera: &Camera3D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: camera.position.extend(1.0).to_array(),
            right: camera.right().extend(0.0).to_array(),
            up: camera.screen_up().extend(0.0).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_positive_z_axis() {
        let camera = Camera3D::new(16.0 / 9.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-5);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn billboard_basis_is_orthonormal() {
        let mut camera = Camera3D::new(1.0);
        camera.orbit(0.7, 0.4);
        let (f, r, u) = (camera.forward(), camera.right(), camera.screen_up());
        assert!((r.length() - 1.0).abs() < 1e-4);
        assert!((u.length() - 1.0).abs() < 1e-4);
        assert!(f.dot(r).abs() < 1e-4);
        assert!(f.dot(u).abs() < 1e-4);
        assert!(r.dot(u).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped_and_zoom_has_floor() {
        let mut camera = Camera3D::new(1.0);
        camera.orbit(0.0, 10.0);
        assert_eq!(camera.pitch, 1.5);
        camera.zoom(100.0, 4.0);
        assert_eq!(camera.distance, 4.0);
    }
}
