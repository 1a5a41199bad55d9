use glam::{Mat4, Quat, Vec3};

/// Fixed viewpoint looking at the cube from the (+x, +y, +z) octant
///
/// Only the orientation matters to the driver: it turns screen-space drags
/// into world-space rotations of the whole cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub position: Vec3,
    /// Camera-local to world rotation
    pub orientation: Quat,
}

impl ViewCamera {
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vec3::splat(5.0),
            orientation: Quat::IDENTITY,
        };
        // Yaw 45 degrees, then pitch down onto the cube diagonal
        camera.rotate_global(camera.up(), 45f32.to_radians());
        camera.rotate_global(camera.right(), -(1.0 / 2f32.sqrt()).atan());
        camera
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Direction from the focus back toward the camera
    pub fn behind(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// Rotate about a world-space axis
    pub fn rotate_global(&mut self, axis: Vec3, radians: f32) {
        self.orientation = (Quat::from_axis_angle(axis.normalize(), radians) * self.orientation)
            .normalize();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.inverse()) * Mat4::from_translation(-self.position)
    }

    /// World-space rotation for a drag of `(dx, dy)` pixels over `dt` seconds
    ///
    /// Screen y grows downward. Returns `None` for a zero-length drag.
    pub fn drag_rotation(&self, dx: f32, dy: f32, sensitivity: f32, dt: f32) -> Option<Quat> {
        let movement = self.orientation * Vec3::new(dx, -dy, 0.0);
        let axis = self.behind().cross(movement).try_normalize()?;
        let angle = movement.length() * sensitivity * dt;
        Some(Quat::from_axis_angle(axis, angle))
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new()
    }
}
