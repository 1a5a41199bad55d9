use glam::{Mat3, Mat4, Quat, Vec3};

/// Placement of one voxel relative to the cube center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Cube-local position, already scaled by the voxel spacing
    pub position: Vec3,
    /// Orientation as a unit quaternion
    pub rotation: Quat,
    /// Uniform scale
    pub scale: f32,
}

impl Pose {
    pub fn new(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale,
        }
    }

    /// Rotate position and orientation about the cube center
    ///
    /// The rotation is applied on the left so repeated increments compose in
    /// world space regardless of step size.
    #[inline]
    pub fn rotate_about_center(&mut self, rotation: Quat) {
        self.position = rotation * self.position;
        self.rotation = (rotation * self.rotation).normalize();
    }

    /// Round the orientation to the nearest right-angle rotation
    ///
    /// Only meaningful when the orientation is already within 45 degrees of
    /// one of the 24 axis-aligned rotations, which holds after every commit.
    /// The quaternion stays in the same hemisphere as before.
    pub fn snap_rotation(&mut self) {
        let m = Mat3::from_quat(self.rotation);
        let snapped = Mat3::from_cols(
            m.x_axis.round(),
            m.y_axis.round(),
            m.z_axis.round(),
        );
        let q = Quat::from_mat3(&snapped).normalize();
        self.rotation = if q.dot(self.rotation) < 0.0 { -q } else { q };
    }

    /// Model matrix: translate * rotate * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }

    /// Approximate equality for positions and rotations
    ///
    /// Quaternions `q` and `-q` describe the same rotation and compare equal.
    pub fn abs_diff_eq(&self, other: &Pose, max_abs_diff: f32) -> bool {
        let same_rotation = self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
            || self.rotation.abs_diff_eq(-other.rotation, max_abs_diff);
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && same_rotation
            && (self.scale - other.scale).abs() <= max_abs_diff
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_matrix_places_origin_at_position() {
        let pose = Pose::new(Vec3::new(1.3, 0.0, -1.3), 1.0);
        let origin = pose.matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(pose.position, 1e-6));
    }

    #[test]
    fn test_rotate_about_center_moves_position() {
        let mut pose = Pose::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        pose.rotate_about_center(Quat::from_axis_angle(Vec3::X, -FRAC_PI_2));
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
        assert!(pose
            .rotation
            .abs_diff_eq(Quat::from_rotation_x(-FRAC_PI_2), 1e-6));
    }

    #[test]
    fn test_increments_compose() {
        let mut stepped = Pose::new(Vec3::new(1.0, 1.0, 1.0), 1.0);
        let mut single = stepped;
        for _ in 0..10 {
            stepped.rotate_about_center(Quat::from_axis_angle(Vec3::Y, 0.1));
        }
        single.rotate_about_center(Quat::from_axis_angle(Vec3::Y, 1.0));
        assert!(stepped.abs_diff_eq(&single, 1e-5));
    }

    #[test]
    fn test_snap_rotation_removes_drift() {
        let exact = Quat::from_rotation_y(FRAC_PI_2) * Quat::from_rotation_x(-FRAC_PI_2);
        let mut pose = Pose::default();
        pose.rotation = (Quat::from_rotation_z(0.01) * exact).normalize();
        pose.snap_rotation();
        assert!(pose.rotation.abs_diff_eq(exact, 1e-5));
    }

    #[test]
    fn test_snap_rotation_keeps_hemisphere() {
        let mut pose = Pose::default();
        pose.rotation = -Quat::from_rotation_x(0.02);
        pose.snap_rotation();
        assert!(pose.rotation.abs_diff_eq(-Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_negated_quaternion_is_same_pose() {
        let a = Pose {
            position: Vec3::X,
            rotation: Quat::from_rotation_z(0.5),
            scale: 1.0,
        };
        let b = Pose {
            rotation: -a.rotation,
            ..a
        };
        assert!(a.abs_diff_eq(&b, 1e-6));
    }
}
