//! Math utilities and types
//!
//! Provides the rigid-transform math used by the rotation engine. All
//! coordinates are Y-up right-handed; rotations follow the right-hand rule.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Rigid transform representing position and orientation
///
/// Cubies are unit-scale by construction, so the engine carries no scale
/// component; this keeps composition and inversion exact under repeated
/// grouping and ungrouping.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position) * self.rotation.to_homogeneous()
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        Point3::from(self.rotation * point.coords + self.position)
    }

    /// Apply this transform to a vector (rotation only)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector
    }

    /// Combine this transform with another (`self` is the parent)
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * other.position,
            rotation: self.rotation * other.rotation,
        }
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> Transform {
        let inv_rotation = self.rotation.inverse();
        Transform {
            position: inv_rotation * (-self.position),
            rotation: inv_rotation,
        }
    }

    /// Express this world transform relative to a prospective parent
    ///
    /// Returns the compensating local transform such that
    /// `parent.combine(&local)` reproduces `self` exactly. This is the
    /// reparenting primitive: moving an entity under a new parent with the
    /// local computed here causes no visual jump.
    pub fn local_to(&self, parent: &Transform) -> Transform {
        parent.inverse().combine(self)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2, one quarter turn
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Cubic ease-out: fast start, decelerating into the target
    pub fn ease_out_cubic(t: f32) -> f32 {
        let inv = 1.0 - t;
        1.0 - inv * inv * inv
    }

    /// Round each component of a position to the nearest lattice point
    ///
    /// `spacing` is the lattice unit; must be positive.
    pub fn snap_to_lattice(position: &Vec3, spacing: f32) -> Vec3 {
        Vec3::new(
            (position.x / spacing).round() * spacing,
            (position.y / spacing).round() * spacing,
            (position.z / spacing).round() * spacing,
        )
    }

    /// Round a rotation to the nearest quarter-turn-aligned orientation
    ///
    /// The 24 axis-aligned cube orientations have rotation matrices whose
    /// entries are exactly -1, 0, or 1, so rounding each entry recovers the
    /// ideal orientation from a drifted one.
    pub fn snap_to_quarter_turn(rotation: &Quat) -> Quat {
        let drifted = rotation.to_rotation_matrix();
        let snapped = Mat3::from_iterator(drifted.matrix().iter().map(|entry| entry.round()));
        Quat::from_rotation_matrix(&nalgebra::Rotation3::from_matrix_unchecked(snapped))
    }
}

#[cfg(test)]
mod tests {
    use super::constants::HALF_PI;
    use super::utils::*;
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_combine_with_inverse_is_identity() {
        let transform = Transform::from_position_rotation(
            Vec3::new(2.0, -1.0, 3.0),
            Quat::from_axis_angle(&Vec3::y_axis(), 0.7),
        );

        let identity = transform.combine(&transform.inverse());

        assert_relative_eq!(identity.position, Vec3::zeros(), epsilon = EPSILON);
        let dot = identity.rotation.coords.dot(&Quat::identity().coords);
        assert!(dot.abs() > 0.999, "rotation not identity: dot = {}", dot);
    }

    #[test]
    fn test_combine_rotates_child_position() {
        let parent = Transform::from_position_rotation(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::y_axis(), HALF_PI),
        );
        let child = Transform::from_position(Vec3::new(0.0, 0.0, 1.0));

        let combined = parent.combine(&child);

        // (0,0,1) rotated 90 degrees about Y lands on (1,0,0), then translated
        assert_relative_eq!(combined.position, Vec3::new(2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_local_to_round_trips_world_pose() {
        let parent = Transform::from_position_rotation(
            Vec3::new(0.5, 2.0, -1.5),
            Quat::from_axis_angle(&Vec3::x_axis(), 1.2),
        );
        let world = Transform::from_position_rotation(
            Vec3::new(-1.0, 1.0, 1.0),
            Quat::from_axis_angle(&Vec3::z_axis(), -0.4),
        );

        let local = world.local_to(&parent);
        let rebuilt = parent.combine(&local);

        assert_relative_eq!(rebuilt.position, world.position, epsilon = EPSILON);
        let dot = rebuilt.rotation.coords.dot(&world.rotation.coords);
        assert!(dot.abs() > 0.999, "reparent changed orientation: dot = {}", dot);
    }

    #[test]
    fn test_snap_to_lattice() {
        let spacing = 1.05;
        let drifted = Vec3::new(1.0501, -1.0498, 0.0003);

        let snapped = snap_to_lattice(&drifted, spacing);

        assert_relative_eq!(snapped, Vec3::new(spacing, -spacing, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_snap_to_quarter_turn_recovers_exact_orientation() {
        // A quarter turn with a small angular error on a different axis
        let drift = Quat::from_axis_angle(&Vec3::z_axis(), 0.003);
        let drifted = drift * Quat::from_axis_angle(&Vec3::x_axis(), HALF_PI + 0.002);

        let snapped = snap_to_quarter_turn(&drifted);
        let ideal = Quat::from_axis_angle(&Vec3::x_axis(), HALF_PI);

        let dot = snapped.coords.dot(&ideal.coords);
        assert!(dot.abs() > 0.9999, "snap missed the ideal orientation: dot = {}", dot);
    }

    #[test]
    fn test_snap_to_quarter_turn_is_stable_on_identity() {
        let snapped = snap_to_quarter_turn(&Quat::identity());
        let dot = snapped.coords.dot(&Quat::identity().coords);
        assert!(dot.abs() > 0.9999);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_relative_eq!(ease_out_cubic(0.0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(ease_out_cubic(1.0), 1.0, epsilon = EPSILON);
        // Decelerating: the first half covers more than half the distance
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
