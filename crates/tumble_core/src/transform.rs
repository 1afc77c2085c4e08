//! 3D Transform (position, Euler rotation, scale)

use tumble_math::{mat4, Mat4, Vec3};

/// A 3D transform with position, XYZ Euler rotation, and uniform scale
///
/// Rotation is stored as Euler angles rather than a quaternion because the
/// die's interaction and tumbling both work in Euler space: the drag maps
/// pointer travel onto pitch/yaw and the physics integrates angular
/// velocity per axis.
#[derive(Clone, Copy, Debug)]
pub struct Transform3 {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as XYZ Euler angles (radians)
    pub rotation: Vec3,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3 {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Get the rotation matrix (no position or scale)
    #[inline]
    pub fn rotation_matrix(&self) -> Mat4 {
        mat4::euler_rotation(self.rotation)
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then rotation, then translation. When transforming
    /// many points, compute [`Self::rotation_matrix`] once instead.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform_point_with(&self.rotation_matrix(), p)
    }

    /// Transform a point using a precomputed rotation matrix
    #[inline]
    pub fn transform_point_with(&self, rotation: &Mat4, p: Vec3) -> Vec3 {
        let scaled = p * self.scale;
        let rotated = mat4::transform_point(*rotation, scaled);
        rotated + self.position
    }

    /// Transform a direction (scale and rotation, no translation)
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        mat4::transform_point(self.rotation_matrix(), d * self.scale)
    }
}
