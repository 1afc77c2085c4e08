//! Environment constants for the die simulation

use tumble_math::Vec3;

/// Configuration for the die simulation
///
/// All damping factors are per-frame multipliers, not per-second rates;
/// the step runs once per animation frame with no delta-time scaling.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsParams {
    /// Acceleration added to velocity every frame (negative y = down)
    pub gravity: Vec3,
    /// Fraction of vertical speed retained (with sign flip) after a bounce
    pub restitution: f32,
    /// Per-frame angular velocity multiplier (tumbling friction)
    pub angular_damping: f32,
    /// Per-frame linear velocity multiplier (air resistance)
    pub linear_damping: f32,
    /// Extra angular velocity multiplier applied on floor contact
    pub bounce_angular_damping: f32,
    /// Height of the floor plane
    pub floor_y: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -0.02, 0.0),
            restitution: 0.3,
            angular_damping: 0.98,
            linear_damping: 0.99,
            bounce_angular_damping: 0.8,
            floor_y: 0.0,
        }
    }
}

impl PhysicsParams {
    /// Create params with a custom gravity, keeping the default damping
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = PhysicsParams::default();
        assert_eq!(params.gravity, Vec3::new(0.0, -0.02, 0.0));
        assert_eq!(params.restitution, 0.3);
        assert_eq!(params.angular_damping, 0.98);
        assert_eq!(params.linear_damping, 0.99);
        assert_eq!(params.bounce_angular_damping, 0.8);
        assert_eq!(params.floor_y, 0.0);
    }

    #[test]
    fn test_with_gravity() {
        let params = PhysicsParams::with_gravity(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(params.gravity.y, -1.0);
        assert_eq!(params.restitution, 0.3);
    }
}
