//! The die's rigid body state and per-frame integration

use crate::params::PhysicsParams;
use tumble_math::{Aabb3, Vec3};

/// The die's full dynamic state
///
/// Orientation and angular velocity are XYZ Euler-angle triples, matching
/// the scene-graph convention the original demo used. The interaction
/// layer writes orientation directly while a drag is active; integration
/// owns it otherwise.
#[derive(Clone, Copy, Debug)]
pub struct DieBody {
    /// Center position in world space
    pub position: Vec3,
    /// Orientation as XYZ Euler angles (radians)
    pub orientation: Vec3,
    /// Linear velocity (units per frame)
    pub velocity: Vec3,
    /// Angular velocity (radians per frame, per Euler axis)
    pub angular_velocity: Vec3,
    /// Half the cube's edge length
    pub half_size: f32,
}

impl DieBody {
    /// Create a die of the given edge length, at rest at `position`
    pub fn new(position: Vec3, size: f32) -> Self {
        Self {
            position,
            orientation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            half_size: size * 0.5,
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Set the initial orientation
    pub fn with_orientation(mut self, orientation: Vec3) -> Self {
        self.orientation = orientation;
        self
    }

    /// Zero both velocity fields
    ///
    /// Called when a drag begins: while the pointer owns the die, it must
    /// not drift or keep tumbling.
    pub fn stop(&mut self) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }

    /// World-space bounding box at the current position
    ///
    /// The box ignores the die's rotation; picking treats the die as an
    /// axis-aligned cube at its current center.
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::from_center_half_size(self.position, self.half_size)
    }

    /// Advance the body by one animation frame
    ///
    /// Explicit Euler with a fixed step:
    /// 1. gravity into velocity, velocity into position
    /// 2. angular velocity into orientation, then angular damping
    /// 3. floor contact: clamp to resting height, flip and attenuate
    ///    vertical velocity, damp the tumble harder
    /// 4. linear damping
    pub fn step(&mut self, params: &PhysicsParams) {
        self.velocity += params.gravity;
        self.position += self.velocity;

        self.orientation += self.angular_velocity;
        self.angular_velocity *= params.angular_damping;

        if self.position.y - self.half_size <= params.floor_y {
            self.position.y = params.floor_y + self.half_size;
            self.velocity.y *= -params.restitution;
            self.angular_velocity *= params.bounce_angular_damping;
        }

        self.velocity *= params.linear_damping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    /// Params with damping disabled, for checking raw accumulation
    fn undamped() -> PhysicsParams {
        PhysicsParams {
            angular_damping: 1.0,
            linear_damping: 1.0,
            ..PhysicsParams::default()
        }
    }

    /// A die floating far above the floor so contact never triggers
    fn airborne_die() -> DieBody {
        DieBody::new(Vec3::new(0.0, 100.0, 0.0), 1.0)
    }

    #[test]
    fn test_new_die_at_rest() {
        let die = DieBody::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
        assert_eq!(die.position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(die.velocity, Vec3::ZERO);
        assert_eq!(die.angular_velocity, Vec3::ZERO);
        assert_eq!(die.half_size, 0.5);
    }

    #[test]
    fn test_stop_zeroes_velocities() {
        let mut die = airborne_die()
            .with_velocity(Vec3::new(1.0, 2.0, 3.0))
            .with_angular_velocity(Vec3::new(0.1, 0.2, 0.3));
        die.stop();
        assert_eq!(die.velocity, Vec3::ZERO);
        assert_eq!(die.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn test_aabb_tracks_position() {
        let die = DieBody::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        let aabb = die.aabb();
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_single_frame_gravity() {
        // One idle frame from rest: velocity picks up exactly g, then the
        // linear damping factor applies on the way out.
        let mut die = airborne_die();
        die.step(&PhysicsParams::default());
        assert!((die.velocity.y - (-0.02 * 0.99)).abs() < EPSILON);
        // Position integrated the pre-damping velocity
        assert!((die.position.y - (100.0 - 0.02)).abs() < EPSILON);
    }

    #[test]
    fn test_gravity_accumulates_deterministically() {
        // With damping disabled, k frames accumulate velocity.y = -k * g
        let mut die = airborne_die();
        let params = undamped();
        for _ in 0..10 {
            die.step(&params);
        }
        assert!((die.velocity.y - (-10.0 * 0.02)).abs() < EPSILON);
    }

    #[test]
    fn test_two_identical_dice_stay_in_lockstep() {
        // No randomness in the step: same inputs, same trajectory
        let params = PhysicsParams::default();
        let mut a = airborne_die().with_velocity(Vec3::new(0.01, 0.0, -0.01));
        let mut b = a;
        for _ in 0..200 {
            a.step(&params);
            b.step(&params);
        }
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }

    #[test]
    fn test_angular_velocity_integrates_into_orientation() {
        let mut die = airborne_die().with_angular_velocity(Vec3::new(0.1, 0.0, -0.1));
        die.step(&undamped());
        assert!((die.orientation.x - 0.1).abs() < EPSILON);
        assert!((die.orientation.z - (-0.1)).abs() < EPSILON);
    }

    #[test]
    fn test_angular_damping_applied_per_frame() {
        let mut die = airborne_die().with_angular_velocity(Vec3::new(0.1, 0.0, 0.0));
        die.step(&PhysicsParams::default());
        assert!((die.angular_velocity.x - 0.1 * 0.98).abs() < EPSILON);
    }

    #[test]
    fn test_floor_clamp_is_exact() {
        // Die sinking through the floor gets snapped to resting height
        let mut die = DieBody::new(Vec3::new(0.0, 0.45, 0.0), 1.0)
            .with_velocity(Vec3::new(0.0, -0.1, 0.0));
        die.step(&PhysicsParams::default());
        assert_eq!(die.position.y, 0.5);
    }

    #[test]
    fn test_bounce_flips_and_attenuates_vertical_velocity() {
        // Gravity zeroed so the incoming speed is exactly -0.1
        let params = PhysicsParams {
            gravity: Vec3::ZERO,
            linear_damping: 1.0,
            ..PhysicsParams::default()
        };
        let mut die = DieBody::new(Vec3::new(0.0, 0.52, 0.0), 1.0)
            .with_velocity(Vec3::new(0.0, -0.1, 0.0));
        die.step(&params);
        assert!(die.velocity.y > 0.0, "bounce should flip velocity sign");
        assert!((die.velocity.y - 0.03).abs() < EPSILON);
    }

    #[test]
    fn test_bounce_damps_tumble_harder() {
        let params = PhysicsParams {
            gravity: Vec3::ZERO,
            ..PhysicsParams::default()
        };
        let mut die = DieBody::new(Vec3::new(0.0, 0.52, 0.0), 1.0)
            .with_velocity(Vec3::new(0.0, -0.1, 0.0))
            .with_angular_velocity(Vec3::new(0.1, 0.0, 0.0));
        die.step(&params);
        // Frame damping then the bounce factor
        assert!((die.angular_velocity.x - 0.1 * 0.98 * 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_rest_just_above_floor_scenario() {
        // At rest 1mm above resting height: one frame of gravity pulls the
        // die through the floor, and the contact branch fires in that same
        // step, leaving it clamped with a small upward bounce.
        let mut die = DieBody::new(Vec3::new(0.0, 0.501, 0.0), 1.0);
        die.step(&PhysicsParams::default());
        assert_eq!(die.position.y, 0.5);
        assert!((die.velocity.y - 0.02 * 0.3 * 0.99).abs() < EPSILON);
    }

    #[test]
    fn test_settles_near_floor() {
        // Dropped from the original demo's start height, the die ends up
        // sitting on the floor with negligible motion.
        let params = PhysicsParams::default();
        let mut die = DieBody::new(Vec3::new(0.0, 2.0, 0.0), 1.0)
            .with_angular_velocity(Vec3::new(0.02, 0.02, 0.02));
        for _ in 0..2000 {
            die.step(&params);
        }
        assert!((die.position.y - 0.5).abs() < 0.05, "die should rest on the floor, got y={}", die.position.y);
        assert!(die.velocity.length() < 0.05);
        assert!(die.angular_velocity.length() < 1e-3);
    }

    #[test]
    fn test_horizontal_velocity_decays() {
        let params = PhysicsParams {
            gravity: Vec3::ZERO,
            ..PhysicsParams::default()
        };
        let mut die = airborne_die().with_velocity(Vec3::new(0.1, 0.0, 0.0));
        for _ in 0..100 {
            die.step(&params);
        }
        assert!((die.velocity.x - 0.1 * 0.99f32.powi(100)).abs() < 1e-4);
    }
}
