//! Drag state machine for grabbing and flinging the die

use rand::Rng;
use std::f32::consts::TAU;
use tumble_math::{Ray3, Vec3};
use tumble_physics::DieBody;

/// The controller's two states
///
/// `Dragging` carries the orientation captured when the grab started and
/// the pointer delta accumulated since; the live orientation is always
/// `start_orientation + mapped(accumulated delta)`, so it never drifts
/// with frame count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        start_orientation: Vec3,
        accum_x: f32,
        accum_y: f32,
    },
}

/// Pointer interaction controller for the die
///
/// The host feeds it a picking ray on button-down, raw motion deltas while
/// the button is held, and a release notification. Between `on_pointer_down`
/// and `on_pointer_up` the die's orientation is driven directly from the
/// pointer and both velocities stay zero.
pub struct DragController {
    state: DragState,
    viewport_width: f32,
    viewport_height: f32,
    /// Half-width of the uniform throw impulse range, per component
    pub throw_impulse: f32,
}

impl DragController {
    /// Create a controller for the given viewport size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            state: DragState::Idle,
            viewport_width,
            viewport_height,
            throw_impulse: 0.025,
        }
    }

    /// Builder: set the throw impulse range
    pub fn with_throw_impulse(mut self, impulse: f32) -> Self {
        self.throw_impulse = impulse;
        self
    }

    /// Update the viewport size used to normalize pointer deltas
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Whether a drag is currently active
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Current state (mainly for tests and debug display)
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Pointer button pressed: grab the die if the ray hits it
    ///
    /// A miss leaves the controller Idle and the body untouched. On a hit
    /// the current orientation is snapshotted and both velocities zeroed,
    /// so the die holds still under the pointer.
    pub fn on_pointer_down(&mut self, ray: Ray3, body: &mut DieBody) -> bool {
        if ray.intersect_aabb(&body.aabb()).is_none() {
            return false;
        }

        self.state = DragState::Dragging {
            start_orientation: body.orientation,
            accum_x: 0.0,
            accum_y: 0.0,
        };
        body.stop();
        true
    }

    /// Pointer moved by (dx, dy) pixels: rotate the grabbed die
    ///
    /// A full viewport width of horizontal travel is one full turn of yaw;
    /// a full height of vertical travel is one full turn of pitch. No-op
    /// while Idle.
    pub fn on_pointer_move(&mut self, dx: f32, dy: f32, body: &mut DieBody) {
        if let DragState::Dragging {
            start_orientation,
            accum_x,
            accum_y,
        } = &mut self.state
        {
            *accum_x += dx;
            *accum_y += dy;

            let yaw = *accum_x / self.viewport_width * TAU;
            let pitch = *accum_y / self.viewport_height * TAU;

            body.orientation = *start_orientation + Vec3::new(pitch, yaw, 0.0);
        }
    }

    /// Pointer button released: fling the die
    ///
    /// Each component of linear and angular velocity gets an independent
    /// uniform draw from `[-throw_impulse, throw_impulse]`. No-op while Idle.
    pub fn on_pointer_up<R: Rng>(&mut self, body: &mut DieBody, rng: &mut R) {
        if !self.is_dragging() {
            return;
        }
        self.state = DragState::Idle;

        let imp = self.throw_impulse;
        body.velocity = Vec3::new(
            rng.gen_range(-imp..=imp),
            rng.gen_range(-imp..=imp),
            rng.gen_range(-imp..=imp),
        );
        body.angular_velocity = Vec3::new(
            rng.gen_range(-imp..=imp),
            rng.gen_range(-imp..=imp),
            rng.gen_range(-imp..=imp),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f32 = 1e-5;

    fn die() -> DieBody {
        DieBody::new(Vec3::new(0.0, 2.0, 0.0), 1.0)
    }

    fn controller() -> DragController {
        DragController::new(800.0, 600.0)
    }

    /// Ray from the demo camera position straight at the die
    fn hit_ray() -> Ray3 {
        Ray3::new(Vec3::new(0.0, 3.0, 5.0), Vec3::new(0.0, -1.0, -5.0))
    }

    /// Ray pointing well away from the die
    fn miss_ray() -> Ray3 {
        Ray3::new(Vec3::new(0.0, 3.0, 5.0), Vec3::new(1.0, 1.0, 0.0))
    }

    #[test]
    fn test_miss_leaves_idle_and_body_unchanged() {
        let mut ctl = controller();
        let mut body = die()
            .with_velocity(Vec3::new(0.01, 0.0, 0.0))
            .with_orientation(Vec3::new(0.3, 0.0, 0.0));

        let hit = ctl.on_pointer_down(miss_ray(), &mut body);

        assert!(!hit);
        assert!(!ctl.is_dragging());
        assert_eq!(body.velocity, Vec3::new(0.01, 0.0, 0.0));
        assert_eq!(body.orientation, Vec3::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn test_hit_starts_drag_and_zeroes_velocities() {
        let mut ctl = controller();
        let mut body = die()
            .with_velocity(Vec3::new(0.01, 0.02, 0.03))
            .with_angular_velocity(Vec3::new(0.1, 0.1, 0.1));

        let hit = ctl.on_pointer_down(hit_ray(), &mut body);

        assert!(hit);
        assert!(ctl.is_dragging());
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut ctl = controller();
        let mut body = die();
        ctl.on_pointer_move(100.0, 100.0, &mut body);
        assert_eq!(body.orientation, Vec3::ZERO);
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut ctl = controller();
        let mut body = die();
        let mut rng = StdRng::seed_from_u64(1);
        ctl.on_pointer_up(&mut body, &mut rng);
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_full_width_drag_is_one_turn_of_yaw() {
        let mut ctl = controller();
        let mut body = die();
        ctl.on_pointer_down(hit_ray(), &mut body);
        ctl.on_pointer_move(800.0, 0.0, &mut body);
        assert!((body.orientation.y - TAU).abs() < EPSILON);
        assert!((body.orientation.x).abs() < EPSILON);
    }

    #[test]
    fn test_vertical_drag_is_pitch() {
        let mut ctl = controller();
        let mut body = die();
        ctl.on_pointer_down(hit_ray(), &mut body);
        ctl.on_pointer_move(0.0, 300.0, &mut body);
        assert!((body.orientation.x - TAU * 0.5).abs() < EPSILON);
        assert!((body.orientation.y).abs() < EPSILON);
    }

    #[test]
    fn test_orientation_depends_only_on_cumulative_delta() {
        // The same total travel in one move or many small ones lands on the
        // same orientation, regardless of how many events delivered it.
        let start = Vec3::new(0.2, -0.4, 0.1);

        let mut ctl_a = controller();
        let mut body_a = die().with_orientation(start);
        ctl_a.on_pointer_down(hit_ray(), &mut body_a);
        ctl_a.on_pointer_move(120.0, -80.0, &mut body_a);

        let mut ctl_b = controller();
        let mut body_b = die().with_orientation(start);
        ctl_b.on_pointer_down(hit_ray(), &mut body_b);
        for _ in 0..40 {
            ctl_b.on_pointer_move(3.0, -2.0, &mut body_b);
        }

        assert!((body_a.orientation.x - body_b.orientation.x).abs() < EPSILON);
        assert!((body_a.orientation.y - body_b.orientation.y).abs() < EPSILON);
    }

    #[test]
    fn test_drag_offsets_from_start_orientation() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut ctl = controller();
        let mut body = die().with_orientation(start);
        ctl.on_pointer_down(hit_ray(), &mut body);
        ctl.on_pointer_move(80.0, 60.0, &mut body);

        let yaw = 80.0 / 800.0 * TAU;
        let pitch = 60.0 / 600.0 * TAU;
        assert!((body.orientation.x - (start.x + pitch)).abs() < EPSILON);
        assert!((body.orientation.y - (start.y + yaw)).abs() < EPSILON);
        // Roll is never touched by dragging
        assert!((body.orientation.z - start.z).abs() < EPSILON);
    }

    #[test]
    fn test_release_ends_drag_and_flings_within_range() {
        let mut ctl = controller();
        let mut body = die();
        let mut rng = StdRng::seed_from_u64(42);

        ctl.on_pointer_down(hit_ray(), &mut body);
        ctl.on_pointer_up(&mut body, &mut rng);

        assert!(!ctl.is_dragging());
        for c in [
            body.velocity.x,
            body.velocity.y,
            body.velocity.z,
            body.angular_velocity.x,
            body.angular_velocity.y,
            body.angular_velocity.z,
        ] {
            assert!(c.abs() <= 0.025, "impulse component out of range: {}", c);
        }
    }

    #[test]
    fn test_throw_impulse_distribution() {
        // Over many throws the components should spread across the whole
        // range with a mean near zero.
        let mut rng = StdRng::seed_from_u64(7);
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0;
        let n = 1000;

        for _ in 0..n {
            let mut ctl = controller();
            let mut body = die();
            ctl.on_pointer_down(hit_ray(), &mut body);
            ctl.on_pointer_up(&mut body, &mut rng);
            let v = body.velocity.y;
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        assert!(min < -0.015, "lower tail never sampled, min={}", min);
        assert!(max > 0.015, "upper tail never sampled, max={}", max);
        assert!((sum / n as f32).abs() < 0.003, "mean far from zero");
    }

    #[test]
    fn test_viewport_resize_changes_mapping() {
        let mut ctl = controller();
        let mut body = die();
        ctl.set_viewport(1600.0, 600.0);
        ctl.on_pointer_down(hit_ray(), &mut body);
        ctl.on_pointer_move(800.0, 0.0, &mut body);
        // Half the (new) width is half a turn
        assert!((body.orientation.y - TAU * 0.5).abs() < EPSILON);
    }
}
