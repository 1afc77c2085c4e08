//! Integration tests for the dice demo's full interaction cycle
//!
//! Drives a DiceSketch through grab, drag, release, and settling the way
//! the app shell would, using a seeded RNG and camera rays built from the
//! same camera the demo renders with.

use rand::rngs::StdRng;
use rand::SeedableRng;

use tumble::config::AppConfig;
use tumble::sketch::{DiceSketch, Sketch};
use tumble_render::Camera;

const WIDTH: f32 = 1024.0;
const HEIGHT: f32 = 768.0;

fn sketch() -> DiceSketch {
    DiceSketch::with_rng(&AppConfig::default(), StdRng::seed_from_u64(99))
}

/// The camera both demos use by default
fn camera() -> Camera {
    Camera::default()
}

/// A ray through the screen center; the die starts at (0, 2, 0), which is
/// in view but off-center, so this misses it.
fn center_ray() -> tumble_math::Ray3 {
    camera().screen_ray(WIDTH * 0.5, HEIGHT * 0.5, WIDTH, HEIGHT)
}

/// A ray straight at the die's starting position
fn ray_at_die(s: &DiceSketch) -> tumble_math::Ray3 {
    let cam = camera();
    tumble_math::Ray3::new(cam.position, s.body().position - cam.position)
}

#[test]
fn test_click_on_empty_space_changes_nothing() {
    let mut s = sketch();
    let orientation = s.body().orientation;

    s.on_pointer_down(center_ray());

    assert!(!s.is_dragging());
    assert_eq!(s.body().orientation, orientation);
    assert_eq!(s.body().velocity.length(), 0.0);
}

#[test]
fn test_grab_drag_release_cycle() {
    let mut s = sketch();

    // Let it fall for a few frames first
    for _ in 0..5 {
        s.step();
    }
    assert!(s.body().velocity.y < 0.0);

    // Grab: velocities zeroed, physics frozen
    s.on_pointer_down(ray_at_die(&s));
    assert!(s.is_dragging());
    assert_eq!(s.body().velocity.length(), 0.0);

    let held_position = s.body().position;
    let start_orientation = s.body().orientation;

    // Drag: orientation follows the pointer, position stays put
    for _ in 0..30 {
        s.on_pointer_move(10.0, -5.0);
        s.step();
    }
    assert_eq!(s.body().position, held_position);
    assert!(s.body().orientation.y > start_orientation.y);

    // Release: a small random fling, physics resumes
    s.on_pointer_up();
    assert!(!s.is_dragging());
    assert!(s.body().velocity.x.abs() <= 0.025);
    assert!(s.body().angular_velocity.x.abs() <= 0.025);
}

#[test]
fn test_released_die_settles_on_floor() {
    let mut s = sketch();

    s.on_pointer_down(ray_at_die(&s));
    s.on_pointer_move(40.0, 25.0);
    s.on_pointer_up();

    for _ in 0..3000 {
        s.step();
    }

    let body = s.body();
    assert!(
        (body.position.y - 0.5).abs() < 0.05,
        "die should rest on the floor, got y={}",
        body.position.y
    );
    assert!(body.velocity.length() < 0.05);
    assert!(body.angular_velocity.length() < 1e-3);
}

#[test]
fn test_dirty_flags_drive_uploads() {
    let mut s = sketch();

    // Fresh scene is dirty; the shell clears it after the first upload
    assert!(s.world().has_dirty_entities());
    s.world_mut().clear_all_dirty();

    // Every step moves the die, so every frame re-uploads
    s.step();
    assert!(s.world().has_dirty_entities());
}
