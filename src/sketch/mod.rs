//! The demo sketches and the trait the app shell drives them through
//!
//! A sketch owns its scene and reacts to the host's callbacks: pointer
//! events as they arrive, one `step` per frame. The shell neither knows
//! nor cares which demo it is running.

mod dice;
mod tesseract;

pub use dice::DiceSketch;
pub use tesseract::TesseractSketch;

use tumble_core::World;
use tumble_math::Ray3;

/// A self-contained demo scene
///
/// `step` runs once per animation frame with no delta-time: the demos
/// are intentionally frame-rate-dependent, matching their tuning.
pub trait Sketch {
    /// The scene to render
    fn world(&self) -> &World;

    /// Mutable scene access (the shell clears dirty flags after upload)
    fn world_mut(&mut self) -> &mut World;

    /// Advance the simulation by one frame
    fn step(&mut self);

    /// Pointer button pressed; `ray` is the camera ray through the cursor
    fn on_pointer_down(&mut self, _ray: Ray3) {}

    /// Pointer moved by (dx, dy) pixels
    fn on_pointer_move(&mut self, _dx: f32, _dy: f32) {}

    /// Pointer button released
    fn on_pointer_up(&mut self) {}

    /// Viewport was resized
    fn on_resize(&mut self, _width: f32, _height: f32) {}
}
