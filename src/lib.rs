//! Tumble - two small interactive visual demos
//!
//! - `dice`: a draggable, gravity-affected die above a checkerboard floor.
//!   Grab it with the mouse, fling it, watch it bounce and settle.
//! - `tesseract`: a 4D hypercube wireframe spinning in the (x,w) plane,
//!   projected down to 3D.
//!
//! The library exposes the application shell and the two sketches; the
//! binaries in `src/bin/` just pick a sketch and run it.

pub mod app;
pub mod config;
pub mod sketch;

pub use app::App;
pub use config::AppConfig;
pub use sketch::{DiceSketch, Sketch, TesseractSketch};
