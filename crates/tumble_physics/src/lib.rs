//! Die physics for the Tumble demos
//!
//! This crate provides the per-frame integration for the draggable die:
//! - Gravity and velocity integration with a fixed per-frame step
//! - Euler-angle tumbling driven by angular velocity
//! - Floor bounce with restitution and extra rotational damping
//!
//! The step deliberately has no delta-time parameter: the original demo
//! integrated once per animation frame, so motion is frame-rate-dependent
//! by design and the constants are tuned for a nominal 60 Hz.

pub mod body;
pub mod params;

pub use body::DieBody;
pub use params::PhysicsParams;
