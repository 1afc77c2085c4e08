//! Pointer interaction for the die demo
//!
//! Grab-and-fling controls: pointer-down on the die starts a drag that maps
//! pointer motion directly onto the die's orientation, pointer-up releases
//! it with a small random impulse.

mod drag;

pub use drag::{DragController, DragState};
