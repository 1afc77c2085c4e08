//! Math types for the Tumble demos
//!
//! This crate provides the small amount of linear algebra the demos need.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector used for positions, velocities, and Euler angles
//! - [`Vec4`] - 4D vector for the tesseract's vertices
//! - [`mat4`] - 4x4 column-major matrix helpers (projection, view, plane rotation)
//! - [`Ray3`] / [`Aabb3`] - picking ray and bounding box with a slab intersection test

mod vec3;
mod vec4;
pub mod mat4;
mod ray;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
pub use ray::{Aabb3, Ray3};
