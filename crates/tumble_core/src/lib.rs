//! Scene model for the Tumble demos
//!
//! This crate provides the retained scene the demos mutate and the
//! renderer walks:
//!
//! - [`Transform3`] - position, Euler rotation, uniform scale
//! - [`Mesh`] / [`TriangleMesh`] / [`LineSet`] - CPU-side geometry
//! - [`Entity`] - transform + mesh + material with dirty tracking
//! - [`World`] - SlotMap-keyed entity collection

mod entity;
mod mesh;
mod transform;
mod world;

pub use entity::{DirtyFlags, Entity, Material};
pub use mesh::{LineSet, Mesh, MeshVertex, TriangleMesh};
pub use transform::Transform3;
pub use world::{EntityKey, World};
