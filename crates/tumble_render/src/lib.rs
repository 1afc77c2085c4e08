//! Rendering for the Tumble demos
//!
//! This crate owns the wgpu plumbing:
//!
//! - [`context::RenderContext`] - device, queue, and surface management
//! - [`camera::Camera`] - view/projection and screen-ray picking
//! - [`pipeline::ScenePipeline`] - lit triangle pass plus unlit line pass
//! - [`geometry::SceneGeometry`] - converts World entities to vertex data

pub mod camera;
pub mod context;
pub mod geometry;
pub mod pipeline;

pub use camera::Camera;
pub use context::RenderContext;
pub use geometry::SceneGeometry;
pub use pipeline::{ScenePipeline, SceneUniforms, SceneVertex};
