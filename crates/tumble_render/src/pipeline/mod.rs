//! Render pipeline for the demo scenes
//!
//! One pass, two pipelines: a lit triangle-list pipeline for solid
//! geometry and an unlit line-list pipeline for wireframes, sharing a
//! single uniform buffer.

mod scene_pipeline;
mod types;

pub use scene_pipeline::ScenePipeline;
pub use types::{SceneUniforms, SceneVertex};
