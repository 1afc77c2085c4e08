//! GPU-compatible data types
//!
//! These types match the shader layouts exactly and derive Pod and
//! Zeroable for safe buffer uploads.

use bytemuck::{Pod, Zeroable};
use tumble_math::mat4;

/// A vertex as uploaded to the GPU
///
/// Triangle and line vertices share this layout; lines simply ignore the
/// normal in the shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneVertex {
    /// World-space position
    pub position: [f32; 3],
    /// World-space surface normal
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl SceneVertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal, color }
    }
}

/// Shared uniforms for both pipelines
/// Layout: 160 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Light direction, not necessarily normalized (the shader does it)
    pub light_dir: [f32; 3],
    /// Lighting parameters
    pub ambient_strength: f32,
    pub diffuse_strength: f32,
    /// Padding to a 16-byte multiple
    pub _padding: [f32; 3],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            light_dir: [5.0, 5.0, 5.0],
            ambient_strength: 0.5,
            diffuse_strength: 0.8,
            _padding: [0.0; 3],
        }
    }
}
