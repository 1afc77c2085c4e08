//! Scene geometry collection - bridges World/Entity to GPU buffers
//!
//! Entities keep their meshes in local space; this module applies each
//! entity's transform on the CPU and flattens everything into two vertex
//! streams, one for the triangle pass and one for the line pass.

use crate::pipeline::SceneVertex;
use tumble_core::{Entity, Mesh, World};
use tumble_math::mat4;

/// GPU-ready vertex data collected from entities
pub struct SceneGeometry {
    /// Triangle-list vertices in world space
    pub triangles: Vec<SceneVertex>,
    /// Line-list vertices in world space (two per edge)
    pub lines: Vec<SceneVertex>,
}

impl SceneGeometry {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Collect geometry from all entities in a world
    pub fn from_world(world: &World) -> Self {
        let mut result = Self::new();
        for entity in world.iter() {
            result.add_entity(entity);
        }
        result
    }

    /// Add one entity's geometry, transformed to world space
    pub fn add_entity(&mut self, entity: &Entity) {
        let rotation = entity.transform.rotation_matrix();
        let tint = entity.material.base_color;

        match entity.mesh() {
            Mesh::Triangles(mesh) => {
                self.triangles.reserve(mesh.vertices.len());
                for v in &mesh.vertices {
                    let position = entity.transform.transform_point_with(&rotation, v.position);
                    // Pure rotation, so normals transform the same way
                    let normal = mat4::transform_point(rotation, v.normal);
                    self.triangles.push(SceneVertex::new(
                        position.to_array(),
                        normal.to_array(),
                        modulate(v.color, tint),
                    ));
                }
            }
            Mesh::Lines(lines) => {
                let color = modulate(lines.color, tint);
                self.lines.reserve(lines.edges.len() * 2);
                for edge in &lines.edges {
                    for &idx in edge {
                        let p = lines.points[idx as usize];
                        let position = entity.transform.transform_point_with(&rotation, p);
                        self.lines
                            .push(SceneVertex::new(position.to_array(), [0.0, 0.0, 1.0], color));
                    }
                }
            }
        }
    }

    /// Clear all collected vertices
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    /// Number of triangle-list vertices
    #[inline]
    pub fn triangle_vertex_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of line-list vertices
    #[inline]
    pub fn line_vertex_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for SceneGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Component-wise color multiply
fn modulate(color: [f32; 4], tint: [f32; 4]) -> [f32; 4] {
    [
        color[0] * tint[0],
        color[1] * tint[1],
        color[2] * tint[2],
        color[3] * tint[3],
    ]
}
