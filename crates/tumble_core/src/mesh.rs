//! CPU-side mesh data and builders
//!
//! Meshes come in two flavors: flat triangle lists for solid objects
//! (die, floor) and indexed line sets for wireframes. Line sets keep
//! their edge topology separate from the point array so per-frame
//! animation can rewrite the points in place without touching topology.

use tumble_math::Vec3;

/// A single triangle-list vertex
#[derive(Clone, Copy, Debug)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: [f32; 4],
}

/// A flat, non-indexed triangle list (every 3 vertices form one triangle)
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<MeshVertex>,
}

/// An indexed wireframe: points plus the pairs of point indices forming edges
///
/// The `points` array is meant to be rewritten in place every frame (the
/// tesseract demo does exactly that); `edges` stays fixed.
#[derive(Clone, Debug)]
pub struct LineSet {
    pub points: Vec<Vec3>,
    pub edges: Vec<[u16; 2]>,
    pub color: [f32; 4],
}

/// Mesh data attached to an entity
#[derive(Clone, Debug)]
pub enum Mesh {
    Triangles(TriangleMesh),
    Lines(LineSet),
}

impl TriangleMesh {
    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Build a cube of the given edge length with one color per face
    ///
    /// Face order follows the scene-graph convention the die demo came
    /// from: +X, -X, +Y, -Y, +Z, -Z.
    pub fn cube(size: f32, face_colors: [[f32; 4]; 6]) -> Self {
        let h = size * 0.5;

        // Each face: (normal, four corners counter-clockwise seen from outside)
        let faces: [(Vec3, [Vec3; 4]); 6] = [
            (
                Vec3::X,
                [
                    Vec3::new(h, -h, h),
                    Vec3::new(h, -h, -h),
                    Vec3::new(h, h, -h),
                    Vec3::new(h, h, h),
                ],
            ),
            (
                -Vec3::X,
                [
                    Vec3::new(-h, -h, -h),
                    Vec3::new(-h, -h, h),
                    Vec3::new(-h, h, h),
                    Vec3::new(-h, h, -h),
                ],
            ),
            (
                Vec3::Y,
                [
                    Vec3::new(-h, h, h),
                    Vec3::new(h, h, h),
                    Vec3::new(h, h, -h),
                    Vec3::new(-h, h, -h),
                ],
            ),
            (
                -Vec3::Y,
                [
                    Vec3::new(-h, -h, -h),
                    Vec3::new(h, -h, -h),
                    Vec3::new(h, -h, h),
                    Vec3::new(-h, -h, h),
                ],
            ),
            (
                Vec3::Z,
                [
                    Vec3::new(-h, -h, h),
                    Vec3::new(h, -h, h),
                    Vec3::new(h, h, h),
                    Vec3::new(-h, h, h),
                ],
            ),
            (
                -Vec3::Z,
                [
                    Vec3::new(h, -h, -h),
                    Vec3::new(-h, -h, -h),
                    Vec3::new(-h, h, -h),
                    Vec3::new(h, h, -h),
                ],
            ),
        ];

        let mut vertices = Vec::with_capacity(36);
        for (face_idx, (normal, corners)) in faces.iter().enumerate() {
            let color = face_colors[face_idx];
            // Two triangles per quad: 0-1-2, 0-2-3
            for &i in &[0usize, 1, 2, 0, 2, 3] {
                vertices.push(MeshVertex {
                    position: corners[i],
                    normal: *normal,
                    color,
                });
            }
        }

        Self { vertices }
    }

    /// Build a checkerboard floor in the XZ plane at y = 0
    ///
    /// `size` is the full side length, `cell_size` the checker cell size.
    /// Cell parity alternates between `color_a` and `color_b`.
    pub fn checkerboard_floor(
        size: f32,
        cell_size: f32,
        color_a: [f32; 4],
        color_b: [f32; 4],
    ) -> Self {
        let half = size * 0.5;
        let cells = (size / cell_size).ceil() as i32;
        let normal = Vec3::Y;

        let mut vertices = Vec::with_capacity((cells * cells) as usize * 6);
        for cx in 0..cells {
            for cz in 0..cells {
                let x0 = -half + cx as f32 * cell_size;
                let z0 = -half + cz as f32 * cell_size;
                let x1 = (x0 + cell_size).min(half);
                let z1 = (z0 + cell_size).min(half);

                let color = if (cx + cz) % 2 == 0 { color_a } else { color_b };

                let corners = [
                    Vec3::new(x0, 0.0, z0),
                    Vec3::new(x0, 0.0, z1),
                    Vec3::new(x1, 0.0, z1),
                    Vec3::new(x1, 0.0, z0),
                ];
                for &i in &[0usize, 1, 2, 0, 2, 3] {
                    vertices.push(MeshVertex {
                        position: corners[i],
                        normal,
                        color,
                    });
                }
            }
        }

        Self { vertices }
    }
}

impl LineSet {
    /// Create a line set from points and edge indices
    pub fn new(points: Vec<Vec3>, edges: Vec<[u16; 2]>, color: [f32; 4]) -> Self {
        Self { points, edges, color }
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build a square ground grid in the XZ plane
    ///
    /// Lines every `step` units from `-extent` to `+extent` on both axes.
    pub fn grid(extent: f32, step: f32, y: f32, color: [f32; 4]) -> Self {
        let mut points = Vec::new();
        let mut edges = Vec::new();

        let count = (2.0 * extent / step).round() as i32;
        for i in 0..=count {
            let offset = -extent + i as f32 * step;

            // Line parallel to X
            let a = points.len() as u16;
            points.push(Vec3::new(-extent, y, offset));
            points.push(Vec3::new(extent, y, offset));
            edges.push([a, a + 1]);

            // Line parallel to Z
            let b = points.len() as u16;
            points.push(Vec3::new(offset, y, -extent));
            points.push(Vec3::new(offset, y, extent));
            edges.push([b, b + 1]);
        }

        Self { points, edges, color }
    }
}

impl Mesh {
    /// Number of vertices the mesh contributes to a draw
    pub fn render_vertex_count(&self) -> usize {
        match self {
            Mesh::Triangles(m) => m.vertices.len(),
            // Each edge becomes two line-list vertices
            Mesh::Lines(l) => l.edges.len() * 2,
        }
    }
}
