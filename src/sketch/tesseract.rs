//! The rotating tesseract wireframe demo

use tumble_core::{Entity, LineSet, Mesh, World};
use tumble_math::{mat4, Vec4};

use crate::config::AppConfig;
use crate::sketch::Sketch;

const WIREFRAME_COLOR: [f32; 4] = [0.45, 0.85, 1.0, 1.0];
const GRID_COLOR: [f32; 4] = [0.25, 0.28, 0.35, 1.0];

/// A tesseract wireframe spinning at a fixed rate in the (x,w) plane
///
/// The 16 base vertices stay fixed in 4D; each frame they are rotated by
/// the accumulated angle, projected to 3D, and written in place into the
/// wireframe's point array. The edge topology never changes.
pub struct TesseractSketch {
    world: World,
    wireframe_key: tumble_core::EntityKey,
    base_vertices: [Vec4; 16],
    angle: f32,
    rotation_rate: f32,
    projection_distance: f32,
}

impl TesseractSketch {
    /// Build the tesseract scene from config
    pub fn new(config: &AppConfig) -> Self {
        let base_vertices = tesseract_vertices(config.tesseract.size * 0.5);
        let projection_distance = config.tesseract.projection_distance;

        let points = base_vertices
            .iter()
            .map(|v| v.project_3d(projection_distance))
            .collect();

        let mut world = World::new();
        world.add_entity(
            Entity::new(Mesh::Lines(LineSet::grid(
                config.tesseract.grid_extent,
                config.tesseract.grid_step,
                config.tesseract.grid_y,
                GRID_COLOR,
            )))
            .with_name("grid"),
        );
        let wireframe_key = world.add_entity(
            Entity::new(Mesh::Lines(LineSet::new(
                points,
                tesseract_edges(),
                WIREFRAME_COLOR,
            )))
            .with_name("tesseract"),
        );

        Self {
            world,
            wireframe_key,
            base_vertices,
            angle: 0.0,
            rotation_rate: config.tesseract.rotation_rate,
            projection_distance,
        }
    }

    /// Current accumulated rotation angle (radians)
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Sketch for TesseractSketch {
    fn world(&self) -> &World {
        &self.world
    }

    fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn step(&mut self) {
        self.angle += self.rotation_rate;
        let rotation = mat4::plane_rotation(self.angle, 0, 3);

        if let Some(entity) = self.world.get_mut(self.wireframe_key) {
            if let Mesh::Lines(lines) = entity.mesh_mut() {
                for (point, base) in lines.points.iter_mut().zip(&self.base_vertices) {
                    *point = mat4::transform(rotation, *base).project_3d(self.projection_distance);
                }
            }
        }
    }
}

/// The 16 corners of a tesseract with half-size `h`
///
/// Vertex i takes +h on each axis whose bit is set in i (bit 0 = x,
/// bit 1 = y, bit 2 = z, bit 3 = w), -h otherwise.
fn tesseract_vertices(h: f32) -> [Vec4; 16] {
    let mut vertices = [Vec4::ZERO; 16];
    for (i, v) in vertices.iter_mut().enumerate() {
        *v = Vec4::new(
            if i & 1 != 0 { h } else { -h },
            if i & 2 != 0 { h } else { -h },
            if i & 4 != 0 { h } else { -h },
            if i & 8 != 0 { h } else { -h },
        );
    }
    vertices
}

/// The 32 edges of a tesseract as vertex index pairs
///
/// Two corners share an edge exactly when their indices differ in one bit.
fn tesseract_edges() -> Vec<[u16; 2]> {
    let mut edges = Vec::with_capacity(32);
    for i in 0..16u16 {
        for j in (i + 1)..16 {
            if (i ^ j).count_ones() == 1 {
                edges.push([i, j]);
            }
        }
    }
    edges
}
