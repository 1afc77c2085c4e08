//! The draggable die demo

use rand::rngs::StdRng;
use rand::SeedableRng;

use tumble_core::{Entity, Material, Mesh, Transform3, TriangleMesh, World};
use tumble_input::DragController;
use tumble_math::{Ray3, Vec3};
use tumble_physics::{DieBody, PhysicsParams};

use crate::config::AppConfig;
use crate::sketch::Sketch;

/// One tint per die face, in +X, -X, +Y, -Y, +Z, -Z order
///
/// The original labeled its faces with numbered textures; with texture
/// generation out of scope each face gets a recognizable tint instead.
const FACE_COLORS: [[f32; 4]; 6] = [
    [0.93, 0.93, 0.93, 1.0],
    [0.85, 0.30, 0.30, 1.0],
    [0.30, 0.70, 0.35, 1.0],
    [0.30, 0.45, 0.85, 1.0],
    [0.90, 0.75, 0.25, 1.0],
    [0.60, 0.35, 0.75, 1.0],
];

/// Grab-and-fling die above a checkerboard floor
pub struct DiceSketch {
    world: World,
    die_key: tumble_core::EntityKey,
    body: DieBody,
    params: PhysicsParams,
    drag: DragController,
    rng: StdRng,
}

impl DiceSketch {
    /// Build the dice scene from config
    pub fn new(config: &AppConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build the dice scene with a caller-supplied RNG (tests seed this)
    pub fn with_rng(config: &AppConfig, rng: StdRng) -> Self {
        let mut world = World::new();

        let floor = TriangleMesh::checkerboard_floor(
            config.dice.floor_size,
            config.dice.floor_cell_size,
            [0.72, 0.72, 0.75, 1.0],
            [0.55, 0.55, 0.60, 1.0],
        );
        world.add_entity(
            Entity::new(Mesh::Triangles(floor))
                .with_name("floor")
                .with_transform(Transform3::from_position(Vec3::new(
                    0.0,
                    config.physics.floor_y,
                    0.0,
                ))),
        );

        let start = Vec3::new(0.0, config.dice.start_height, 0.0);
        let die_key = world.add_entity(
            Entity::new(Mesh::Triangles(TriangleMesh::cube(
                config.dice.size,
                FACE_COLORS,
            )))
            .with_name("die")
            .with_material(Material::WHITE)
            .with_transform(Transform3::from_position(start)),
        );

        let body = DieBody::new(start, config.dice.size);
        let drag = DragController::new(
            config.window.width as f32,
            config.window.height as f32,
        )
        .with_throw_impulse(config.interaction.throw_impulse);

        Self {
            world,
            die_key,
            body,
            params: config.physics.to_params(),
            drag,
            rng,
        }
    }

    /// The die's physical state (read-only; tests inspect this)
    pub fn body(&self) -> &DieBody {
        &self.body
    }

    /// Whether the die is currently grabbed
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Copy the body's transform onto the die entity
    fn sync_die_entity(&mut self) {
        if let Some(die) = self.world.get_mut(self.die_key) {
            die.set_transform(Transform3::from_position_rotation(
                self.body.position,
                self.body.orientation,
            ));
        }
    }
}

impl Sketch for DiceSketch {
    fn world(&self) -> &World {
        &self.world
    }

    fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn step(&mut self) {
        // While a drag is active the pointer owns the die; integration
        // resumes on release.
        if !self.drag.is_dragging() {
            self.body.step(&self.params);
        }
        self.sync_die_entity();
    }

    fn on_pointer_down(&mut self, ray: Ray3) {
        if self.drag.on_pointer_down(ray, &mut self.body) {
            log::debug!("Die grabbed");
            self.sync_die_entity();
        }
    }

    fn on_pointer_move(&mut self, dx: f32, dy: f32) {
        if self.drag.is_dragging() {
            self.drag.on_pointer_move(dx, dy, &mut self.body);
            self.sync_die_entity();
        }
    }

    fn on_pointer_up(&mut self) {
        if self.drag.is_dragging() {
            self.drag.on_pointer_up(&mut self.body, &mut self.rng);
            log::debug!(
                "Die released with velocity ({:.4}, {:.4}, {:.4})",
                self.body.velocity.x,
                self.body.velocity.y,
                self.body.velocity.z
            );
        }
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.drag.set_viewport(width, height);
    }
}
