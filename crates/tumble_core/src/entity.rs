//! Entity and Material types

use bitflags::bitflags;
use crate::{Mesh, Transform3};

bitflags! {
    /// Flags indicating which parts of an entity have changed
    ///
    /// The renderer rebuilds vertex data only for entities with set flags,
    /// so a static floor is transformed and uploaded exactly once.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Transform (position, rotation, scale) has changed
        const TRANSFORM = 1 << 0;
        /// Mesh data has changed
        const MESH = 1 << 1;
        /// All flags set - entity needs a full rebuild
        const ALL = Self::TRANSFORM.bits() | Self::MESH.bits();
    }
}

/// A simple material: a base color multiplied into the mesh's vertex colors
#[derive(Clone, Copy, Debug)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Material {
    /// White material (leaves vertex colors unchanged)
    pub const WHITE: Self = Self { base_color: [1.0, 1.0, 1.0, 1.0] };

    /// Create a new material with the given RGBA color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { base_color: [r, g, b, a] }
    }

    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// An object in the scene
///
/// Entities start with all dirty flags set so the first frame uploads
/// everything.
pub struct Entity {
    /// Optional name for lookup and logging
    pub name: Option<String>,
    /// Position, rotation, scale
    pub transform: Transform3,
    /// Geometry
    mesh: Mesh,
    /// Color tint
    pub material: Material,
    /// Change tracking
    dirty: DirtyFlags,
}

impl Entity {
    /// Create a new entity with an identity transform and default material
    pub fn new(mesh: Mesh) -> Self {
        Self {
            name: None,
            transform: Transform3::identity(),
            mesh,
            material: Material::default(),
            dirty: DirtyFlags::ALL,
        }
    }

    /// Builder: set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the transform
    pub fn with_transform(mut self, transform: Transform3) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Get the mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Get the mesh mutably, marking it dirty
    pub fn mesh_mut(&mut self) -> &mut Mesh {
        self.dirty |= DirtyFlags::MESH;
        &mut self.mesh
    }

    /// Replace the transform, marking it dirty
    pub fn set_transform(&mut self, transform: Transform3) {
        self.transform = transform;
        self.dirty |= DirtyFlags::TRANSFORM;
    }

    /// Get the current dirty flags
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Whether any part of the entity changed since the last clear
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Clear all dirty flags (after the renderer consumed the changes)
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}
