//! The scene's entity collection

use crate::Entity;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Key to an entity in the world
    ///
    /// Generational: if an entity is removed and its slot reused, stale
    /// keys return None instead of pointing at the wrong entity.
    pub struct EntityKey;
}

/// The scene: a keyed collection of entities
#[derive(Default)]
pub struct World {
    entities: SlotMap<EntityKey, Entity>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Add an entity and return its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        if let Some(name) = &entity.name {
            log::debug!("Adding entity '{}'", name);
        }
        self.entities.insert(entity)
    }

    /// Remove an entity and return it
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        self.entities.remove(key)
    }

    /// Get an entity by key
    pub fn get(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Get an entity mutably by key
    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate over all entities with their keys
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    /// Whether any entity has pending changes
    pub fn has_dirty_entities(&self) -> bool {
        self.entities.values().any(|e| e.is_dirty())
    }

    /// Clear dirty flags on every entity
    pub fn clear_all_dirty(&mut self) {
        for entity in self.entities.values_mut() {
            entity.clear_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mesh, Transform3, TriangleMesh};
    use tumble_math::Vec3;

    fn test_entity() -> Entity {
        Entity::new(Mesh::Triangles(TriangleMesh::cube(1.0, [[1.0; 4]; 6])))
    }

    #[test]
    fn test_add_and_get() {
        let mut world = World::new();
        assert_eq!(world.entity_count(), 0);

        let key = world.add_entity(test_entity().with_name("die"));
        assert_eq!(world.entity_count(), 1);
        assert_eq!(world.get(key).unwrap().name.as_deref(), Some("die"));
    }

    #[test]
    fn test_stale_key_returns_none() {
        let mut world = World::new();
        let key = world.add_entity(test_entity());

        assert!(world.remove_entity(key).is_some());
        assert!(world.get(key).is_none());

        // A new entity gets a different key; the old one stays invalid
        let new_key = world.add_entity(test_entity());
        assert!(world.get(key).is_none());
        assert!(world.get(new_key).is_some());
    }

    #[test]
    fn test_dirty_tracking_through_world() {
        let mut world = World::new();
        let key = world.add_entity(test_entity());

        // Fresh entities are dirty
        assert!(world.has_dirty_entities());

        world.clear_all_dirty();
        assert!(!world.has_dirty_entities());

        world
            .get_mut(key)
            .unwrap()
            .set_transform(Transform3::from_position(Vec3::new(0.0, 1.0, 0.0)));
        assert!(world.has_dirty_entities());
    }

    #[test]
    fn test_iter_with_keys() {
        let mut world = World::new();
        let a = world.add_entity(test_entity().with_name("a"));
        let b = world.add_entity(test_entity().with_name("b"));

        let keys: Vec<EntityKey> = world.iter_with_keys().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&a));
        assert!(keys.contains(&b));
    }
}
