//! Scene access for the editors

use std::collections::HashMap;

use uuid::Uuid;

use crate::entity::Entity;

/// What the scale editors need from the surrounding editor
pub trait EditScene {
    /// The first entity in the current selection, if any
    fn first_selected_entity_mut(&mut self) -> Option<&mut Entity>;

    /// Called before a drag session is captured (undo snapshots, marking the
    /// selection for network sync, ...)
    fn editing_preliminaries(&mut self) {}
}

/// Simple in-memory scene with an ordered selection
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// All entities (keyed by ID for O(1) lookup)
    entities: HashMap<Uuid, Entity>,
    /// Selected entity IDs, in selection order
    selection: Vec<Uuid>,
    /// Set when an edit starts so the selection's moves get broadcast
    pending_sync: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity, returns its ID
    pub fn add_entity(&mut self, entity: Entity) -> Uuid {
        let id = entity.id;
        self.entities.insert(id, entity);
        id
    }

    /// Remove an entity (and drop it from the selection)
    pub fn remove_entity(&mut self, id: Uuid) -> Option<Entity> {
        self.selection.retain(|s| *s != id);
        self.entities.remove(&id)
    }

    pub fn get_entity(&self, id: Uuid) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_entity_mut(&mut self, id: Uuid) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn entities_iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Replace the selection with a single entity
    pub fn select(&mut self, id: Uuid) {
        self.selection.clear();
        self.selection.push(id);
    }

    /// Append to the selection
    pub fn add_to_selection(&mut self, id: Uuid) {
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &[Uuid] {
        &self.selection
    }

    /// Whether an edit has started since the last [`Scene::take_pending_sync`]
    pub fn pending_sync(&self) -> bool {
        self.pending_sync
    }

    /// Read and reset the sync flag
    pub fn take_pending_sync(&mut self) -> bool {
        std::mem::take(&mut self.pending_sync)
    }
}

impl EditScene for Scene {
    fn first_selected_entity_mut(&mut self) -> Option<&mut Entity> {
        let id = *self.selection.first()?;
        self.entities.get_mut(&id)
    }

    fn editing_preliminaries(&mut self) {
        self.pending_sync = true;
    }
}
