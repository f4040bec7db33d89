//! Scene entity definitions

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_PRIM_SCALE;

/// What sort of object an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityKind {
    #[default]
    Prim,
    Avatar,
    Terrain,
    Mesh,
}

impl EntityKind {
    /// Only prims carry an editable per-axis scale
    pub fn is_scalable(&self) -> bool {
        matches!(self, EntityKind::Prim)
    }
}

/// An object in the scene that can be selected and edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: Uuid,
    pub name: String,
    pub kind: EntityKind,
    /// World-space origin
    pub pos: Vec3,
    /// World-space orientation
    pub rot: Quat,
    /// Per-axis size in entity-local axes
    pub scale: Vec3,
}

impl Entity {
    /// Create a new unit prim at the origin
    pub fn new_prim(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Prim)
    }

    /// Create a new entity of the given kind at the origin
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            pos: Vec3::ZERO,
            rot: Quat::IDENTITY,
            scale: Vec3::from_array(DEFAULT_PRIM_SCALE),
        }
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rot(mut self, rot: Quat) -> Self {
        self.rot = rot;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_prims_scalable() {
        assert!(EntityKind::Prim.is_scalable());
        assert!(!EntityKind::Avatar.is_scalable());
        assert!(!EntityKind::Terrain.is_scalable());
        assert!(!EntityKind::Mesh.is_scalable());
    }

    #[test]
    fn test_new_prim_defaults() {
        let prim = Entity::new_prim("box");
        assert_eq!(prim.kind, EntityKind::Prim);
        assert_eq!(prim.scale, Vec3::ONE);
        assert_eq!(prim.pos, Vec3::ZERO);
        assert_eq!(prim.rot, Quat::IDENTITY);
    }

    #[test]
    fn test_ids_unique() {
        assert_ne!(Entity::new_prim("a").id, Entity::new_prim("b").id);
    }
}
