//! Drag script format
//!
//! A script describes one entity, the observer looking at it and a list of
//! mouse steps:
//!
//! ```ron
//! (
//!     observer: (camera_enabled: false, avatar: Some((position: (-10.0, 0.0, 0.0), orientation: (0.0, 0.0, 0.0, 1.0)))),
//!     entity: (name: "crate", scale: (1.0, 1.0, 1.0)),
//!     steps: [Handle(x: 400, y: 300, axis: PosX), Move(x: 430, y: 300), Done],
//! )
//! ```

use std::path::Path;

use glam::{IVec2, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use primedit_core::constants::{DEFAULT_PRIM_SCALE, DEFAULT_VIEWPORT};
use primedit_core::{AxisType, Entity, EntityKind, ObserverSources, PerspectiveProjection};

use crate::ReplayError;

/// A scripted drag session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragScript {
    /// Camera / avatar poses
    #[serde(default)]
    pub observer: ObserverSources,
    /// Projection used to convert pixels to world units
    #[serde(default)]
    pub projection: PerspectiveProjection,
    /// Viewport size in pixels
    #[serde(default = "default_viewport")]
    pub viewport: Vec2,
    /// The entity being edited (it is selected before the first step)
    pub entity: EntitySpec,
    pub steps: Vec<DragStep>,
}

fn default_viewport() -> Vec2 {
    Vec2::from_array(DEFAULT_VIEWPORT)
}

fn default_scale() -> Vec3 {
    Vec3::from_array(DEFAULT_PRIM_SCALE)
}

/// Initial state of the edited entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub pos: Vec3,
    #[serde(default)]
    pub rot: Quat,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
}

impl EntitySpec {
    pub fn to_entity(&self) -> Entity {
        Entity::new(self.name.clone(), self.kind)
            .with_pos(self.pos)
            .with_rot(self.rot.normalize())
            .with_scale(self.scale)
    }
}

/// One mouse event in a script
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragStep {
    /// Press on a scale handle
    Handle { x: i32, y: i32, axis: AxisType },
    /// Press away from the handles
    Free { x: i32, y: i32 },
    /// Move with the button held, continuing the current session
    Move { x: i32, y: i32 },
    /// Move routed through the dispatcher (starts a session if needed)
    Drag {
        x: i32,
        y: i32,
        #[serde(default)]
        hit: Option<AxisType>,
        #[serde(default)]
        alt: bool,
    },
    /// Release
    Done,
}

impl DragStep {
    /// Mouse position carried by the step, if any
    pub fn mouse(&self) -> Option<IVec2> {
        match *self {
            DragStep::Handle { x, y, .. }
            | DragStep::Free { x, y }
            | DragStep::Move { x, y }
            | DragStep::Drag { x, y, .. } => Some(IVec2::new(x, y)),
            DragStep::Done => None,
        }
    }
}

impl DragScript {
    /// Parse a script from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ReplayError> {
        ron::from_str(content).map_err(|e| ReplayError::Parse(e.to_string()))
    }

    /// Load a script from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReplayError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_ron_str(&content)
    }
}
