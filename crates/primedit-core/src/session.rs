//! Drag session state

use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};

/// Handle being dragged: a local axis plus which face of the object it sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisType {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

/// Whether a handle grows the object by adding or subtracting the drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPolarity {
    Positive,
    Negative,
}

impl AxisPolarity {
    /// +1.0 or -1.0
    pub fn sign(self) -> f32 {
        match self {
            AxisPolarity::Positive => 1.0,
            AxisPolarity::Negative => -1.0,
        }
    }
}

impl AxisType {
    pub const ALL: [AxisType; 6] = [
        AxisType::PosX,
        AxisType::NegX,
        AxisType::PosY,
        AxisType::NegY,
        AxisType::PosZ,
        AxisType::NegZ,
    ];

    /// Unit vector of the underlying local axis (always the + direction)
    pub fn unit(&self) -> Vec3 {
        match self {
            AxisType::PosX | AxisType::NegX => Vec3::X,
            AxisType::PosY | AxisType::NegY => Vec3::Y,
            AxisType::PosZ | AxisType::NegZ => Vec3::Z,
        }
    }

    /// Fixed polarity per handle.
    ///
    /// Y is flipped relative to X and Z: the PosY handle sits on the -Y face
    /// and NegY on the +Y face.
    pub fn polarity(&self) -> AxisPolarity {
        match self {
            AxisType::PosX => AxisPolarity::Positive,
            AxisType::NegX => AxisPolarity::Negative,
            AxisType::PosY => AxisPolarity::Negative,
            AxisType::NegY => AxisPolarity::Positive,
            AxisType::PosZ => AxisPolarity::Positive,
            AxisType::NegZ => AxisPolarity::Negative,
        }
    }
}

/// Which editor handles drag updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditType {
    /// Constrained to one handle's axis
    ScaleHandle,
    /// Driven directly by 2D mouse motion
    ScaleFree,
}

/// Snapshot taken when a drag starts.
///
/// Every update is computed from these start values, never from the
/// previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub drag_start: IVec2,
    pub start_scale: Vec3,
    pub start_pos: Vec3,
    /// Always `Some` for handle sessions, `None` for free ones
    pub axis: Option<AxisType>,
    pub edit_type: EditType,
}

impl DragSession {
    pub fn handle(drag_start: IVec2, start_scale: Vec3, start_pos: Vec3, axis: AxisType) -> Self {
        Self {
            drag_start,
            start_scale,
            start_pos,
            axis: Some(axis),
            edit_type: EditType::ScaleHandle,
        }
    }

    pub fn free(drag_start: IVec2, start_scale: Vec3, start_pos: Vec3) -> Self {
        Self {
            drag_start,
            start_scale,
            start_pos,
            axis: None,
            edit_type: EditType::ScaleFree,
        }
    }
}
