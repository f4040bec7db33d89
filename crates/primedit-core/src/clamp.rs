//! Minimum scale floor

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How the scale floor is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClampPolicy {
    /// Check x, then y, then z and raise only the first component below the
    /// floor. Later components are left alone even if they are also below it.
    #[default]
    FirstBelowFloor,
    /// Raise every component below the floor
    EveryAxis,
}

impl ClampPolicy {
    pub fn apply(self, scale: Vec3, floor: f32) -> Vec3 {
        match self {
            ClampPolicy::FirstBelowFloor => clamp_scale(scale, floor),
            ClampPolicy::EveryAxis => scale.max(Vec3::splat(floor)),
        }
    }
}

/// Raise the first component (in x, y, z order) that is below `floor`.
pub fn clamp_scale(scale: Vec3, floor: f32) -> Vec3 {
    let mut clamped = scale;
    if clamped.x < floor {
        clamped.x = floor;
    } else if clamped.y < floor {
        clamped.y = floor;
    } else if clamped.z < floor {
        clamped.z = floor;
    }
    clamped
}
