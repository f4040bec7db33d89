//! Reference frame resolution
//!
//! Screen motion is interpreted relative to whoever is looking: the free
//! camera when camera mode is on, otherwise the local avatar.

use serde::{Deserialize, Serialize};

use crate::math::Pose;

/// Candidate observer poses supplied by the caller each frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObserverSources {
    /// Whether the free camera is driving the view
    pub camera_enabled: bool,
    /// Current camera pose
    #[serde(default)]
    pub camera: Option<Pose>,
    /// Current pose of the local avatar (or its proxy)
    #[serde(default)]
    pub avatar: Option<Pose>,
}

impl ObserverSources {
    /// Observer driven by the free camera
    pub fn from_camera(camera: Pose) -> Self {
        Self {
            camera_enabled: true,
            camera: Some(camera),
            avatar: None,
        }
    }

    /// Observer driven by the local avatar
    pub fn from_avatar(avatar: Pose) -> Self {
        Self {
            camera_enabled: false,
            camera: None,
            avatar: Some(avatar),
        }
    }

    /// Pick the active observer pose, or `None` if the active source is missing
    pub fn resolve(&self) -> Option<Pose> {
        if self.camera_enabled {
            self.camera
        } else {
            self.avatar
        }
    }
}
