//! Geometry primitives
//!
//! Vectors and orientations are plain `glam` values. The helpers here pin
//! down which way a rotation is applied so that editors never have to
//! reason about quaternion composition order at the call site.
//!
//! Observer frames use X as the viewing (depth) axis, Y as screen-left and
//! Z as screen-up.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of something in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Pose at the origin with no rotation
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Build an observer pose at `position` whose +X axis points at `target`,
    /// keeping +Z up where possible.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let forward = (target - position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return Self::new(position, Quat::IDENTITY);
        }

        let mut left = Vec3::Z.cross(forward);
        if left.length_squared() < 1e-8 {
            // Looking straight up or down
            left = forward.cross(Vec3::X);
        }
        let left = left.normalize();
        let up = forward.cross(left).normalize();

        let orientation = Quat::from_mat3(&Mat3::from_cols(forward, left, up)).normalize();
        Self::new(position, orientation)
    }

    /// Straight-line distance between this pose and a point
    pub fn distance_to(&self, point: Vec3) -> f32 {
        (point - self.position).length()
    }
}

/// Rotate a vector expressed in a frame's own axes into world axes
#[inline]
pub fn frame_to_world(frame: Quat, v: Vec3) -> Vec3 {
    frame * v
}

/// Rotate a world-axes vector into the axes of a frame
#[inline]
pub fn world_to_frame(frame: Quat, v: Vec3) -> Vec3 {
    frame.inverse() * v
}

/// Carry a vector from one frame's axes into another's, through world axes
#[inline]
pub fn reframe(from: Quat, to: Quat, v: Vec3) -> Vec3 {
    world_to_frame(to, frame_to_world(from, v))
}
