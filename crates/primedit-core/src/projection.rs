//! Screen-to-entity projection
//!
//! Maps a pixel delta on screen into a delta along the edited entity's own
//! axes:
//!
//! ```text
//! screen (0, -dx, -dy) --/scaling--> observer axes --> world axes --> entity axes
//! ```
//!
//! Both scale editors go through [`project_screen_delta`].

use glam::{IVec2, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FOV_DEGREES, DEFAULT_VIEWPORT};
use crate::math::{Pose, reframe};

/// Converts world distances at a given depth into screen pixels
pub trait ScreenProjection {
    /// Pixels per world unit for something `distance` away from the observer
    fn scaling_from_3d_to_screen(&self, distance: f32) -> f32;
}

impl<F> ScreenProjection for F
where
    F: Fn(f32) -> f32,
{
    fn scaling_from_3d_to_screen(&self, distance: f32) -> f32 {
        self(distance)
    }
}

/// Same pixels-per-unit at every depth (orthographic views, tests)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedScaling(pub f32);

impl ScreenProjection for FixedScaling {
    fn scaling_from_3d_to_screen(&self, _distance: f32) -> f32 {
        self.0
    }
}

/// Symmetric perspective projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveProjection {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,
}

impl Default for PerspectiveProjection {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            viewport_height: DEFAULT_VIEWPORT[1],
        }
    }
}

impl ScreenProjection for PerspectiveProjection {
    fn scaling_from_3d_to_screen(&self, distance: f32) -> f32 {
        let half_fov = (self.fov_degrees.clamp(1.0, 179.0) * 0.5).to_radians();
        self.viewport_height / (2.0 * distance * half_fov.tan())
    }
}

/// Pixel offset of the mouse from where the drag started
pub fn drag_delta(mouse: IVec2, drag_start: IVec2) -> Vec2 {
    mouse.as_vec2() - drag_start.as_vec2()
}

/// Screen-plane vector in observer axes for a pixel delta.
///
/// Depth (X) is never driven by the mouse; moving right is -Y and moving
/// down is -Z.
pub fn screen_vector(delta: Vec2) -> Vec3 {
    Vec3::new(0.0, -delta.x, -delta.y)
}

/// Pixels-per-unit at the entity's depth.
///
/// Returns `None` when the projection gives something unusable (zero,
/// negative, infinite or NaN), e.g. when the observer sits on the entity.
pub fn screen_scaling(
    projection: &dyn ScreenProjection,
    observer: &Pose,
    entity_pos: Vec3,
) -> Option<f32> {
    let distance = observer.distance_to(entity_pos);
    let scaling = projection.scaling_from_3d_to_screen(distance);
    (scaling.is_finite() && scaling > 0.0).then_some(scaling)
}

/// Project a pixel delta into the entity's local axes.
///
/// `scaling` is the pixels-per-unit factor at the entity's depth (see
/// [`screen_scaling`]).
pub fn project_screen_delta(delta: Vec2, scaling: f32, observer: Quat, entity: Quat) -> Vec3 {
    let observer_axes = screen_vector(delta) * (1.0 / scaling);
    reframe(observer, entity, observer_axes)
}
