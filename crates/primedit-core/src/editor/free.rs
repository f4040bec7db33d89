//! Free (handle-less) scaling
//!
//! The object scales about its own centre, so position is never touched.

use glam::{Quat, Vec2, Vec3};

use crate::config::EditConfig;
use crate::math::reframe;
use crate::session::DragSession;

/// Add an entity-local drag delta straight onto the start scale.
pub fn projected_free_scale(session: &DragSession, local_delta: Vec3, config: &EditConfig) -> Vec3 {
    config
        .clamp_policy
        .apply(session.start_scale + local_delta, config.min_scale)
}

/// Stretch the start scale by a factor read off the drag distance.
///
/// A drag of half the viewport width doubles (or zeroes) the affected axes.
/// Horizontal motion drives Y; vertical motion drives Z, or X while the
/// alternate-axes modifier is held. The stretch happens in observer axes and
/// the result is carried into entity axes.
///
/// Returns `None` for a zero or non-finite viewport width.
pub fn proportional_free_scale(
    session: &DragSession,
    delta: Vec2,
    viewport_width: f32,
    alt_axes: bool,
    observer_rot: Quat,
    entity_rot: Quat,
    config: &EditConfig,
) -> Option<Vec3> {
    let half_width = viewport_width * 0.5;
    if !half_width.is_finite() || half_width <= 0.0 {
        return None;
    }

    let stretch = if alt_axes {
        Vec3::new(-delta.y / half_width, delta.x / half_width, 0.0)
    } else {
        Vec3::new(0.0, delta.x / half_width, -delta.y / half_width)
    };

    let stretched = (Vec3::ONE + stretch) * session.start_scale;
    let scale = reframe(observer_rot, entity_rot, stretched);
    Some(config.clamp_policy.apply(scale, config.min_scale))
}
