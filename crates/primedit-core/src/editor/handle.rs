//! Axis-constrained (handle) scaling

use glam::{Quat, Vec3};

use crate::config::EditConfig;
use crate::constants::ANCHOR_TRANSLATE_FACTOR;
use crate::math::frame_to_world;
use crate::session::{AxisType, DragSession};

use super::ScaleUpdate;

/// Apply an entity-local drag delta along a single handle axis.
///
/// Only the component of `local_delta` along the handle's axis is used.
/// The position moves by half the (clamped) scale change so that the face
/// opposite the handle stays where it was.
pub fn scale_along_handle(
    session: &DragSession,
    axis: AxisType,
    local_delta: Vec3,
    entity_rot: Quat,
    config: &EditConfig,
) -> ScaleUpdate {
    let unit = axis.unit();
    let change = unit * local_delta.dot(unit);
    let sign = axis.polarity().sign();

    let unclamped = session.start_scale + change * sign;
    let scale = config.clamp_policy.apply(unclamped, config.min_scale);

    let translate = (scale - session.start_scale) * ANCHOR_TRANSLATE_FACTOR;
    let pos = session.start_pos + frame_to_world(entity_rot, translate) * sign;

    ScaleUpdate {
        scale,
        pos: Some(pos),
    }
}
