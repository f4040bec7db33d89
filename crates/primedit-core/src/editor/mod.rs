//! Interactive scale editing
//!
//! [`ScaleEditor`] owns the drag session and turns mouse positions into
//! scale (and, for handle drags, position) changes on the first selected
//! entity.
//!
//! ```text
//! mouse down on handle -> initiate_handle_edit -> update_handle_edit ... -> edit_done
//! mouse down elsewhere -> initiate_free_edit   -> update_free_edit   ... -> edit_done
//! ```
//!
//! Every operation reports why it did nothing through [`EditSkipped`]; the
//! entity is never touched in that case. Callers that don't care can drop
//! the error.

mod free;
mod handle;

pub use free::{projected_free_scale, proportional_free_scale};
pub use handle::scale_along_handle;

use glam::{IVec2, Vec2, Vec3};

use crate::config::{EditConfig, FreeScaleStyle};
use crate::constants::DEFAULT_VIEWPORT;
use crate::entity::Entity;
use crate::math::Pose;
use crate::observer::ObserverSources;
use crate::projection::{ScreenProjection, drag_delta, project_screen_delta, screen_scaling};
use crate::scene::EditScene;
use crate::session::{AxisType, DragSession, EditType};

/// Per-frame view information supplied by the caller
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    /// Camera / avatar poses
    pub observer: ObserverSources,
    /// World-to-screen scaling utility
    pub projection: &'a dyn ScreenProjection,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl<'a> ViewContext<'a> {
    pub fn new(observer: ObserverSources, projection: &'a dyn ScreenProjection) -> Self {
        Self {
            observer,
            projection,
            viewport: Vec2::from_array(DEFAULT_VIEWPORT),
        }
    }

    pub fn with_viewport(mut self, viewport: Vec2) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Result of an update that changed the entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleUpdate {
    /// Scale written to the entity
    pub scale: Vec3,
    /// Position written to the entity (handle edits only)
    pub pos: Option<Vec3>,
}

/// What [`ScaleEditor::update_scale_edit`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleEditStep {
    /// A new session was captured; nothing was changed yet
    Started(EditType),
    /// The active session was applied to the entity
    Updated(ScaleUpdate),
}

/// Reasons an edit operation left the scene untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditSkipped {
    #[error("no entity selected")]
    NoSelection,
    #[error("no observer frame available")]
    NoObserver,
    #[error("selected entity cannot be scaled")]
    NotScalable,
    #[error("no scale edit in progress")]
    NoSession,
    #[error("active session is a {active:?} edit")]
    WrongEditType { active: EditType },
    #[error("screen projection unusable at this distance")]
    DegenerateProjection,
}

/// Drives scale drags on the selected entity
#[derive(Debug, Clone, Default)]
pub struct ScaleEditor {
    config: EditConfig,
    session: Option<DragSession>,
    /// Alternate-axes modifier state the current free session started with
    axis_modifier: bool,
}

impl ScaleEditor {
    pub fn new(config: EditConfig) -> Self {
        Self {
            config,
            session: None,
            axis_modifier: false,
        }
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditConfig) {
        self.config = config;
    }

    /// The active drag session, if any
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    // ============== Session start ==============

    /// Start a drag on one of the scale handles
    pub fn initiate_handle_edit<S: EditScene + ?Sized>(
        &mut self,
        scene: &mut S,
        mouse: IVec2,
        axis: AxisType,
    ) -> Result<DragSession, EditSkipped> {
        scene.editing_preliminaries();

        let entity = selected(scene)?;
        let session = DragSession::handle(mouse, entity.scale, entity.pos, axis);
        tracing::debug!(
            "Handle scale edit on '{}' ({:?}) from {:?}, start scale {:?}",
            entity.name,
            axis,
            mouse,
            session.start_scale
        );

        self.session = Some(session);
        self.axis_modifier = false;
        Ok(session)
    }

    /// Start a free drag (not on a handle)
    pub fn initiate_free_edit<S: EditScene + ?Sized>(
        &mut self,
        scene: &mut S,
        mouse: IVec2,
    ) -> Result<DragSession, EditSkipped> {
        scene.editing_preliminaries();

        let entity = selected(scene)?;
        let session = DragSession::free(mouse, entity.scale, entity.pos);
        tracing::debug!(
            "Free scale edit on '{}' from {:?}, start scale {:?}",
            entity.name,
            mouse,
            session.start_scale
        );

        self.session = Some(session);
        self.axis_modifier = false;
        Ok(session)
    }

    /// End the current drag
    pub fn edit_done(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Scale edit done");
        }
    }

    // ============== Per-frame updates ==============

    /// Apply the handle session to the selected entity for the current mouse
    /// position. Writes both scale and position.
    pub fn update_handle_edit<S: EditScene + ?Sized>(
        &self,
        scene: &mut S,
        view: &ViewContext<'_>,
        axis: AxisType,
        mouse: IVec2,
    ) -> Result<ScaleUpdate, EditSkipped> {
        let session = self.active_session(EditType::ScaleHandle)?;
        let observer = resolve_observer(view)?;
        let entity = selected(scene)?;
        if !entity.kind.is_scalable() {
            return Err(skipped(EditSkipped::NotScalable));
        }

        let scaling = screen_scaling(view.projection, &observer, entity.pos)
            .ok_or_else(|| skipped(EditSkipped::DegenerateProjection))?;
        let local_delta = project_screen_delta(
            drag_delta(mouse, session.drag_start),
            scaling,
            observer.orientation,
            entity.rot,
        );

        let update = scale_along_handle(&session, axis, local_delta, entity.rot, &self.config);
        apply(entity, &update);
        tracing::trace!("Handle scale {:?}: {:?}", axis, update);
        Ok(update)
    }

    /// Apply the free session to the selected entity for the current mouse
    /// position. Writes scale only.
    pub fn update_free_edit<S: EditScene + ?Sized>(
        &self,
        scene: &mut S,
        view: &ViewContext<'_>,
        mouse: IVec2,
    ) -> Result<ScaleUpdate, EditSkipped> {
        let session = self.active_session(EditType::ScaleFree)?;
        let observer = resolve_observer(view)?;
        let entity = selected(scene)?;
        if !entity.kind.is_scalable() {
            return Err(skipped(EditSkipped::NotScalable));
        }

        let delta = drag_delta(mouse, session.drag_start);
        let scale = match self.config.free_style {
            FreeScaleStyle::Projected => {
                let scaling = screen_scaling(view.projection, &observer, entity.pos)
                    .ok_or_else(|| skipped(EditSkipped::DegenerateProjection))?;
                let local_delta =
                    project_screen_delta(delta, scaling, observer.orientation, entity.rot);
                projected_free_scale(&session, local_delta, &self.config)
            }
            FreeScaleStyle::Proportional => proportional_free_scale(
                &session,
                delta,
                view.viewport.x,
                self.axis_modifier,
                observer.orientation,
                entity.rot,
                &self.config,
            )
            .ok_or_else(|| skipped(EditSkipped::DegenerateProjection))?,
        };

        let update = ScaleUpdate { scale, pos: None };
        apply(entity, &update);
        tracing::trace!("Free scale: {:?}", update);
        Ok(update)
    }

    /// Single entry point for a scale drag driven by mouse motion.
    ///
    /// Continues the active session when possible. A free session only
    /// continues while `alt_axes` matches the modifier it started with;
    /// otherwise a new session is started, on `hit_axis` if the press landed
    /// on a handle.
    pub fn update_scale_edit<S: EditScene + ?Sized>(
        &mut self,
        scene: &mut S,
        view: &ViewContext<'_>,
        hit_axis: Option<AxisType>,
        alt_axes: bool,
        mouse: IVec2,
    ) -> Result<ScaleEditStep, EditSkipped> {
        // Preliminaries run once per press, inside the initiate calls
        let active = self.session;
        match active {
            Some(DragSession {
                edit_type: EditType::ScaleFree,
                ..
            }) if self.axis_modifier == alt_axes => self
                .update_free_edit(scene, view, mouse)
                .map(ScaleEditStep::Updated),
            Some(DragSession {
                edit_type: EditType::ScaleHandle,
                axis: Some(axis),
                ..
            }) => self
                .update_handle_edit(scene, view, axis, mouse)
                .map(ScaleEditStep::Updated),
            _ => {
                let session = match hit_axis {
                    Some(axis) => self.initiate_handle_edit(scene, mouse, axis)?,
                    None => self.initiate_free_edit(scene, mouse)?,
                };
                self.axis_modifier = alt_axes;
                Ok(ScaleEditStep::Started(session.edit_type))
            }
        }
    }

    fn active_session(&self, expected: EditType) -> Result<DragSession, EditSkipped> {
        match self.session {
            Some(session) if session.edit_type == expected => Ok(session),
            Some(session) => Err(skipped(EditSkipped::WrongEditType {
                active: session.edit_type,
            })),
            None => Err(skipped(EditSkipped::NoSession)),
        }
    }
}

fn selected<S: EditScene + ?Sized>(scene: &mut S) -> Result<&mut Entity, EditSkipped> {
    scene
        .first_selected_entity_mut()
        .ok_or_else(|| skipped(EditSkipped::NoSelection))
}

fn resolve_observer(view: &ViewContext<'_>) -> Result<Pose, EditSkipped> {
    view.observer
        .resolve()
        .ok_or_else(|| skipped(EditSkipped::NoObserver))
}

fn apply(entity: &mut Entity, update: &ScaleUpdate) {
    entity.scale = update.scale;
    if let Some(pos) = update.pos {
        entity.pos = pos;
    }
}

fn skipped(reason: EditSkipped) -> EditSkipped {
    tracing::debug!("Scale edit skipped: {}", reason);
    reason
}
