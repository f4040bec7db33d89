//! Script replay against an in-memory scene

use primedit_core::{
    EditConfig, EditScene, EditSkipped, EditType, Entity, ScaleEditStep, ScaleEditor, Scene,
    ViewContext,
};

use crate::ReplayError;
use crate::script::{DragScript, DragStep};

/// Final state after a replay
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub entity: Entity,
    /// Steps that changed the entity
    pub applied: usize,
    /// Steps the editor declined
    pub skipped: usize,
}

/// Run every step of `script` through a [`ScaleEditor`]
pub fn replay(script: &DragScript, config: EditConfig) -> Result<ReplayOutcome, ReplayError> {
    let mut scene = Scene::new();
    let id = scene.add_entity(script.entity.to_entity());
    scene.select(id);

    let mut editor = ScaleEditor::new(config);
    let view = ViewContext::new(script.observer, &script.projection).with_viewport(script.viewport);

    let mut applied = 0;
    let mut skipped = 0;

    for (index, step) in script.steps.iter().enumerate() {
        let result = run_step(&mut editor, &mut scene, &view, step);
        match result {
            Ok(true) => {
                applied += 1;
                if let Some(entity) = scene.first_selected_entity_mut() {
                    tracing::info!(
                        "step {}: {:?} -> scale {:?}, pos {:?}",
                        index,
                        step,
                        entity.scale,
                        entity.pos
                    );
                }
            }
            Ok(false) => tracing::debug!("step {}: {:?}", index, step),
            Err(reason) => {
                skipped += 1;
                tracing::warn!("step {}: {:?} skipped: {}", index, step, reason);
            }
        }
    }

    let entity = scene.get_entity(id).cloned().ok_or(ReplayError::EntityLost)?;
    Ok(ReplayOutcome {
        entity,
        applied,
        skipped,
    })
}

/// Returns whether the step changed the entity
fn run_step(
    editor: &mut ScaleEditor,
    scene: &mut Scene,
    view: &ViewContext<'_>,
    step: &DragStep,
) -> Result<bool, EditSkipped> {
    let Some(mouse) = step.mouse() else {
        editor.edit_done();
        return Ok(false);
    };

    match *step {
        DragStep::Handle { axis, .. } => {
            editor.initiate_handle_edit(scene, mouse, axis)?;
            Ok(false)
        }
        DragStep::Free { .. } => {
            editor.initiate_free_edit(scene, mouse)?;
            Ok(false)
        }
        DragStep::Move { .. } => {
            let session = editor.session().copied();
            match session {
                Some(session) if session.edit_type == EditType::ScaleFree => {
                    editor.update_free_edit(scene, view, mouse)?;
                }
                Some(session) => {
                    let axis = session.axis.ok_or(EditSkipped::NoSession)?;
                    editor.update_handle_edit(scene, view, axis, mouse)?;
                }
                None => return Err(EditSkipped::NoSession),
            }
            Ok(true)
        }
        DragStep::Drag { hit, alt, .. } => {
            let step = editor.update_scale_edit(scene, view, hit, alt, mouse)?;
            Ok(matches!(step, ScaleEditStep::Updated(_)))
        }
        // Carries no mouse position, handled above
        DragStep::Done => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const AVATAR_SCRIPT: &str = r#"(
        observer: (
            camera_enabled: false,
            avatar: Some((position: (-10.0, 0.0, 0.0), orientation: (0.0, 0.0, 0.0, 1.0))),
        ),
        projection: (fov_degrees: 90.0, viewport_height: 600.0),
        entity: (name: "crate", pos: (0.0, 0.0, 0.0)),
        steps: [
            Free(x: 400, y: 300),
            Move(x: 370, y: 300),
            Move(x: 340, y: 300),
            Done,
            Move(x: 0, y: 0),
        ],
    )"#;

    #[test]
    fn test_free_replay() {
        let script = DragScript::from_ron_str(AVATAR_SCRIPT).unwrap();
        let outcome = replay(&script, EditConfig::default()).unwrap();

        // 600 / (2 * 10 * tan 45) = 30 px per unit; 60 px left grows Y by 2
        assert!(outcome.entity.scale.abs_diff_eq(Vec3::new(1.0, 3.0, 1.0), 1e-3));
        assert_eq!(outcome.entity.pos, Vec3::ZERO);
        assert_eq!(outcome.applied, 2);
        // Move after Done has no session
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_handle_replay_moves_entity() {
        let script = DragScript::from_ron_str(
            r#"(
                observer: (
                    camera_enabled: false,
                    avatar: Some((position: (-10.0, 0.0, 0.0), orientation: (0.0, 0.0, 0.0, 1.0))),
                ),
                projection: (fov_degrees: 90.0, viewport_height: 600.0),
                entity: (name: "crate"),
                steps: [Handle(x: 400, y: 300, axis: PosZ), Move(x: 400, y: 270), Done],
            )"#,
        )
        .unwrap();
        let outcome = replay(&script, EditConfig::default()).unwrap();

        // 30 px up = 1 unit along +Z; centre moves half of that
        assert!(outcome.entity.scale.abs_diff_eq(Vec3::new(1.0, 1.0, 2.0), 1e-3));
        assert!(outcome.entity.pos.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-3));
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_missing_observer_skips_updates() {
        let script = DragScript::from_ron_str(
            r#"(
                entity: (name: "crate"),
                steps: [Drag(x: 0, y: 0, hit: Some(PosX)), Drag(x: 50, y: 0)],
            )"#,
        )
        .unwrap();
        let outcome = replay(&script, EditConfig::default()).unwrap();

        assert_eq!(outcome.entity.scale, Vec3::ONE);
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.skipped, 1);
    }
}
