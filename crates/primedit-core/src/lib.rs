//! Prim scale editing core
//!
//! Turns 2D mouse drags into scale (and compensating position) changes on the
//! selected entity of a 3D scene.
//!
//! # Module Structure
//!
//! ```text
//! primedit-core/
//! ├── math.rs          # Pose and frame rotations on glam types
//! ├── entity.rs        # Entity and EntityKind
//! ├── observer.rs      # Camera / avatar reference frame resolution
//! ├── projection.rs    # Screen delta -> entity-local delta
//! ├── session.rs       # Drag session state, AxisType, EditType
//! ├── clamp.rs         # Minimum scale floor
//! ├── editor/          # ScaleEditor (handle and free editors)
//! ├── scene.rs         # EditScene trait and in-memory Scene
//! ├── config.rs        # EditConfig (RON)
//! └── constants.rs
//! ```
//!
//! A drag is driven through [`editor::ScaleEditor`]: start a session with
//! `initiate_handle_edit` / `initiate_free_edit`, then call the matching
//! update on every mouse move.

pub mod clamp;
pub mod config;
pub mod constants;
pub mod editor;
pub mod entity;
pub mod math;
pub mod observer;
pub mod projection;
pub mod scene;
pub mod session;

pub use clamp::{ClampPolicy, clamp_scale};
pub use config::{ConfigError, EditConfig, FreeScaleStyle};
pub use editor::{EditSkipped, ScaleEditStep, ScaleEditor, ScaleUpdate, ViewContext};
pub use entity::{Entity, EntityKind};
pub use math::Pose;
pub use observer::ObserverSources;
pub use projection::{FixedScaling, PerspectiveProjection, ScreenProjection};
pub use scene::{EditScene, Scene};
pub use session::{AxisPolarity, AxisType, DragSession, EditType};
