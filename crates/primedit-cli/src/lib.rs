//! primedit command line
//!
//! Replays scripted scale drags (RON) against an in-memory scene.

pub mod replay;
pub mod script;

pub use replay::{ReplayOutcome, replay};
pub use script::{DragScript, DragStep, EntitySpec};

use primedit_core::ConfigError;

/// Replay errors
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Script parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("edited entity disappeared from the scene")]
    EntityLost,
}
