//! Editing configuration
//!
//! Settings for the scale editors. They can be serialized to and loaded from
//! RON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clamp::ClampPolicy;
use crate::constants::MIN_SCALE;

/// How free (handle-less) scale drags are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FreeScaleStyle {
    /// Drag is projected to world units at the entity's depth and added to
    /// the start scale
    #[default]
    Projected,
    /// Drag is a proportional factor of half the viewport width, multiplied
    /// into the start scale
    Proportional,
}

/// Scale editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditConfig {
    /// Smallest allowed scale component
    #[serde(default = "default_min_scale")]
    pub min_scale: f32,
    /// How the floor is enforced
    #[serde(default)]
    pub clamp_policy: ClampPolicy,
    /// Free drag behaviour
    #[serde(default)]
    pub free_style: FreeScaleStyle,
}

fn default_min_scale() -> f32 {
    MIN_SCALE
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            clamp_policy: ClampPolicy::default(),
            free_style: FreeScaleStyle::default(),
        }
    }
}

impl EditConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_scale must be a positive number, got {}",
                self.min_scale
            )));
        }
        Ok(())
    }

    /// Serialize to a pretty RON string
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Parse and validate a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: EditConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved edit config to {}", path.display());
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!("Loaded edit config from {}", path.display());
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
