//! # Loader Configuration
//!
//! Settings that steer how a NIF scene graph is turned into collision shapes.
//! The defaults reproduce the behaviour expected by the game data, so most
//! callers can use [`CollisionLoaderConfig::default`] directly.
//!
//! ## Configuration Categories
//!
//! - **Animated files**: file-name prefix marking externally animated models
//! - **Static meshes**: whether static geometry is emitted per geometry node or
//!   merged into one mesh per root

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// How static geometry is laid out in the primary compound shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaticMeshMode {
    /// Every static geometry node becomes its own identity-placed child
    #[default]
    PerGeometry,
    /// All static geometry of one root is merged into a single child
    MergedPerRoot,
}

/// # Collision Loader Configuration
///
/// Controls animation detection and static mesh layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionLoaderConfig {
    /// Base-name prefix of files whose whole scene is animated (ASCII case-insensitive)
    pub animated_file_prefix: String,
    /// Static mesh layout
    pub static_meshes: StaticMeshMode,
}

impl CollisionLoaderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animated file prefix
    pub fn with_animated_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.animated_file_prefix = prefix.into();
        self
    }

    /// Set the static mesh layout
    pub fn with_static_meshes(mut self, mode: StaticMeshMode) -> Self {
        self.static_meshes = mode;
        self
    }

    /// Check whether a file's base name marks the whole file as animated
    ///
    /// Both `/` and `\` are treated as directory separators since game data
    /// paths come from either platform.
    pub fn is_animated_file(&self, file_name: &str) -> bool {
        if self.animated_file_prefix.is_empty() {
            return false;
        }
        let base_name = file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_name);
        let prefix = self.animated_file_prefix.as_bytes();
        base_name.len() >= prefix.len()
            && base_name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.animated_file_prefix.chars().any(|c| c == '/' || c == '\\') {
            return Err(format!(
                "Animated file prefix must not contain path separators: {:?}",
                self.animated_file_prefix
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration file
    pub fn load_validated(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

impl Default for CollisionLoaderConfig {
    fn default() -> Self {
        Self {
            animated_file_prefix: "x".to_string(),
            static_meshes: StaticMeshMode::PerGeometry,
        }
    }
}

impl Config for CollisionLoaderConfig {}
