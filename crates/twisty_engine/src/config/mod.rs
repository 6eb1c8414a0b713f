//! Configuration system
//!
//! Cube geometry and animation defaults, loadable from TOML or RON files.
//! The selection epsilon and snap unit are derived from the spacing constant
//! rather than tuned by hand, so resizing cubies cannot silently break layer
//! classification.

use crate::error::CubeError;
use serde::{Deserialize, Serialize};

/// Configuration trait for file-backed settings
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Cube geometry and animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Edge length of a single cubie
    pub cubie_size: f32,

    /// Gap between adjacent cubies
    pub gap: f32,

    /// Animation duration used when the caller does not supply one
    pub default_move_duration_ms: f32,
}

impl CubeConfig {
    /// Create a configuration with default geometry
    pub fn new() -> Self {
        Self {
            cubie_size: 1.0,
            gap: 0.05,
            default_move_duration_ms: 250.0,
        }
    }

    /// Set the cubie edge length
    pub fn with_cubie_size(mut self, cubie_size: f32) -> Self {
        self.cubie_size = cubie_size;
        self
    }

    /// Set the inter-cubie gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the default move duration in milliseconds
    pub fn with_default_move_duration_ms(mut self, duration_ms: f32) -> Self {
        self.default_move_duration_ms = duration_ms;
        self
    }

    /// Grid unit: the distance between adjacent layer centers
    pub fn spacing(&self) -> f32 {
        self.cubie_size + self.gap
    }

    /// Half-width of the layer classification band
    ///
    /// A quarter of the spacing: large enough to absorb accumulated float
    /// error in snapped positions, and strictly less than half the
    /// inter-layer distance so a band can never span two layers.
    pub fn selection_epsilon(&self) -> f32 {
        self.spacing() * 0.25
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CubeError> {
        if self.cubie_size <= 0.0 {
            return Err(CubeError::InvalidConfig(format!(
                "cubie_size must be positive, got {}",
                self.cubie_size
            )));
        }
        if self.gap < 0.0 {
            return Err(CubeError::InvalidConfig(format!(
                "gap must not be negative, got {}",
                self.gap
            )));
        }
        if self.default_move_duration_ms <= 0.0 {
            return Err(CubeError::InvalidConfig(format!(
                "default_move_duration_ms must be positive, got {}",
                self.default_move_duration_ms
            )));
        }
        Ok(())
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for CubeConfig {}
