//! Configuration system
//!
//! Configuration values follow a clamp-never-reject policy: out-of-range
//! settings are pulled back into range by [`CollisionConfig::sanitized`]
//! instead of failing to load.

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
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
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
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

/// Upper bound for viewports visited by a mouse check (one bit of the mask each)
pub const VIEWPORT_LIMIT: usize = 64;

/// How shape pairs are dispatched inside one object pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DispatchStrategy {
    /// Pick a kernel specialized for the box/circle mix of both objects
    #[default]
    Specialized,
    /// Always use the generic per-pair shape match
    Generic,
}

/// Settings for the collision scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Number of viewports a mouse check may visit
    pub max_viewports: usize,
    /// Shape pair dispatch strategy
    pub dispatch: DispatchStrategy,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            max_viewports: 10,
            dispatch: DispatchStrategy::Specialized,
        }
    }
}

impl CollisionConfig {
    /// Return a copy with every value clamped into its valid range
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let max_viewports = self.max_viewports.clamp(1, VIEWPORT_LIMIT);
        if max_viewports != self.max_viewports {
            log::warn!(
                "max_viewports {} out of range, clamped to {}",
                self.max_viewports,
                max_viewports
            );
        }
        Self {
            max_viewports,
            ..self.clone()
        }
    }
}

impl Config for CollisionConfig {}
