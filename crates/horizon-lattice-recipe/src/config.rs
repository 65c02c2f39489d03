//! Recipe engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::{ConfigurationError, LoadError};
use crate::logging::targets;

/// Settings for a [`RecipeRegistry`](crate::registry::RecipeRegistry).
///
/// # Example
///
/// ```
/// use horizon_lattice_recipe::config::EngineConfig;
///
/// let config = EngineConfig::from_toml_str(
///     r#"
///     [cache]
///     capacity = 256
///     "#,
/// )?;
/// assert!(config.cache.enabled);
/// assert_eq!(config.cache.capacity, 256);
/// # Ok::<(), horizon_lattice_recipe::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Resolution cache settings.
    pub cache: CacheConfig,
}

/// Resolution cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Whether resolved style sets are memoized.
    pub enabled: bool,
    /// Maximum number of memoized entries.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 1024,
        }
    }
}

impl EngineConfig {
    /// A configuration with memoization turned off.
    pub fn uncached() -> Self {
        Self {
            cache: CacheConfig {
                enabled: false,
                ..CacheConfig::default()
            },
        }
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(LoadError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::LOADER, path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    /// Check the settings for contradictions.
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if self.cache.enabled && self.cache.capacity == 0 {
            return Err(ConfigurationError::InvalidCacheCapacity);
        }
        Ok(())
    }
}
