//! Configuration system for the prime analyzer
//!
//! Settings live in a TOML file. Every field has a default, so an empty file
//! (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::{ConfigError, PrimesError},
};

/// Default ceiling for the end of a requested range
pub const DEFAULT_MAX_BOUND: u64 = 100_000_000;

/// Largest `max_bound` accepted from any source.
///
/// At 10^10 the sieve needs about 1.25 GB of bits and the sum of all primes
/// below the bound still fits in a `u64`.
pub const MAX_BOUND_CEILING: u64 = 10_000_000_000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimesConfig {
    /// Engine limits
    #[serde(default)]
    pub engine: EngineConfig,

    /// How results are presented
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exclusive upper limit for the end of a range. Bounds the sieve's memory.
    #[serde(default = "default_max_bound")]
    pub max_bound: u64,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Primes shown at each end of the list before the rest is elided
    #[serde(default = "default_preview")]
    pub preview: usize,

    /// Print basics and descriptive statistics
    #[serde(default = "default_true")]
    pub show_statistics: bool,

    /// Print per-phase timings
    #[serde(default = "default_true")]
    pub show_timings: bool,
}

fn default_max_bound() -> u64 {
    DEFAULT_MAX_BOUND
}

fn default_preview() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_bound: default_max_bound(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview: default_preview(),
            show_statistics: true,
            show_timings: true,
        }
    }
}

impl PrimesConfig {
    /// Check values that deserialize fine but can't be used
    pub fn validate(&self, origin: &str) -> Result<()> {
        let max_bound = self.engine.max_bound;
        if !(2..=MAX_BOUND_CEILING).contains(&max_bound) {
            return Err(PrimesError::config(
                origin,
                "engine.max_bound",
                format!("an integer from 2 to {}", MAX_BOUND_CEILING),
                ConfigError::InvalidValue(max_bound.to_string()),
            ));
        }
        Ok(())
    }

    /// Load configuration from standard locations
    pub fn load() -> Result<Self> {
        load_config_from_standard_locations()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        save_config(self, path)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<PrimesConfig> {
    let origin = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| {
        PrimesError::config(
            origin.clone(),
            "file",
            "readable TOML file",
            ConfigError::Io(e.to_string()),
        )
    })?;

    let config: PrimesConfig = toml::from_str(&content).map_err(|e| {
        PrimesError::config(
            origin.clone(),
            "content",
            "valid TOML configuration",
            ConfigError::TomlParse(e.to_string()),
        )
    })?;

    config.validate(&origin)?;
    tracing::debug!("Loaded config from {}", origin);

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &PrimesConfig, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            PrimesError::config(
                parent.display().to_string(),
                "directory",
                "writable directory",
                ConfigError::Io(e.to_string()),
            )
        })?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| {
        PrimesError::config(
            path.display().to_string(),
            "serialization",
            "serializable config structure",
            ConfigError::TomlSerialize(e.to_string()),
        )
    })?;

    std::fs::write(path, content).map_err(|e| {
        PrimesError::config(
            path.display().to_string(),
            "file",
            "writable file location",
            ConfigError::Io(e.to_string()),
        )
    })?;

    Ok(())
}

/// Standard config file locations, most specific first
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Project-specific config
    paths.push(PathBuf::from("primes.toml"));

    // User config directory
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("primes").join("config.toml"));
    }

    // Home directory fallback
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".primes").join("config.toml"));
    }

    paths
}

/// Load configuration from standard locations
pub fn load_config_from_standard_locations() -> Result<PrimesConfig> {
    for path in config_paths() {
        if path.exists() {
            return load_config(&path);
        }
    }

    // No config found, return default
    Ok(PrimesConfig::default())
}
