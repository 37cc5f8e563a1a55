//! Run configuration parsing and serialization.
//!
//! Every field has a default, so an empty file (or no file at all) describes
//! the standard run: a 1000x1000 matrix and a 6x6 bonus matrix drawn from
//! `Normal(1, 1)` with seed 42.
//!
//! # File Format
//!
//! ```toml
//! seed = 42
//! size = 1000
//! bonus_size = 6
//! mean = 1.0
//! std = 1.0
//! output = "results_RUST.txt"
//! dump_dir = "dumps"
//!
//! [metrics]
//! enabled = true
//! output = "metrics.jsonl"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::generator::{DEFAULT_MEAN, DEFAULT_STD};
use crate::metrics::MetricsConfig;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SIZE: usize = 1000;
pub const DEFAULT_BONUS_SIZE: usize = 6;
pub const DEFAULT_OUTPUT: &str = "results_RUST.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Seed of the random stream shared by both matrices.
    pub seed: u64,
    /// Dimension of the main square matrix.
    pub size: usize,
    /// Dimension of the conjugate-symmetry bonus matrix.
    pub bonus_size: usize,
    pub mean: f64,
    pub std: f64,
    /// Results file; overwritten on every run.
    pub output: PathBuf,
    /// Directory for plain-text matrix dumps (disabled when unset).
    pub dump_dir: Option<PathBuf>,
    pub metrics: MetricsConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size: DEFAULT_SIZE,
            bonus_size: DEFAULT_BONUS_SIZE,
            mean: DEFAULT_MEAN,
            std: DEFAULT_STD,
            output: PathBuf::from(DEFAULT_OUTPUT),
            dump_dir: None,
            metrics: MetricsConfig::default(),
        }
    }
}

impl RunConfig {
    /// Parse a configuration from a TOML string and validate it.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Invalid("size must be positive".into()));
        }
        if self.bonus_size < 2 {
            return Err(ConfigError::Invalid(format!(
                "bonus_size must be at least 2, got {}",
                self.bonus_size
            )));
        }
        if !self.mean.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "mean must be finite, got {}",
                self.mean
            )));
        }
        if !self.std.is_finite() || self.std < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "std must be finite and non-negative, got {}",
                self.std
            )));
        }
        if self.metrics.enabled && self.metrics.output.is_none() {
            return Err(ConfigError::Invalid(
                "metrics.output must be set when metrics are enabled".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid run configuration: {0}")]
    Invalid(String),
}
