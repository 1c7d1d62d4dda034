//! Engine configuration.
//!
//! Options are loaded from a JSON file; every field falls back to the
//! deployment default when absent, so an empty object `{}` is a valid
//! configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::DEFAULT_WAVE_CAP;
use crate::eval::Heuristic;

/// Board shape of the reference deployment.
pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLS: usize = 6;

/// Engine options, deserialized from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Board rows; fixed externally per deployment.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Board columns; fixed externally per deployment.
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Active scoring heuristic.
    #[serde(default)]
    pub heuristic: Heuristic,
    /// Worker threads for the root search; 1 keeps the engine fully
    /// sequential.
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Hard cap on cascade waves, a tunable safety bound.
    #[serde(default = "default_wave_cap")]
    pub wave_cap: u32,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

fn default_threads() -> usize {
    1
}

fn default_wave_cap() -> u32 {
    DEFAULT_WAVE_CAP
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            heuristic: Heuristic::default(),
            threads: 1,
            wave_cap: DEFAULT_WAVE_CAP,
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl EngineConfig {
    /// Loads options from a JSON file.
    pub fn from_file(path: &Path) -> Result<EngineConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
