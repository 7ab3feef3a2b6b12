//! Simulation settings read from TOML

mod simulation;

pub use simulation::{RoundingPolicy, SimulationConfig};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a settings file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed settings in {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Setting `{field}` {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

/// Read a settings file, naming it in any error
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&content, path.display().to_string())
}

/// Deserialize settings held in memory
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    decode(content, "inline settings".to_string())
}

fn decode<T: DeserializeOwned>(content: &str, origin: String) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Malformed { origin, source })
}
