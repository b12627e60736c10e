// src/config/loader.rs
//! Loading a [`PipelineConfig`] from a TOML file

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::PipelineConfig;

/// Failures while reading or understanding a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for a [`PipelineConfig`]
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but its settings cannot run
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Reads, parses, and validates a pipeline configuration file
///
/// A missing or unreadable file is an error; callers that want fallback
/// behavior check for the path themselves before calling.
pub fn load_pipeline_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let config: PipelineConfig = toml::from_str(&raw)?;
    config
        .validate()
        .map_err(|e| ConfigError::Validation(e.to_string()))?;

    debug!(
        "loaded pipeline configuration from {}",
        path.as_ref().display()
    );
    Ok(config)
}
