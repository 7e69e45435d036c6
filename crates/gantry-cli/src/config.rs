//! CLI configuration loading.
//!
//! Rendering settings live in an optional TOML file. An explicit
//! `--config` path is authoritative and must exist; without one, a short
//! list of discovery locations is tried in order and a missing candidate
//! just moves on to the next, ending at the built-in defaults.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use gantry::{GantryError, config::AppConfig};

/// Configuration-file errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),
}

impl From<ConfigError> for GantryError {
    fn from(err: ConfigError) -> Self {
        GantryError::Config(err.to_string())
    }
}

/// Loads the rendering configuration for this invocation.
///
/// With `explicit_path` set, that file is loaded and any failure is an
/// error. Otherwise the discovery candidates from
/// [`discovery_candidates`] are consulted, nearest first, and defaults
/// apply when none of them exists.
///
/// # Errors
///
/// Returns an error when the explicit path is missing or unreadable, or
/// when whichever file was selected fails to parse.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, GantryError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration");
        return load_config_file(path);
    }

    for candidate in discovery_candidates() {
        if candidate.exists() {
            info!(path = candidate.display().to_string(); "Loading discovered configuration");
            return load_config_file(&candidate);
        }
        debug!(path = candidate.display().to_string(); "No configuration at candidate path");
    }

    debug!("No configuration file found, using defaults");
    Ok(AppConfig::default())
}

/// Discovery locations, nearest first: the project-local file, then the
/// platform config directory (when one can be determined).
fn discovery_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("gantry/config.toml")];

    if let Some(project_dirs) = ProjectDirs::from("com", "gantry", "gantry") {
        candidates.push(project_dirs.config_dir().join("config.toml"));
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    candidates
}

/// Reads and parses one TOML configuration file.
fn load_config_file(path: &Path) -> Result<AppConfig, GantryError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ConfigError::MissingFile(path.to_path_buf()).into(),
        _ => GantryError::Io(err),
    })?;

    let config = toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    Ok(config)
}
