//! Configuration file lookup for the CLI.
//!
//! An explicit `--config` path must exist. Without one, the local
//! `flowscribe/config.toml` and then the platform configuration directory are
//! searched, and the defaults apply when neither holds a file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info, trace};
use thiserror::Error;

use flowscribe::{FlowscribeError, config::AppConfig};

const CONFIG_FILE: &str = "config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read configuration {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse TOML configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl From<ConfigError> for FlowscribeError {
    fn from(err: ConfigError) -> Self {
        FlowscribeError::Config(err.to_string())
    }
}

/// Loads the configuration from `explicit_path`, or from the first existing
/// file among [`config_candidates`], or falls back to the defaults.
///
/// # Errors
///
/// Returns [`FlowscribeError::Config`] if the chosen file is missing, cannot
/// be read, or is not a valid configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FlowscribeError> {
    let path = match explicit_path {
        Some(path) => path.as_ref().to_path_buf(),
        None => match discover(config_candidates()) {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using default configuration");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading configuration");
    Ok(read_config(&path)?)
}

/// Searched locations, highest priority first.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![Path::new("flowscribe").join(CONFIG_FILE)];

    match ProjectDirs::from("com", "flowscribe", "flowscribe") {
        Some(dirs) => candidates.push(dirs.config_dir().join(CONFIG_FILE)),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

fn discover(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| {
        let found = path.is_file();
        trace!(path = path.display().to_string(), found; "Checked configuration path");
        found
    })
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::MissingFile(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    debug!(config:?; "Configuration loaded");
    Ok(config)
}
