use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::DebugDecodersConfig;
use crate::core::errors::{Error, Result};

/// File name searched for in the project directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".debug-decoders.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<DebugDecodersConfig> {
    let config = toml::from_str::<DebugDecodersConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
    })?;

    config
        .validate()
        .map_err(|errors| Error::Configuration(errors.join("; ")))?;

    Ok(config)
}

/// Load an explicitly requested configuration file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<DebugDecodersConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("Failed to read {}: {e}", path.display()))
    })?;
    let config = parse_and_validate_config(&contents)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<DebugDecodersConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.debug-decoders.toml` at or above `start`.
pub fn discover_config(start: &Path) -> DebugDecodersConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            DebugDecodersConfig::default()
        })
}

/// Resolve the configuration for a run: the explicit file if given,
/// otherwise discovery from the project directory.
pub fn load_config(project: &Path, explicit: Option<&Path>) -> Result<DebugDecodersConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => {
            let start = if project.is_absolute() {
                project.to_path_buf()
            } else {
                std::env::current_dir()?.join(project)
            };
            Ok(discover_config(&start))
        }
    }
}
