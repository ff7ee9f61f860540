// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::{BazwatchError, Result};

/// Load `Bazwatch.toml` from the given path if it exists.
///
/// A missing file yields the default (empty) configuration; any other read
/// or parse failure is surfaced.
pub fn load_optional(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(?path, "no config file; using defaults");
            return Ok(ConfigFile::default());
        }
        Err(err) => return Err(err.into()),
    };

    let config: ConfigFile = toml::from_str(&contents)?;

    if let Some(bin) = &config.bazel_bin {
        if bin.trim().is_empty() {
            return Err(BazwatchError::ConfigError(
                "bazel_bin must not be empty".to_string(),
            ));
        }
    }

    Ok(config)
}

/// Default config path: `Bazwatch.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Bazwatch.toml")
}
