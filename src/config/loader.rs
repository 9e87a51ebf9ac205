// src/config/loader.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::model::{Config, RawConfig};
use crate::config::normalize::normalize;
use crate::errors::ConfigError;
use crate::notify::{NoticeLevel, Notify};

/// Read a configuration file from a given path and return the raw
/// `RawConfig`.
///
/// This only performs YAML deserialization; it does **not** apply any of the
/// normalization rules (pattern splitting, timeout defaults, ...). Use
/// [`load_and_normalize`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfig, ConfigError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a configuration file from path and normalize it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads YAML.
/// - Requires a non-empty `skins` list.
/// - Splits string-form patterns into lists.
/// - Fills missing timeouts with defaults, noticing each substitution.
/// - Notices when no proxy is configured.
///
/// Parse and read failures surface as-is; the only failure owned by the
/// normalization itself is an empty or missing skin list.
pub fn load_and_normalize(
    path: impl AsRef<Path>,
    notifier: &mut dyn Notify,
) -> Result<Config, ConfigError> {
    notifier.notify(NoticeLevel::Info, "Loading configuration file...");
    let raw = load_from_path(&path)?;
    normalize(raw, notifier)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `settings/config.yaml` relative to the
/// current working directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `SKINWATCH_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("settings/config.yaml")
}
