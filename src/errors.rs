// src/errors.rs

//! Typed failures for configuration loading.
//!
//! The split matters to callers: `MissingSkins` is the one condition the
//! normalization pipeline itself rejects, while the file-level variants are
//! surfaced from reading and parsing the document, unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `skins` list was missing, null, or empty.
    #[error("no skins provided")]
    MissingSkins,

    /// No file at the given path.
    #[error("config file not found at {path:?}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("reading config file at {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML, or does not fit the config shape.
    #[error("parsing YAML config from {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
