// src/config/mod.rs

//! Configuration loading and normalization for skinwatch.
//!
//! Responsibilities:
//! - Define the YAML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Normalize raw values into their final form (`normalize.rs`).

pub mod loader;
pub mod model;
pub mod normalize;

pub use loader::{default_config_path, load_and_normalize, load_from_path};
pub use model::{Config, PatternField, RawConfig, RawSkin, RawTimeouts, Skin, Timeouts};
pub use normalize::normalize;
