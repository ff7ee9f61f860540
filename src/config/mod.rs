// src/config/mod.rs

//! Optional project configuration.
//!
//! A `Bazwatch.toml` in the working directory can provide standing defaults
//! (bazel binary path, tool flags that should be on every invocation). The
//! CLI always wins over the file; a missing file is not an error.

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_optional};
pub use model::ConfigFile;
