// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BazwatchError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A `bazel info` or `bazel query` subprocess exited non-zero. The build
    /// command itself is never reported through this variant; a red build is
    /// a recoverable outcome, not an error.
    #[error("bazel {subcommand} failed with exit code {code}: {stderr}")]
    ToolFailed {
        subcommand: String,
        code: i32,
        stderr: String,
    },

    #[error("file watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BazwatchError>;
