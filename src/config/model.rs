// src/config/model.rs

use serde::Deserialize;

/// Contents of `Bazwatch.toml`.
///
/// All fields are optional; the file itself is optional too.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to the bazel binary, overridden by `--bazel`.
    pub bazel_bin: Option<String>,

    /// Tool flags prepended to every bazel invocation, before any flags
    /// given on the command line.
    #[serde(default)]
    pub tool_flags: Vec<String>,
}
