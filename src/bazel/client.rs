// src/bazel/client.rs

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::errors::{BazwatchError, Result};

/// Thin client around the bazel binary.
///
/// Every invocation is `<bin> <base_args...> <extra...>`, where `base_args`
/// are the tool flags the user asked to forward verbatim. The client never
/// interprets bazel's output beyond the line-oriented contracts documented
/// per method.
#[derive(Debug, Clone)]
pub struct BazelClient {
    bin: String,
    base_args: Vec<String>,
}

impl BazelClient {
    pub fn new(bin: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            bin: bin.into(),
            base_args,
        }
    }

    fn command(&self, extra: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.args(&self.base_args);
        cmd.args(extra);
        cmd
    }

    /// `bazel info <noun>`: one line of trimmed text on stdout.
    pub async fn info(&self, noun: &str) -> Result<String> {
        let stdout = self.capture(&["info", noun]).await?;
        Ok(stdout.trim().to_string())
    }

    /// `bazel query <expr>`: newline-separated labels on stdout.
    ///
    /// The split is verbatim; a trailing newline produces a final empty
    /// entry, which callers are expected to skip.
    pub async fn query(&self, query: &str) -> Result<Vec<String>> {
        let stdout = self.capture(&["query", query]).await?;
        Ok(stdout.split('\n').map(str::to_string).collect())
    }

    /// `bazel <command> <targets...>` with inherited stdout/stderr, so the
    /// developer sees native tool output live. Returns the exit status; a
    /// non-zero status is not an error at this layer.
    pub async fn run_streamed(&self, command: &str, targets: &[String]) -> Result<ExitStatus> {
        let mut cmd = self.command(&[command]);
        cmd.args(targets);
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        debug!(bin = %self.bin, command, ?targets, "running bazel command");

        let status = cmd.status().await?;
        Ok(status)
    }

    /// Run a subprocess capturing stdout, failing on a non-zero exit.
    async fn capture(&self, extra: &[&str]) -> Result<String> {
        let mut cmd = self.command(extra);
        cmd.stdin(Stdio::null());

        debug!(bin = %self.bin, args = ?extra, "querying bazel");

        let output = cmd.output().await?;
        if !output.status.success() {
            return Err(BazwatchError::ToolFailed {
                subcommand: extra.join(" "),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
