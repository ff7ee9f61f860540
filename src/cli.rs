// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The outer surface (`--bazel`, `--once`, `--log-level`) is handled by
//! `clap`; everything after those flags is captured verbatim and partitioned
//! the way the build tool expects: every leading-`--` token is a tool flag
//! passed through to bazel unchanged, the first bare token is the command
//! (`build`, `test` or `run`) and the remaining bare tokens are targets.

use clap::{Parser, ValueEnum};

use crate::errors::{BazwatchError, Result};

/// Command-line arguments for `bazwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bazwatch",
    version,
    about = "Rebuild, retest or rerun a bazel target whenever its inputs change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the bazel binary.
    ///
    /// Defaults to `bazel_bin` from `Bazwatch.toml` if present, else "bazel".
    #[arg(long, value_name = "PATH")]
    pub bazel: Option<String>,

    /// Resolve and build a single time, then exit instead of watching.
    #[arg(long)]
    pub once: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BAZWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// `[tool-flags...] <command> <target...>`, passed through to bazel.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// The bazel subcommand driven by the watch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BazelCommand {
    Build,
    Test,
    Run,
}

impl BazelCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            BazelCommand::Build => "build",
            BazelCommand::Test => "test",
            BazelCommand::Run => "run",
        }
    }

    fn from_arg(s: &str) -> Option<Self> {
        match s {
            "build" => Some(BazelCommand::Build),
            "test" => Some(BazelCommand::Test),
            "run" => Some(BazelCommand::Run),
            _ => None,
        }
    }
}

impl std::fmt::Display for BazelCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully partitioned invocation: what to run and with which flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: BazelCommand,
    pub targets: Vec<String>,
    pub tool_flags: Vec<String>,
}

impl Invocation {
    /// Partition the trailing CLI args into tool flags, command and targets.
    ///
    /// Any `--`-prefixed token, wherever it appears, is a tool flag forwarded
    /// verbatim. Of the bare tokens, the first is the command and the rest
    /// are target expressions.
    pub fn partition(args: &[String]) -> Result<Self> {
        let mut tool_flags = Vec::new();
        let mut bare = Vec::new();

        for arg in args {
            if arg.starts_with("--") {
                tool_flags.push(arg.clone());
            } else {
                bare.push(arg.clone());
            }
        }

        if bare.len() < 2 {
            return Err(BazwatchError::Usage(
                "expected a command and at least one target: \
                 bazwatch [--bazel=<path>] [tool-flags...] <command> <target...>"
                    .to_string(),
            ));
        }

        let command = BazelCommand::from_arg(&bare[0]).ok_or_else(|| {
            BazwatchError::Usage(format!(
                "{:?} is not a valid command for use with bazwatch - try 'build', 'test', or 'run'",
                bare[0]
            ))
        })?;

        Ok(Invocation {
            command,
            targets: bare.split_off(1),
            tool_flags,
        })
    }

    /// The target expression handed to the resolver: all targets joined into
    /// one set-union query argument.
    pub fn target_expression(&self) -> String {
        self.targets.join(" ")
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
