// src/lib.rs

pub mod bazel;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod resolve;
pub mod watch;

use tracing::{debug, info};

use crate::bazel::BazelClient;
use crate::cli::{CliArgs, Invocation};
use crate::engine::{Orchestrator, RunOptions};
use crate::errors::Result;
use crate::exec::BazelBuildRunner;
use crate::resolve::CommandResolver;

const DEFAULT_BAZEL_BIN: &str = "bazel";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - optional `Bazwatch.toml` defaults
/// - invocation partitioning (tool flags / command / targets)
/// - the subprocess-backed resolver and build runner
/// - the orchestrator loop
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = config::load_optional(config::default_config_path())?;

    let invocation = Invocation::partition(&args.args)?;
    debug!(?invocation, "partitioned invocation");

    // CLI wins over the config file, which wins over the plain default.
    let bazel_bin = args
        .bazel
        .or(cfg.bazel_bin)
        .unwrap_or_else(|| DEFAULT_BAZEL_BIN.to_string());

    // Standing config flags come first so command-line flags can override.
    let mut tool_flags = cfg.tool_flags;
    tool_flags.extend(invocation.tool_flags.iter().cloned());

    info!(
        bazel = %bazel_bin,
        command = %invocation.command,
        targets = ?invocation.targets,
        "starting bazwatch"
    );

    let client = BazelClient::new(bazel_bin, tool_flags);
    let resolver = CommandResolver::new(client.clone());
    let builder = BazelBuildRunner::new(client, invocation.command, invocation.targets.clone());

    let orchestrator = Orchestrator::new(
        resolver,
        builder,
        invocation.target_expression(),
        RunOptions { once: args.once },
    );

    orchestrator.run().await
}
