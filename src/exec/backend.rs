// src/exec/backend.rs

//! Pluggable build-runner abstraction.
//!
//! The orchestrator talks to a `BuildRunner` instead of spawning bazel
//! directly. This makes it easy to swap in a fake runner in tests while
//! keeping the production implementation here.

use std::future::Future;
use std::pin::Pin;

use tracing::info;

use crate::bazel::BazelClient;
use crate::cli::BazelCommand;
use crate::errors::Result;

/// Outcome of one build-command invocation.
///
/// A red build is an outcome, not an error: the watch loop keeps going
/// either way. Only process-launch failures surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed(i32),
}

/// Trait abstracting how the build command is executed.
///
/// Production code uses [`BazelBuildRunner`]; tests can provide their own
/// implementation that records invocations without spawning processes.
pub trait BuildRunner: Send {
    /// Run the configured build command once and report its outcome.
    fn run_build(&mut self) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>>;
}

/// Real build runner used in production.
///
/// Streams the tool's stdout/stderr straight through so the developer sees
/// native bazel output live.
#[derive(Debug, Clone)]
pub struct BazelBuildRunner {
    client: BazelClient,
    command: BazelCommand,
    targets: Vec<String>,
}

impl BazelBuildRunner {
    pub fn new(client: BazelClient, command: BazelCommand, targets: Vec<String>) -> Self {
        Self {
            client,
            command,
            targets,
        }
    }

    async fn run_build_inner(&self) -> Result<BuildOutcome> {
        info!(command = %self.command, targets = ?self.targets, "invoking bazel");

        let status = self
            .client
            .run_streamed(self.command.as_str(), &self.targets)
            .await?;

        if status.success() {
            Ok(BuildOutcome::Success)
        } else {
            Ok(BuildOutcome::Failed(status.code().unwrap_or(-1)))
        }
    }
}

impl BuildRunner for BazelBuildRunner {
    fn run_build(&mut self) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>> {
        Box::pin(async move { self.run_build_inner().await })
    }
}
