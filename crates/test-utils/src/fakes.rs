//! Fake resolver and build-runner backends for orchestrator tests.
//!
//! These let the rebuild loop run end-to-end without spawning a single
//! bazel subprocess: the resolver hands back canned file sets, the build
//! runner records each invocation and signals a channel so tests can await
//! "a build happened".

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;

use bazwatch::errors::{BazwatchError, Result};
use bazwatch::exec::{BuildOutcome, BuildRunner};
use bazwatch::resolve::{FileSets, Resolver};

/// A resolver that returns the same canned file sets on every call and
/// counts how often it was asked.
pub struct FakeResolver {
    sets: FileSets,
    calls: Arc<AtomicUsize>,
}

impl FakeResolver {
    pub fn new(sets: FileSets) -> Self {
        Self {
            sets,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter; clone it before handing the resolver to the
    /// orchestrator.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Resolver for FakeResolver {
    fn resolve(
        &mut self,
        _target_expression: &str,
    ) -> Pin<Box<dyn Future<Output = Result<FileSets>> + Send + '_>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let sets = self.sets.clone();
        Box::pin(async move { Ok(sets) })
    }
}

/// A resolver that always fails, for exercising the fatal-error path.
pub struct FailingResolver {
    pub message: String,
}

impl Resolver for FailingResolver {
    fn resolve(
        &mut self,
        _target_expression: &str,
    ) -> Pin<Box<dyn Future<Output = Result<FileSets>> + Send + '_>> {
        let message = self.message.clone();
        Box::pin(async move { Err(BazwatchError::Other(anyhow::anyhow!(message))) })
    }
}

/// A build runner that records invocations and reports a fixed outcome.
///
/// Each completed "build" also sends its sequence number (starting at 1)
/// over the channel handed out by [`FakeBuildRunner::new`], so tests can
/// await builds instead of sleeping.
pub struct FakeBuildRunner {
    outcome: BuildOutcome,
    calls: Arc<AtomicUsize>,
    built_tx: mpsc::UnboundedSender<usize>,
}

impl FakeBuildRunner {
    pub fn new(outcome: BuildOutcome) -> (Self, mpsc::UnboundedReceiver<usize>) {
        let (built_tx, built_rx) = mpsc::unbounded_channel();
        (
            Self {
                outcome,
                calls: Arc::new(AtomicUsize::new(0)),
                built_tx,
            },
            built_rx,
        )
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl BuildRunner for FakeBuildRunner {
    fn run_build(&mut self) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.built_tx.send(n);
        let outcome = self.outcome;
        Box::pin(async move { Ok(outcome) })
    }
}

/// A build runner whose process launch "fails", for exercising the fatal
/// launch-error path (binary not found and the like).
pub struct FailingBuildRunner;

impl BuildRunner for FailingBuildRunner {
    fn run_build(&mut self) -> Pin<Box<dyn Future<Output = Result<BuildOutcome>> + Send + '_>> {
        Box::pin(async move {
            Err(BazwatchError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such binary",
            )))
        })
    }
}
