// tests/orchestrator_errors.rs

//! Fatal-error paths of the rebuild loop: resolution failure, watch-arm
//! failure and build-launch failure all terminate the run.

use std::path::PathBuf;

use bazwatch::engine::{Orchestrator, RunOptions};
use bazwatch::errors::BazwatchError;
use bazwatch::exec::BuildOutcome;
use bazwatch::resolve::FileSets;
use bazwatch_test_utils::fakes::{FailingBuildRunner, FailingResolver, FakeBuildRunner, FakeResolver};
use bazwatch_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn resolver_failure_is_fatal_and_surfaces_unchanged() {
    init_tracing();

    let resolver = FailingResolver {
        message: "query exploded".to_string(),
    };
    let (builder, _rx) = FakeBuildRunner::new(BuildOutcome::Success);
    let build_calls = builder.calls();

    let orchestrator = Orchestrator::new(resolver, builder, "//foo:bar", RunOptions::default());
    let err = with_timeout(orchestrator.run()).await.unwrap_err();

    assert!(err.to_string().contains("query exploded"));
    // Nothing was built against a failed resolution.
    assert_eq!(build_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_watch_path_is_fatal() {
    init_tracing();

    let resolver = FakeResolver::new(FileSets {
        source_files: vec![PathBuf::from("/definitely/not/here.src")],
        build_files: vec![PathBuf::from("/definitely/not/BUILD")],
    });
    let (builder, _rx) = FakeBuildRunner::new(BuildOutcome::Success);

    let orchestrator = Orchestrator::new(resolver, builder, "//foo:bar", RunOptions::default());
    let err = with_timeout(orchestrator.run()).await.unwrap_err();

    assert!(matches!(err, BazwatchError::WatchError(_)));
}

#[tokio::test]
async fn build_launch_failure_is_fatal() {
    init_tracing();

    let resolver = FakeResolver::new(FileSets::default());
    let orchestrator = Orchestrator::new(
        resolver,
        FailingBuildRunner,
        "//foo:bar",
        RunOptions::default(),
    );

    let err = with_timeout(orchestrator.run()).await.unwrap_err();
    assert!(matches!(err, BazwatchError::IoError(_)));
}
