// src/engine/orchestrator.rs

use std::time::Duration;

use anyhow::anyhow;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::engine::RunOptions;
use crate::errors::Result;
use crate::exec::{BuildOutcome, BuildRunner};
use crate::resolve::Resolver;
use crate::watch::WatchSet;

/// Delay applied after the first event of a change before reacting, so a
/// burst of writes from a single save or format operation coalesces into one
/// rebuild. A tuning point, not a contract.
pub const WRITE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Drives the resolve/build/watch loop.
///
/// A single control thread owns everything: subprocess calls and watch-event
/// waits happen strictly in sequence, and the two watch sets are replaced
/// wholesale (old dropped before new armed) rather than mutated, so there is
/// nothing to lock.
pub struct Orchestrator<R: Resolver, B: BuildRunner> {
    resolver: R,
    builder: B,
    target_expression: String,
    options: RunOptions,
}

impl<R: Resolver, B: BuildRunner> std::fmt::Debug for Orchestrator<R, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("target_expression", &self.target_expression)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R: Resolver, B: BuildRunner> Orchestrator<R, B> {
    pub fn new(
        resolver: R,
        builder: B,
        target_expression: impl Into<String>,
        options: RunOptions,
    ) -> Self {
        Self {
            resolver,
            builder,
            target_expression: target_expression.into(),
            options,
        }
    }

    /// Run the watch loop until a fatal error (or forever).
    ///
    /// Fatal: resolution failure, watch-arm failure, failure to launch the
    /// build process. Not fatal: the build command exiting non-zero, which
    /// is the everyday red-build case.
    pub async fn run(mut self) -> Result<()> {
        'resolve: loop {
            info!("computing set of files to watch");
            let sets = self.resolver.resolve(&self.target_expression).await?;

            loop {
                info!("rebuilding");
                match self.builder.run_build().await? {
                    BuildOutcome::Success => debug!("build command succeeded"),
                    BuildOutcome::Failed(code) => {
                        warn!(code, "bazel failed; waiting for the next change");
                    }
                }

                if self.options.once {
                    return Ok(());
                }

                // Replace, never mutate: whatever was armed on the previous
                // pass is gone before these come up.
                let mut source_watch = WatchSet::arm(&sets.source_files)?;
                let mut build_watch = WatchSet::arm(&sets.build_files)?;

                info!("waiting for next change");
                tokio::select! {
                    changed = source_watch.changed() => {
                        let path = changed
                            .ok_or_else(|| anyhow!("source watch stream closed"))?;
                        debug!(?path, "source file changed");
                        sleep(WRITE_DEBOUNCE).await;
                        // Output may differ, the graph cannot: rebuild with
                        // the same file sets.
                    }
                    changed = build_watch.changed() => {
                        let path = changed
                            .ok_or_else(|| anyhow!("build watch stream closed"))?;
                        debug!(?path, "build-definition file changed");
                        sleep(WRITE_DEBOUNCE).await;
                        continue 'resolve;
                    }
                }
            }
        }
    }
}
