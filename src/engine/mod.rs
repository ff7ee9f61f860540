// src/engine/mod.rs

//! Orchestration engine for bazwatch.
//!
//! This module ties together:
//! - the dependency resolver (what to watch)
//! - the build runner (what to do on a change)
//! - the watch sets (how changes are observed)
//!
//! into the nested rebuild loop implemented in [`orchestrator`]. The outer
//! loop recomputes the file sets; the inner loop rebuilds and waits. A
//! source-file change re-enters the inner loop (the graph shape cannot have
//! changed); a build-definition change breaks out to the outer loop so the
//! file sets are recomputed before anything else happens.

pub mod orchestrator;

pub use orchestrator::{Orchestrator, WRITE_DEBOUNCE};

/// Options controlling a single orchestrator run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// If true, resolve and build exactly once, then exit instead of
    /// entering the watch loop (used for `--once`).
    pub once: bool,
}
