// src/exec/mod.rs

//! Build command execution layer.
//!
//! This module is responsible for actually running the requested bazel
//! command (`build`, `test` or `run`) and classifying its exit:
//!
//! - [`backend`] provides the `BuildRunner` trait and the concrete
//!   `BazelBuildRunner` the orchestrator uses in production, and which
//!   tests can replace with a fake implementation.

pub mod backend;

pub use backend::{BazelBuildRunner, BuildOutcome, BuildRunner};
