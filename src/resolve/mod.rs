// src/resolve/mod.rs

//! Dependency resolution.
//!
//! This module turns a target expression into the two concrete file sets the
//! watch loop cares about:
//! - the *source files* the target transitively depends on, and
//! - the *build-definition files* that determine how the target is built.
//!
//! - [`labels`] holds the pure label-to-path mapping.
//! - [`command`] holds the subprocess-backed [`CommandResolver`].
//!
//! The runtime talks to the [`Resolver`] trait rather than the concrete
//! resolver, so tests can substitute a fake returning fixed file sets
//! without spawning subprocesses.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::Result;

pub mod command;
pub mod labels;

pub use command::CommandResolver;
pub use labels::{label_to_file, map_labels_to_files};

/// The two file sets produced by one resolution cycle.
///
/// Both are ordered as the queries returned them and may contain duplicates;
/// nothing here deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSets {
    /// Source files the target's output depends on. A change to one of these
    /// requires a rebuild but cannot change the shape of the dependency graph.
    pub source_files: Vec<PathBuf>,

    /// Build-definition files. A change to one of these can change what
    /// depends on what, so the file sets themselves must be recomputed.
    pub build_files: Vec<PathBuf>,
}

/// Trait abstracting dependency resolution.
///
/// Production code uses [`CommandResolver`]; tests can provide their own
/// implementation that returns canned file sets.
pub trait Resolver: Send {
    /// Resolve a target expression into its source and build file sets.
    fn resolve(
        &mut self,
        target_expression: &str,
    ) -> Pin<Box<dyn Future<Output = Result<FileSets>> + Send + '_>>;
}
