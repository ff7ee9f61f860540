// src/watch/mod.rs

//! File watching.
//!
//! This module wires the cross-platform filesystem watcher (`notify`) into
//! the async world. It knows nothing about bazel or the rebuild loop; it
//! only turns write-completion events on a fixed set of discrete file paths
//! into awaitable notifications.

pub mod watch_set;

pub use watch_set::WatchSet;
