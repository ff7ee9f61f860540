// src/bazel/mod.rs

//! Bazel subprocess protocol.
//!
//! This module is the only place that shells out to the build tool. The
//! contract is textual:
//! - `info <noun>` yields one line of trimmed text on stdout (a directory),
//! - `query <expr>` yields newline-separated labels on stdout,
//! - `<command> <targets...>` streams its output straight to the developer's
//!   terminal and reports success or failure via the exit status.

pub mod client;

pub use client::BazelClient;
