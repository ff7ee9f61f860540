// src/resolve/labels.rs

//! Pure textual mapping from bazel labels to absolute file paths.
//!
//! Labels come out of `bazel query` in one of two forms:
//! - workspace-relative: `//path/to/pkg:name`
//! - external-repository: `@repo//path/to/pkg:name`
//!
//! Workspace-relative labels resolve under the workspace checkout; external
//! labels resolve under `<output_base>/external/<repo>`. The mapping never
//! touches the filesystem and never checks that the result exists.

use std::path::{Path, PathBuf};

use tracing::debug;

const EXTERNAL_PREFIX: char = '@';
const EXTERNAL_DIR: &str = "external";
const LABEL_PREFIX: &str = "//";

/// Map a single label to an absolute path, or `None` for labels that carry
/// no path (the empty string from a trailing query newline, or a malformed
/// external label with no `//` marker).
///
/// Only the first `:` is replaced with a path separator. Abbreviated labels
/// with no colon (`//a/b`, meaning `//a/b:b`) are deliberately not expanded:
/// the two queries this crate issues only ever emit file labels, which always
/// spell out the file name after the colon.
pub fn label_to_file(label: &str, output_base: &Path, workspace: &Path) -> Option<PathBuf> {
    if label.is_empty() {
        return None;
    }

    let mut dir = workspace.to_path_buf();
    let mut rest = label;

    if let Some(rest_no_at) = label.strip_prefix(EXTERNAL_PREFIX) {
        let Some(sep) = rest_no_at.find(LABEL_PREFIX) else {
            debug!(label, "skipping external label without workspace marker");
            return None;
        };
        let repo_name = &rest_no_at[..sep];
        dir = output_base.join(EXTERNAL_DIR).join(repo_name);
        rest = &rest_no_at[sep..];
    }

    let rest = rest.strip_prefix(LABEL_PREFIX).unwrap_or(rest);
    let relative = rest.replacen(':', "/", 1);
    // A root-package label (`//:name`) leaves a leading separator behind;
    // joining an absolute tail would discard the base directory.
    let relative = relative.trim_start_matches('/');

    Some(dir.join(relative))
}

/// Map an ordered sequence of labels to paths, preserving order and skipping
/// entries that map to nothing.
pub fn map_labels_to_files(
    labels: &[String],
    output_base: &Path,
    workspace: &Path,
) -> Vec<PathBuf> {
    labels
        .iter()
        .filter_map(|label| label_to_file(label, output_base, workspace))
        .collect()
}
