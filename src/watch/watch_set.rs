// src/watch/watch_set.rs

use std::path::PathBuf;

use notify::event::{AccessKind, AccessMode, EventKind};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::Result;

/// A live watch over a fixed set of discrete file paths.
///
/// Each armed set owns its `RecommendedWatcher`; dropping the `WatchSet`
/// tears down every watch in it, which is how the rebuild loop replaces a
/// stale set wholesale with a fresh one. Paths are watched non-recursively
/// (they are files, not directories), and watching the same path twice is
/// tolerated.
pub struct WatchSet {
    _watcher: RecommendedWatcher,
    rx: mpsc::UnboundedReceiver<PathBuf>,
}

impl std::fmt::Debug for WatchSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSet").finish()
    }
}

impl WatchSet {
    /// Arm a watch over every path in `paths`.
    ///
    /// Failure to arm any single path (typically because it does not exist)
    /// fails the whole set: a missing dependency means the resolution itself
    /// is wrong and needs attention, not silent skipping.
    pub fn arm(paths: &[PathBuf]) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel::<PathBuf>();

        // Closure called synchronously by notify whenever an event arrives.
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !is_write_completion(&event.kind) {
                        return;
                    }
                    for path in event.paths {
                        // A closed receiver just means this set was replaced.
                        let _ = tx.send(path);
                    }
                }
                Err(err) => {
                    eprintln!("bazwatch: file watch error: {err}");
                }
            },
            Config::default(),
        )?;

        for path in paths {
            watcher.watch(path, RecursiveMode::NonRecursive)?;
        }

        debug!(count = paths.len(), "armed watch set");

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Wait for the next write-completion event on any path in the set.
    ///
    /// Returns `None` if the watcher backend shut down, which the caller
    /// treats as fatal.
    pub async fn changed(&mut self) -> Option<PathBuf> {
        self.rx.recv().await
    }
}

/// Event kinds that signal a finished write.
///
/// `Access(Close(Write))` is the inotify close-write notification; `Modify`
/// and `Create` cover backends (and editors doing replace-by-rename) that
/// never report close-write.
fn is_write_completion(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Access(AccessKind::Close(AccessMode::Write))
            | EventKind::Modify(_)
            | EventKind::Create(_)
    )
}
