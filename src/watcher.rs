//! File system watcher for watch mode.
//!
//! Watches a single markdown source file and notifies the render loop when
//! it changes, so the exported HTML can be regenerated.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

/// File system events the render loop cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    /// The watched file was modified
    Modified,
    /// The watched file was removed
    Removed,
    /// The watcher encountered an error
    Error(String),
}

/// Watches one file for changes.
#[derive(Debug)]
pub struct FileWatcher {
    /// The internal notify watcher
    _watcher: RecommendedWatcher,
    /// Receiver for file system events
    receiver: Receiver<FileEvent>,
}

impl FileWatcher {
    /// Create a watcher for the given file.
    ///
    /// The parent directory is watched rather than the file itself, because
    /// editors that save via rename would otherwise detach the watch.
    pub fn new(file: PathBuf) -> Result<Self, String> {
        let (tx, rx) = channel();

        let watched = file.clone();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                Self::handle_event(result, &watched, &tx);
            },
            Config::default().with_poll_interval(Duration::from_millis(500)),
        )
        .map_err(|e| format!("Failed to create file watcher: {}", e))?;

        let watch_root = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher
            .watch(watch_root, RecursiveMode::NonRecursive)
            .map_err(|e| format!("Failed to watch {}: {}", watch_root.display(), e))?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    /// Block until the next event for the watched file, or `None` if the
    /// watcher thread has gone away.
    pub fn recv(&self) -> Option<FileEvent> {
        self.receiver.recv().ok()
    }

    /// Convert a raw notify event into a `FileEvent`, dropping events for
    /// other files in the watched directory.
    fn handle_event(
        result: Result<Event, notify::Error>,
        watched: &Path,
        tx: &Sender<FileEvent>,
    ) {
        match result {
            Ok(event) => {
                if !event.paths.iter().any(|p| p.ends_with(watched) || p == watched) {
                    return;
                }
                let file_event = match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) => Some(FileEvent::Modified),
                    EventKind::Remove(_) => Some(FileEvent::Removed),
                    // Other events (Access, Other) - ignore
                    _ => None,
                };
                if let Some(evt) = file_event {
                    let _ = tx.send(evt);
                }
            }
            Err(e) => {
                let _ = tx.send(FileEvent::Error(e.to_string()));
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
