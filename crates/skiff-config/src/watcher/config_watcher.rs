//! Core config file watcher implementation.
//!
//! [`ConfigWatcher`] never blocks: the `notify` callback feeds a channel
//! and the owner polls it from its own loop.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use skiff_common::ConfigError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Quiet period after the last file event before a reload is signalled.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    rx: Receiver<()>,
    pub(super) pending_since: Option<Instant>,
    // Dropping the watcher stops event delivery.
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching `path`. The parent directory is watched so atomic
    /// saves (write + rename) and late file creation are both seen.
    pub fn start(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                path = %path.display(),
                "config file does not exist yet, will watch for creation"
            );
        }

        let watch_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name: OsString = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();

        let (tx, rx) = mpsc::channel::<()>();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let is_our_file = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().is_some_and(|n| n == file_name));
                    if is_our_file {
                        debug!("config file change detected");
                        let _ = tx.send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        info!(path = %path.display(), "watching config file");
        Ok(Self {
            path,
            rx,
            pending_since: None,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending file events. Returns `true` once, after events have
    /// stopped arriving for [`DEBOUNCE`].
    pub fn poll_changed(&mut self) -> bool {
        self.poll_changed_at(Instant::now())
    }

    pub(crate) fn poll_changed_at(&mut self, now: Instant) -> bool {
        loop {
            match self.rx.try_recv() {
                Ok(()) => self.pending_since = Some(now),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("config watcher channel closed");
                    break;
                }
            }
        }

        match self.pending_since {
            Some(since) if now.duration_since(since) >= DEBOUNCE => {
                self.pending_since = None;
                info!(path = %self.path.display(), "config file changed");
                true
            }
            _ => false,
        }
    }
}
