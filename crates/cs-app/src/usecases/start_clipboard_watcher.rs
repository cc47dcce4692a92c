//! Use case for starting the clipboard watcher

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cs_core::ports::{WatcherControlError, WatcherControlPort};

/// Error type for clipboard watcher lifecycle failures.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardWatcherError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}

impl From<WatcherControlError> for ClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        match err {
            WatcherControlError::StartFailed(msg) => ClipboardWatcherError::StartFailed(msg),
            WatcherControlError::StopFailed(msg) => ClipboardWatcherError::StopFailed(msg),
        }
    }
}

/// Use case for starting the clipboard watcher.
///
/// ## Behavior
/// - Requests the clipboard watcher to start through the `WatcherControlPort`
/// - Starting an already-running watcher is a no-op
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    /// Execute the use case.
    ///
    /// # Returns
    /// - `Ok(())` if the watcher is running afterwards
    /// - `Err(ClipboardWatcherError)` if starting the watcher failed
    pub async fn execute(&self) -> Result<(), ClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to start");

            self.watcher_control.start_watcher().await?;

            info!("Clipboard watcher started successfully");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
