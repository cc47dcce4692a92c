//! Use case for stopping the clipboard watcher

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cs_core::ports::WatcherControlPort;

use super::ClipboardWatcherError;

/// Stops the clipboard watcher; stopping a watcher that is not running is Ok.
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), ClipboardWatcherError> {
        let span = info_span!("usecase.stop_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to stop");

            self.watcher_control.stop_watcher().await?;

            info!("Clipboard watcher stopped");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
