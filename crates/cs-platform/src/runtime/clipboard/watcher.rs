use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use cs_core::clipboard::ChangeCount;
use cs_core::ports::{ClipboardChangeHandler, SystemClipboardPort};

/// What a single poll observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Counter did not move since the previous poll.
    Unchanged,
    /// Counter moved but the clipboard holds no text.
    NonText,
    /// Counter moved and the handler received this text.
    Text(String),
}

pub struct ClipboardWatcher<C>
where
    C: SystemClipboardPort + ?Sized,
{
    clipboard: Arc<C>,
    handler: Arc<dyn ClipboardChangeHandler>,
    last_seen: Mutex<ChangeCount>,
}

impl<C> ClipboardWatcher<C>
where
    C: SystemClipboardPort + ?Sized,
{
    /// Builds a watcher whose baseline is the clipboard's current counter.
    pub fn new(clipboard: Arc<C>, handler: Arc<dyn ClipboardChangeHandler>) -> Self {
        let baseline = match clipboard.change_count() {
            Ok(count) => count,
            Err(err) => {
                log::warn!("initial clipboard counter read failed, starting from 0: {err:?}");
                ChangeCount::ZERO
            }
        };
        log::debug!("clipboard watcher baseline counter {baseline}");

        Self {
            clipboard,
            handler,
            last_seen: Mutex::new(baseline),
        }
    }

    /// Last counter value the watcher has accounted for.
    pub async fn last_seen(&self) -> ChangeCount {
        *self.last_seen.lock().await
    }

    /// Samples the clipboard once.
    ///
    /// The baseline lock is held for the whole check so overlapping polls
    /// never report the same change twice. The counter is advanced before
    /// the text read, so a failed read skips that change instead of
    /// retrying it forever.
    pub async fn check_once(&self) -> Result<PollOutcome> {
        let mut last_seen = self.last_seen.lock().await;

        let current = self
            .clipboard
            .change_count()
            .context("read clipboard change counter")?;
        if current == *last_seen {
            return Ok(PollOutcome::Unchanged);
        }
        *last_seen = current;

        let text = self
            .clipboard
            .read_text()
            .with_context(|| format!("read clipboard text at counter {current}"))?;

        match text {
            Some(text) => {
                log::debug!("clipboard counter {current}: text ({} bytes)", text.len());
                self.handler
                    .on_text_copied(text.clone())
                    .await
                    .context("handle copied text")?;
                Ok(PollOutcome::Text(text))
            }
            None => {
                log::debug!("clipboard counter {current}: non-text content ignored");
                Ok(PollOutcome::NonText)
            }
        }
    }
}
