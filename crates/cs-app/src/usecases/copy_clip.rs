//! Put a history entry or a pinned clip back on the system clipboard.

use std::fmt;
use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cs_core::ports::SystemClipboardPort;

use crate::services::{HistoryStore, PinnedClipsStore};

/// Where the copied text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSource {
    /// Index into the history, 0 is the newest entry.
    History(usize),
    /// Pinned slot number.
    Pinned(usize),
}

impl fmt::Display for ClipSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipSource::History(index) => write!(f, "history entry {index}"),
            ClipSource::Pinned(slot) => write!(f, "pinned slot {slot}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CopyClipError {
    #[error("{0} does not exist")]
    NotFound(ClipSource),

    #[error("pinned slot {slot} is empty")]
    EmptyPinnedSlot { slot: usize },

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Writes the selected text to the system clipboard (last writer wins).
///
/// The history itself is not reordered here: the poller observes the
/// write as a new copy and promotes the entry to the front.
pub struct CopyHistoryEntry {
    history: Arc<HistoryStore>,
    pinned: Arc<PinnedClipsStore>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopyHistoryEntry {
    pub fn new(
        history: Arc<HistoryStore>,
        pinned: Arc<PinnedClipsStore>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        Self {
            history,
            pinned,
            clipboard,
        }
    }

    /// Returns the text placed on the clipboard.
    pub async fn execute(&self, source: ClipSource) -> Result<String, CopyClipError> {
        let span = info_span!("usecase.copy_clip.execute", %source);

        async {
            let text = self.resolve(source).await?;

            self.clipboard
                .write_text(&text)
                .map_err(|e| CopyClipError::WriteFailed(e.to_string()))?;

            info!(len = text.len(), "Copied clip to system clipboard");
            Ok(text)
        }
        .instrument(span)
        .await
    }

    async fn resolve(&self, source: ClipSource) -> Result<String, CopyClipError> {
        match source {
            ClipSource::History(index) => self
                .history
                .copy(index)
                .await
                .ok_or(CopyClipError::NotFound(source)),
            ClipSource::Pinned(slot) => {
                let pinned = self.pinned.pinned().await;
                match pinned.get(slot) {
                    None => Err(CopyClipError::NotFound(source)),
                    Some("") => Err(CopyClipError::EmptyPinnedSlot { slot }),
                    Some(text) => Ok(text.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::HistoryPolicy;
    use crate::test_support::{MockClipboard, MockStore};

    fn quiet_store() -> Arc<MockStore> {
        let mut store = MockStore::new();
        store.expect_load().returning(|_| Ok(None));
        store.expect_save().returning(|_, _| Ok(()));
        Arc::new(store)
    }

    async fn stores() -> (Arc<HistoryStore>, Arc<PinnedClipsStore>) {
        let history = Arc::new(HistoryStore::new(quiet_store(), HistoryPolicy::default()));
        history.record("older".into()).await;
        history.record("newer".into()).await;

        let pinned = Arc::new(PinnedClipsStore::new(quiet_store()));
        pinned.edit_slot(0, "pinned text".into()).await.unwrap();

        (history, pinned)
    }

    fn expect_write(text: &'static str) -> MockClipboard {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(move |written| written == text)
            .times(1)
            .returning(|_| Ok(()));
        clipboard
    }

    #[tokio::test]
    async fn copies_history_entry_without_reordering() {
        let (history, pinned) = stores().await;
        let use_case =
            CopyHistoryEntry::new(history.clone(), pinned, Arc::new(expect_write("older")));

        let text = use_case.execute(ClipSource::History(1)).await.unwrap();

        assert_eq!(text, "older");
        assert_eq!(history.entries().await, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn copies_pinned_slot() {
        let (history, pinned) = stores().await;
        let use_case = CopyHistoryEntry::new(history, pinned, Arc::new(expect_write("pinned text")));

        use_case.execute(ClipSource::Pinned(0)).await.unwrap();
    }

    #[tokio::test]
    async fn missing_sources_are_not_found() {
        let (history, pinned) = stores().await;
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();
        let use_case = CopyHistoryEntry::new(history, pinned, Arc::new(clipboard));

        assert!(matches!(
            use_case.execute(ClipSource::History(2)).await,
            Err(CopyClipError::NotFound(ClipSource::History(2)))
        ));
        assert!(matches!(
            use_case.execute(ClipSource::Pinned(3)).await,
            Err(CopyClipError::NotFound(ClipSource::Pinned(3)))
        ));
        assert!(matches!(
            use_case.execute(ClipSource::Pinned(1)).await,
            Err(CopyClipError::EmptyPinnedSlot { slot: 1 })
        ));
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let (history, pinned) = stores().await;
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(anyhow::anyhow!("pasteboard locked")));
        let use_case = CopyHistoryEntry::new(history, pinned, Arc::new(clipboard));

        let err = use_case.execute(ClipSource::History(0)).await.unwrap_err();
        assert!(matches!(err, CopyClipError::WriteFailed(msg) if msg.contains("pasteboard locked")));
    }
}
