use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use crate::services::HistoryStore;

/// Returns the clipboard history, newest first.
pub struct ListHistory {
    history: Arc<HistoryStore>,
}

impl ListHistory {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    pub async fn execute(&self) -> Vec<String> {
        let span = info_span!("usecase.list_history.execute");

        async {
            let entries = self.history.entries().await;
            debug!(count = entries.len(), "Listed clipboard history");
            entries
        }
        .instrument(span)
        .await
    }
}
