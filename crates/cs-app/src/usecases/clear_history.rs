use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use crate::services::HistoryStore;

/// Empties the clipboard history and its stored copy.
pub struct ClearHistory {
    history: Arc<HistoryStore>,
}

impl ClearHistory {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    pub async fn execute(&self) {
        let span = info_span!("usecase.clear_history.execute");

        async {
            self.history.clear().await;
            info!("Clipboard history cleared");
        }
        .instrument(span)
        .await
    }
}
