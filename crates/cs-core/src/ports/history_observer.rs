/// Subscriber interface for history changes.
///
/// Receives the full list (newest first) after every `record` or `clear`.
/// Called outside of any history lock, so observers may read the store again.
pub trait HistoryObserverPort: Send + Sync {
    fn on_history_changed(&self, entries: &[String]);
}
