use async_trait::async_trait;

/// Port for controlling the clipboard watcher lifecycle.
///
/// # Behavior
/// - `start_watcher()` must be idempotent: a running watcher is never started twice.
/// - `stop_watcher()` must be idempotent and succeed when nothing is running.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    /// Request the clipboard watcher to start.
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    /// Request the clipboard watcher to stop.
    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;

    /// Whether the watcher is currently polling.
    fn is_running(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}
