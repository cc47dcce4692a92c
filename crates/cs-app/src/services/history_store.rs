use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use cs_core::history::{HistoryList, RecordOutcome};
use cs_core::ports::{
    ClipboardChangeHandler, HistoryObserverPort, StorageKey, StringListStorePort,
};

/// Which copies are kept out of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// Drop copies of the empty string. Whitespace-only text is still kept.
    pub ignore_empty: bool,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self { ignore_empty: true }
    }
}

/// Handle returned by [`HistoryStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The clipboard history plus its persistence and observers.
///
/// The list lock is held across reload-mutate-persist so the stored order
/// always matches the mutation order. Each record starts from the stored
/// list, so a clear or record made by another process sharing the store is
/// not overwritten. Observers run after the lock is released.
pub struct HistoryStore {
    list: Mutex<HistoryList>,
    storage: Arc<dyn StringListStorePort>,
    policy: HistoryPolicy,
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn HistoryObserverPort>)>>,
    next_subscription: AtomicU64,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn StringListStorePort>, policy: HistoryPolicy) -> Self {
        Self {
            list: Mutex::new(HistoryList::new()),
            storage,
            policy,
            observers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// Replace the in-memory list with the stored one.
    ///
    /// A missing key yields an empty history; unreadable storage is logged
    /// and also yields an empty history.
    pub async fn load(&self) {
        let stored = match self.storage.load(StorageKey::History).await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!(error = ?err, "Failed to load clipboard history, starting empty");
                Vec::new()
            }
        };

        let mut list = self.list.lock().await;
        *list = HistoryList::from_stored(stored);
        debug!(entries = list.len(), "Loaded clipboard history");
    }

    /// Record a new copy. Returns `None` when the policy ignored it.
    pub async fn record(&self, text: String) -> Option<RecordOutcome> {
        if self.policy.ignore_empty && text.is_empty() {
            debug!("Ignoring empty clipboard copy");
            return None;
        }

        let (outcome, snapshot) = {
            let mut list = self.list.lock().await;
            self.refresh(&mut list).await;
            let outcome = list.record(text);
            let snapshot = list.to_vec();
            self.persist(&snapshot).await;
            (outcome, snapshot)
        };

        debug!(?outcome, entries = snapshot.len(), "Recorded clipboard copy");
        self.notify(&snapshot).await;
        Some(outcome)
    }

    pub async fn clear(&self) {
        {
            let mut list = self.list.lock().await;
            list.clear();
            self.persist(&[]).await;
        }

        debug!("Cleared clipboard history");
        self.notify(&[]).await;
    }

    /// Current entries, newest first.
    pub async fn entries(&self) -> Vec<String> {
        self.list.lock().await.to_vec()
    }

    /// Entry at `index` without touching the order.
    pub async fn select(&self, index: usize) -> Option<String> {
        self.list.lock().await.get(index).map(str::to_string)
    }

    /// Same lookup as [`select`](Self::select); the caller places the value
    /// on the clipboard and the poller reports it back as a new copy.
    pub async fn copy(&self, index: usize) -> Option<String> {
        self.select(index).await
    }

    pub async fn subscribe(&self, observer: Arc<dyn HistoryObserverPort>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers.write().await.push((id, observer));
        id
    }

    /// Returns whether `id` was subscribed.
    pub async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write().await;
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Pick up changes another writer made to the stored list.
    ///
    /// A missing key or unreadable storage keeps the in-memory list, which
    /// then gets written back by the caller.
    async fn refresh(&self, list: &mut HistoryList) {
        match self.storage.load(StorageKey::History).await {
            Ok(Some(stored)) => *list = HistoryList::from_stored(stored),
            Ok(None) => {}
            Err(err) => {
                warn!(error = ?err, "Failed to refresh clipboard history, keeping in-memory list");
            }
        }
    }

    async fn persist(&self, entries: &[String]) {
        if let Err(err) = self.storage.save(StorageKey::History, entries).await {
            warn!(error = ?err, "Failed to persist clipboard history");
        }
    }

    async fn notify(&self, entries: &[String]) {
        let observers: Vec<_> = self
            .observers
            .read()
            .await
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer.on_history_changed(entries);
        }
    }
}

#[async_trait]
impl ClipboardChangeHandler for HistoryStore {
    async fn on_text_copied(&self, text: String) -> Result<()> {
        self.record(text).await;
        Ok(())
    }
}
