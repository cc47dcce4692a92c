//! Durable key-value storage for ordered string lists.

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

/// The fixed keys the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    History,
    PinnedClips,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::History => "clipboard_history",
            StorageKey::PinnedClips => "pinned_clips",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat key-value store holding one ordered list of strings per key.
///
/// Order and exact content (including empty strings and whitespace) must
/// round-trip losslessly. `save` overwrites the whole value.
#[async_trait]
pub trait StringListStorePort: Send + Sync {
    /// `Ok(None)` when nothing was stored under `key` yet.
    async fn load(&self, key: StorageKey) -> Result<Option<Vec<String>>>;

    async fn save(&self, key: StorageKey, values: &[String]) -> Result<()>;
}
