use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use cs_core::history::{PinnedClipError, PinnedClips, PINNED_SLOT_COUNT};
use cs_core::ports::{StorageKey, StringListStorePort};

/// Pinned snippets plus their persistence.
pub struct PinnedClipsStore {
    clips: Mutex<PinnedClips>,
    storage: Arc<dyn StringListStorePort>,
}

impl PinnedClipsStore {
    pub fn new(storage: Arc<dyn StringListStorePort>) -> Self {
        Self {
            clips: Mutex::new(PinnedClips::default()),
            storage,
        }
    }

    /// Missing or unreadable storage yields three unset slots.
    pub async fn load(&self) {
        let stored = match self.storage.load(StorageKey::PinnedClips).await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!(error = ?err, "Failed to load pinned clips, starting unset");
                Vec::new()
            }
        };

        let mut clips = self.clips.lock().await;
        *clips = PinnedClips::from_stored(stored);
        debug!(set = clips.iter_set().count(), "Loaded pinned clips");
    }

    pub async fn pinned(&self) -> PinnedClips {
        self.clips.lock().await.clone()
    }

    pub async fn edit_slot(&self, slot: usize, text: String) -> Result<(), PinnedClipError> {
        let mut clips = self.clips.lock().await;
        clips.set(slot, text)?;
        self.persist(&clips).await;
        debug!(slot, "Edited pinned clip");
        Ok(())
    }

    pub async fn replace_all(&self, slots: [String; PINNED_SLOT_COUNT]) {
        let mut clips = self.clips.lock().await;
        clips.replace_all(slots);
        self.persist(&clips).await;
        debug!("Replaced all pinned clips");
    }

    async fn persist(&self, clips: &PinnedClips) {
        if let Err(err) = self
            .storage
            .save(StorageKey::PinnedClips, clips.slots())
            .await
        {
            warn!(error = ?err, "Failed to persist pinned clips");
        }
    }
}
