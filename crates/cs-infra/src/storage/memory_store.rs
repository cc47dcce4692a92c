use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use cs_core::ports::{StorageKey, StringListStorePort};

/// Process-local store, used by `--ephemeral` runs and tests.
#[derive(Default)]
pub struct InMemoryStringListStore {
    values: Mutex<HashMap<StorageKey, Vec<String>>>,
}

impl InMemoryStringListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StringListStorePort for InMemoryStringListStore {
    async fn load(&self, key: StorageKey) -> Result<Option<Vec<String>>> {
        Ok(self.values.lock().await.get(&key).cloned())
    }

    async fn save(&self, key: StorageKey, values: &[String]) -> Result<()> {
        self.values.lock().await.insert(key, values.to_vec());
        Ok(())
    }
}
