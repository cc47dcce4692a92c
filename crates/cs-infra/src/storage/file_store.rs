use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

use cs_core::ports::{StorageKey, StringListStorePort};

/// On-disk layout: one JSON object, one array of strings per key.
type StoreDocument = BTreeMap<String, Vec<String>>;

/// Keeps every key in a single pretty-printed JSON file.
///
/// ```json
/// {
///   "clipboard_history": ["newest", "older"],
///   "pinned_clips": ["", "", ""]
/// }
/// ```
pub struct FileStringListStore {
    path: PathBuf,
    // Serializes read-modify-write cycles between keys
    write_lock: Mutex<()>,
}

impl FileStringListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// `Ok(None)` when the file does not exist yet.
    async fn read_document(&self) -> Result<Option<StoreDocument>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read store failed: {}", self.path.display()))
            }
        };

        let document = serde_json::from_str(&content)
            .with_context(|| format!("parse store failed: {}", self.path.display()))?;
        Ok(Some(document))
    }

    /// Writes to a sibling temp file, then renames over the target.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl StringListStorePort for FileStringListStore {
    async fn load(&self, key: StorageKey) -> Result<Option<Vec<String>>> {
        let document = self.read_document().await?;
        let values = document.and_then(|mut doc| doc.remove(key.as_str()));
        debug!(
            key = %key,
            found = values.is_some(),
            path = %self.path.display(),
            "Loaded string list"
        );
        Ok(values)
    }

    async fn save(&self, key: StorageKey, values: &[String]) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        // An unreadable document cannot be loaded either, so it is replaced
        let mut document = match self.read_document().await {
            Ok(existing) => existing.unwrap_or_default(),
            Err(err) => {
                warn!(
                    error = ?err,
                    path = %self.path.display(),
                    "Existing store unreadable, rewriting it"
                );
                StoreDocument::new()
            }
        };
        document.insert(key.as_str().to_string(), values.to_vec());

        let content = serde_json::to_string_pretty(&document).context("serialize store failed")?;
        self.atomic_write(&content).await?;

        debug!(key = %key, len = values.len(), "Saved string list");
        Ok(())
    }
}
