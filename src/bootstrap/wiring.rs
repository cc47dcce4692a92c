//! Dependency wiring: builds the concrete adapters and hands them to the
//! application context.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use cs_app::{AppContext, AppDeps};
use cs_core::clipboard::ChangeCount;
use cs_core::ports::{
    ClipboardChangeHandler, PasteKeystrokePort, StringListStorePort, SystemClipboardPort,
};
use cs_infra::{FileStringListStore, InMemoryStringListStore};
use cs_platform::adapters::{EnigoPasteKeystroke, NoopPasteKeystroke};
use cs_platform::clipboard::LocalClipboard;
use cs_platform::runtime::clipboard::{ClipboardWatcher, PollingClipboardRuntime};

use super::ResolvedSettings;

/// Switches that depend on the invoked command rather than on config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WiringOptions {
    /// Keep history and pins in memory only.
    pub ephemeral: bool,
    /// Leave the paste keystroke out (clip is only copied).
    pub no_keystroke: bool,
}

/// Stand-in used when the OS clipboard cannot be opened (for example a
/// headless session). Commands that only read the store keep working.
pub(crate) struct UnavailableClipboard {
    pub(crate) reason: String,
}

impl SystemClipboardPort for UnavailableClipboard {
    fn change_count(&self) -> Result<ChangeCount> {
        Err(anyhow!("system clipboard unavailable: {}", self.reason))
    }

    fn read_text(&self) -> Result<Option<String>> {
        Err(anyhow!("system clipboard unavailable: {}", self.reason))
    }

    fn write_text(&self, _text: &str) -> Result<()> {
        Err(anyhow!("system clipboard unavailable: {}", self.reason))
    }
}

fn build_clipboard() -> Arc<dyn SystemClipboardPort> {
    match LocalClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(err) => {
            warn!(error = ?err, "System clipboard unavailable");
            Arc::new(UnavailableClipboard {
                reason: err.to_string(),
            })
        }
    }
}

fn build_storage(settings: &ResolvedSettings, options: WiringOptions) -> Arc<dyn StringListStorePort> {
    if options.ephemeral {
        info!("Using in-memory storage");
        Arc::new(InMemoryStringListStore::new())
    } else {
        info!(path = %settings.store_path.display(), "Using file storage");
        Arc::new(FileStringListStore::new(settings.store_path.clone()))
    }
}

fn build_paste(options: WiringOptions) -> Arc<dyn PasteKeystrokePort> {
    if options.no_keystroke {
        Arc::new(NoopPasteKeystroke)
    } else {
        Arc::new(EnigoPasteKeystroke::new())
    }
}

/// Build the application context and load its stores.
///
/// Also returns the clipboard port so a watcher can share it.
pub async fn build_context(
    settings: &ResolvedSettings,
    options: WiringOptions,
) -> (AppContext, Arc<dyn SystemClipboardPort>) {
    let clipboard = build_clipboard();
    let deps = AppDeps {
        storage: build_storage(settings, options),
        clipboard: clipboard.clone(),
        paste: build_paste(options),
    };

    let context = AppContext::new(deps, settings.app);
    context.load().await;
    (context, clipboard)
}

/// Create the polling runtime feeding the history store and attach it.
pub fn attach_clipboard_watcher(
    context: &mut AppContext,
    clipboard: Arc<dyn SystemClipboardPort>,
    settings: &ResolvedSettings,
) {
    let handler: Arc<dyn ClipboardChangeHandler> = context.history();
    let watcher = Arc::new(ClipboardWatcher::new(clipboard, handler));
    let runtime = PollingClipboardRuntime::with_interval(watcher, settings.poll_interval);
    context.attach_watcher(Arc::new(runtime));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_app::AppSettings;
    use std::time::Duration;
    use tempfile::TempDir;

    fn settings(dir: &TempDir) -> ResolvedSettings {
        ResolvedSettings {
            poll_interval: Duration::from_millis(200),
            store_path: dir.path().join("store.json"),
            app: AppSettings::default(),
        }
    }

    #[test]
    fn unavailable_clipboard_reports_reason() {
        let clipboard = UnavailableClipboard {
            reason: "no display".into(),
        };
        let err = clipboard.write_text("x").unwrap_err();
        assert!(err.to_string().contains("no display"));
        assert!(clipboard.change_count().is_err());
    }

    #[tokio::test]
    async fn ephemeral_storage_writes_nothing_to_disk() {
        let dir = TempDir::new().unwrap();
        let settings = settings(&dir);
        let storage = build_storage(
            &settings,
            WiringOptions {
                ephemeral: true,
                ..Default::default()
            },
        );

        storage
            .save(cs_core::ports::StorageKey::History, &["a".to_string()])
            .await
            .unwrap();
        assert!(!settings.store_path.exists());
    }

    #[tokio::test]
    async fn file_storage_uses_resolved_path() {
        let dir = TempDir::new().unwrap();
        let settings = settings(&dir);
        let storage = build_storage(&settings, WiringOptions::default());

        storage
            .save(cs_core::ports::StorageKey::History, &["a".to_string()])
            .await
            .unwrap();
        assert!(settings.store_path.exists());
    }
}
