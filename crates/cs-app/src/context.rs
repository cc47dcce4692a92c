//! # Application Context
//!
//! [`AppDeps`] groups the ports the bootstrap layer constructs; it is not a
//! builder and has no defaults. [`AppContext`] owns the stateful services
//! built on top of them and hands out use cases through [`UseCases`].

use std::sync::Arc;
use std::time::Duration;

use cs_core::ports::{
    PasteKeystrokePort, StringListStorePort, SystemClipboardPort, WatcherControlPort,
};

use crate::services::{HistoryPolicy, HistoryStore, PinnedClipsStore};
use crate::usecases::{
    BuildMenu, ClearHistory, CopyHistoryEntry, EditPinnedClip, ListHistory, ListPinnedClips,
    PasteClip, StartClipboardWatcher, StopClipboardWatcher, DEFAULT_PASTE_DELAY,
};

/// Resolved runtime settings (defaults already applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub paste_delay: Duration,
    pub history_policy: HistoryPolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            paste_delay: DEFAULT_PASTE_DELAY,
            history_policy: HistoryPolicy::default(),
        }
    }
}

/// Port grouping for [`AppContext::new`]. All fields are required.
pub struct AppDeps {
    pub storage: Arc<dyn StringListStorePort>,
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub paste: Arc<dyn PasteKeystrokePort>,
}

pub struct AppContext {
    history: Arc<HistoryStore>,
    pinned: Arc<PinnedClipsStore>,
    clipboard: Arc<dyn SystemClipboardPort>,
    paste: Arc<dyn PasteKeystrokePort>,
    watcher_control: Option<Arc<dyn WatcherControlPort>>,
    settings: AppSettings,
}

impl AppContext {
    pub fn new(deps: AppDeps, settings: AppSettings) -> Self {
        Self {
            history: Arc::new(HistoryStore::new(
                deps.storage.clone(),
                settings.history_policy,
            )),
            pinned: Arc::new(PinnedClipsStore::new(deps.storage)),
            clipboard: deps.clipboard,
            paste: deps.paste,
            watcher_control: None,
            settings,
        }
    }

    /// The watcher needs the history store as its change handler, so it is
    /// attached after construction.
    pub fn attach_watcher(&mut self, watcher_control: Arc<dyn WatcherControlPort>) {
        self.watcher_control = Some(watcher_control);
    }

    /// Load history and pinned clips from storage.
    pub async fn load(&self) {
        self.history.load().await;
        self.pinned.load().await;
    }

    pub fn history(&self) -> Arc<HistoryStore> {
        self.history.clone()
    }

    pub fn pinned(&self) -> Arc<PinnedClipsStore> {
        self.pinned.clone()
    }

    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { context: self }
    }
}

/// Use case accessor borrowed from an [`AppContext`].
pub struct UseCases<'a> {
    context: &'a AppContext,
}

impl<'a> UseCases<'a> {
    /// `None` until a watcher was attached.
    pub fn start_clipboard_watcher(&self) -> Option<StartClipboardWatcher> {
        self.context
            .watcher_control
            .clone()
            .map(StartClipboardWatcher::new)
    }

    pub fn stop_clipboard_watcher(&self) -> Option<StopClipboardWatcher> {
        self.context
            .watcher_control
            .clone()
            .map(StopClipboardWatcher::new)
    }

    pub fn list_history(&self) -> ListHistory {
        ListHistory::new(self.context.history.clone())
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.context.history.clone())
    }

    pub fn copy_clip(&self) -> CopyHistoryEntry {
        CopyHistoryEntry::new(
            self.context.history.clone(),
            self.context.pinned.clone(),
            self.context.clipboard.clone(),
        )
    }

    pub fn paste_clip(&self) -> PasteClip {
        PasteClip::new(
            self.copy_clip(),
            self.context.paste.clone(),
            self.context.settings.paste_delay,
        )
    }

    pub fn edit_pinned_clip(&self) -> EditPinnedClip {
        EditPinnedClip::new(self.context.pinned.clone())
    }

    pub fn list_pinned_clips(&self) -> ListPinnedClips {
        ListPinnedClips::new(self.context.pinned.clone())
    }

    pub fn build_menu(&self) -> BuildMenu {
        BuildMenu::new(self.context.history.clone(), self.context.pinned.clone())
    }
}
