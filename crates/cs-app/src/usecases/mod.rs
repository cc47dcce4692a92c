//! Application use cases.
//!
//! Each use case is constructed from the ports or services it needs and
//! exposes a single `execute` method.

pub mod build_menu;
pub mod clear_history;
pub mod copy_clip;
pub mod edit_pinned_clip;
pub mod list_history;
pub mod list_pinned_clips;
pub mod paste_clip;
pub mod start_clipboard_watcher;
pub mod stop_clipboard_watcher;

pub use build_menu::BuildMenu;
pub use clear_history::ClearHistory;
pub use copy_clip::{ClipSource, CopyClipError, CopyHistoryEntry};
pub use edit_pinned_clip::{EditPinnedClip, PinnedEdit};
pub use list_history::ListHistory;
pub use list_pinned_clips::ListPinnedClips;
pub use paste_clip::{PasteClip, PasteClipError, DEFAULT_PASTE_DELAY};
pub use start_clipboard_watcher::{ClipboardWatcherError, StartClipboardWatcher};
pub use stop_clipboard_watcher::StopClipboardWatcher;
