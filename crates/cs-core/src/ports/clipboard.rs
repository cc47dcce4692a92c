//! Clipboard port - abstracts system clipboard access
//!
//! The core only needs three things from the OS clipboard: the change
//! counter, the current plain-text payload, and a way to replace the
//! content when the user picks an entry.

use anyhow::Result;

use crate::clipboard::{ChangeCount, ClipboardSnapshot};

/// System clipboard port.
///
/// Implementations are shared between the polling task and user commands,
/// hence `Send + Sync`.
pub trait SystemClipboardPort: Send + Sync {
    /// Current value of the OS change counter.
    fn change_count(&self) -> Result<ChangeCount>;

    /// Current plain-text payload, `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the whole clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<()>;

    /// Sample counter and text together.
    fn snapshot(&self) -> Result<ClipboardSnapshot> {
        Ok(ClipboardSnapshot {
            change_count: self.change_count()?,
            text: self.read_text()?,
        })
    }
}
