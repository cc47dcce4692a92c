//! Clipboard change handler port
//!
//! This port defines the callback interface for handling clipboard change events
//! from the platform layer. It follows the Dependency Inversion Principle:
//! - Platform layer (low-level) depends on this abstraction
//! - App layer (high-level) implements this interface

use anyhow::Result;

/// Callback handler for new text copies.
///
/// The platform layer calls this once per text-bearing clipboard change.
/// It may be invoked from the polling task, so implementations must be
/// `Send + Sync`.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// Called with the clipboard text after a change was observed.
    async fn on_text_copied(&self, text: String) -> Result<()>;
}
