use anyhow::Result;

/// Synthetic paste keystroke (Cmd+V / Ctrl+V) into the focused application.
///
/// Usually requires an OS permission (accessibility on macOS); failures are
/// reported to the caller, which decides how loudly to degrade.
pub trait PasteKeystrokePort: Send + Sync {
    fn send_paste(&self) -> Result<()>;
}
