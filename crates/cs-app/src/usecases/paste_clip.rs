//! Copy a clip and paste it into the previously focused application.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, warn, Instrument};

use cs_core::ports::PasteKeystrokePort;

use super::{ClipSource, CopyClipError, CopyHistoryEntry};

/// Time given to the OS to hand focus back before the keystroke is sent.
pub const DEFAULT_PASTE_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, thiserror::Error)]
pub enum PasteClipError {
    #[error(transparent)]
    Copy(#[from] CopyClipError),

    /// The clip is on the clipboard but the keystroke could not be sent.
    #[error("Failed to send paste keystroke: {0}")]
    KeystrokeFailed(String),
}

pub struct PasteClip {
    copy: CopyHistoryEntry,
    keystroke: Arc<dyn PasteKeystrokePort>,
    delay: Duration,
}

impl PasteClip {
    pub fn new(
        copy: CopyHistoryEntry,
        keystroke: Arc<dyn PasteKeystrokePort>,
        delay: Duration,
    ) -> Self {
        Self {
            copy,
            keystroke,
            delay,
        }
    }

    pub async fn execute(&self, source: ClipSource) -> Result<String, PasteClipError> {
        let span = info_span!("usecase.paste_clip.execute", %source, delay_ms = self.delay.as_millis() as u64);

        async {
            let text = self.copy.execute(source).await?;

            tokio::time::sleep(self.delay).await;

            if let Err(err) = self.keystroke.send_paste() {
                warn!(error = ?err, "Paste keystroke failed, clip left on clipboard");
                return Err(PasteClipError::KeystrokeFailed(err.to_string()));
            }

            info!("Pasted clip into focused application");
            Ok(text)
        }
        .instrument(span)
        .await
    }
}
