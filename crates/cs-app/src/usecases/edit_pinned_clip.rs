use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cs_core::history::{PinnedClipError, PINNED_SLOT_COUNT};

use crate::services::PinnedClipsStore;

/// One of the two edit forms the pinned clips support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinnedEdit {
    /// Replace a single slot. Empty text unsets it.
    Slot { slot: usize, text: String },
    /// Replace every slot at once.
    All([String; PINNED_SLOT_COUNT]),
}

pub struct EditPinnedClip {
    pinned: Arc<PinnedClipsStore>,
}

impl EditPinnedClip {
    pub fn new(pinned: Arc<PinnedClipsStore>) -> Self {
        Self { pinned }
    }

    pub async fn execute(&self, edit: PinnedEdit) -> Result<(), PinnedClipError> {
        let span = info_span!("usecase.edit_pinned_clip.execute");

        async {
            match edit {
                PinnedEdit::Slot { slot, text } => {
                    self.pinned.edit_slot(slot, text).await?;
                    info!(slot, "Pinned clip updated");
                }
                PinnedEdit::All(slots) => {
                    self.pinned.replace_all(slots).await;
                    info!("All pinned clips updated");
                }
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}
