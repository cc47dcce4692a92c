use std::sync::Arc;

use tracing::{info_span, Instrument};

use cs_core::history::PinnedClips;

use crate::services::PinnedClipsStore;

pub struct ListPinnedClips {
    pinned: Arc<PinnedClipsStore>,
}

impl ListPinnedClips {
    pub fn new(pinned: Arc<PinnedClipsStore>) -> Self {
        Self { pinned }
    }

    pub async fn execute(&self) -> PinnedClips {
        self.pinned
            .pinned()
            .instrument(info_span!("usecase.list_pinned_clips.execute"))
            .await
    }
}
