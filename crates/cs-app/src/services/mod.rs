//! Stateful application services shared by the use cases and the poller.

mod history_store;
mod pinned_clips_store;

pub use history_store::{HistoryPolicy, HistoryStore, SubscriptionId};
pub use pinned_clips_store::PinnedClipsStore;
