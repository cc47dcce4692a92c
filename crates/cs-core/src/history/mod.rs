//! Clipboard history domain.
//!
//! - [`HistoryList`]: most-recent-first, de-duplicated, capped list of copied text
//! - [`PinnedClips`]: fixed set of user-authored snippets, independent of the history

mod list;
mod pinned;

pub use list::{HistoryList, RecordOutcome, HISTORY_CAPACITY};
pub use pinned::{PinnedClipError, PinnedClips, PINNED_SLOT_COUNT};
