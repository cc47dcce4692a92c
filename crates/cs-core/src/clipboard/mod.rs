mod snapshot;

pub use snapshot::{ChangeCount, ClipboardSnapshot};
