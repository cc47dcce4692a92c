use std::fmt;

/// Monotonic clipboard change counter owned by the OS.
///
/// Every replacement of the clipboard content bumps the counter, so comparing
/// two samples tells whether anything was copied in between without reading
/// the payload itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChangeCount(pub u64);

impl ChangeCount {
    pub const ZERO: ChangeCount = ChangeCount(0);

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn next(self) -> ChangeCount {
        ChangeCount(self.0.wrapping_add(1))
    }
}

impl From<u64> for ChangeCount {
    fn from(value: u64) -> Self {
        ChangeCount(value)
    }
}

impl fmt::Display for ChangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point-in-time view of the system clipboard.
///
/// Ephemeral: never persisted. `text` is `None` when the clipboard holds
/// something other than plain text (an image, files, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub change_count: ChangeCount,
    pub text: Option<String>,
}

impl ClipboardSnapshot {
    pub fn text(change_count: impl Into<ChangeCount>, text: impl Into<String>) -> Self {
        Self {
            change_count: change_count.into(),
            text: Some(text.into()),
        }
    }

    pub fn non_text(change_count: impl Into<ChangeCount>) -> Self {
        Self {
            change_count: change_count.into(),
            text: None,
        }
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_count_next_increments() {
        assert_eq!(ChangeCount(5).next(), ChangeCount(6));
        assert_eq!(ChangeCount(u64::MAX).next(), ChangeCount::ZERO);
    }

    #[test]
    fn snapshot_constructors() {
        let snapshot = ClipboardSnapshot::text(6u64, "Y");
        assert!(snapshot.has_text());
        assert_eq!(snapshot.change_count, ChangeCount(6));

        let image = ClipboardSnapshot::non_text(7u64);
        assert!(!image.has_text());
        assert_eq!(image.text, None);
    }
}
