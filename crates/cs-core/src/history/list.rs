/// Maximum number of entries kept in the clipboard history.
pub const HISTORY_CAPACITY: usize = 10;

/// What [`HistoryList::record`] did with the recorded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The text was not in the list and is now at the front.
    Inserted,
    /// The text was already present at `previous_index` and moved to the front.
    Promoted { previous_index: usize },
}

/// Ordered clipboard history.
///
/// Invariants:
/// - index 0 is the newest entry
/// - no two entries are equal
/// - `len() <= HISTORY_CAPACITY`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    entries: Vec<String>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Rebuild a list from stored entries (newest first).
    ///
    /// Stored data is not trusted to uphold the invariants: later duplicates
    /// are dropped and the tail beyond the capacity is cut.
    pub fn from_stored(stored: Vec<String>) -> Self {
        let stored_len = stored.len();
        let mut entries: Vec<String> = Vec::with_capacity(HISTORY_CAPACITY);

        for entry in stored {
            if entries.len() == HISTORY_CAPACITY {
                break;
            }
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }

        #[cfg(feature = "tracing")]
        if entries.len() != stored_len {
            tracing::debug!(
                stored = stored_len,
                kept = entries.len(),
                "Normalized stored clipboard history"
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _ = stored_len;

        Self { entries }
    }

    /// Insert `text` at the front, removing an earlier occurrence and
    /// evicting the oldest entries beyond the capacity.
    pub fn record(&mut self, text: String) -> RecordOutcome {
        let outcome = match self.entries.iter().position(|e| *e == text) {
            Some(previous_index) => {
                self.entries.remove(previous_index);
                RecordOutcome::Promoted { previous_index }
            }
            None => RecordOutcome::Inserted,
        };

        self.entries.insert(0, text);
        self.entries.truncate(HISTORY_CAPACITY);

        outcome
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(list: &mut HistoryList, items: &[&str]) {
        for item in items {
            list.record(item.to_string());
        }
    }

    #[test]
    fn record_puts_newest_first() {
        let mut list = HistoryList::new();
        record_all(&mut list, &["a", "b", "c"]);

        assert_eq!(list.entries(), &["c", "b", "a"]);
    }

    #[test]
    fn recording_same_text_twice_keeps_one_copy_at_front() {
        let mut list = HistoryList::new();
        record_all(&mut list, &["a", "x"]);

        let outcome = list.record("x".to_string());

        assert_eq!(outcome, RecordOutcome::Promoted { previous_index: 0 });
        assert_eq!(list.entries(), &["x", "a"]);
    }

    #[test]
    fn recording_existing_entry_moves_it_to_front() {
        let mut list = HistoryList::new();
        record_all(&mut list, &["a", "b", "c"]);

        let outcome = list.record("a".to_string());

        assert_eq!(outcome, RecordOutcome::Promoted { previous_index: 2 });
        assert_eq!(list.entries(), &["a", "c", "b"]);
    }

    #[test]
    fn eleventh_distinct_entry_evicts_the_oldest() {
        let mut list = HistoryList::new();
        for i in 1..=11 {
            list.record(format!("s{i}"));
        }

        let expected: Vec<String> = (2..=11).rev().map(|i| format!("s{i}")).collect();
        assert_eq!(list.len(), HISTORY_CAPACITY);
        assert_eq!(list.entries(), expected.as_slice());
        assert!(!list.contains("s1"));
    }

    #[test]
    fn long_mixed_sequence_stays_capped_and_unique() {
        let mut list = HistoryList::new();
        for i in 0..200u32 {
            // Mix of repeats and fresh values
            let value = format!("v{}", (i * 7) % 23);
            list.record(value);

            assert!(list.len() <= HISTORY_CAPACITY);
            let mut sorted = list.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len(), "duplicates after step {i}");
        }
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = HistoryList::new();
        record_all(&mut list, &["a", "b"]);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn whitespace_variants_are_distinct_entries() {
        let mut list = HistoryList::new();
        record_all(&mut list, &["a", "a ", " a"]);

        assert_eq!(list.entries(), &[" a", "a ", "a"]);
    }

    #[test]
    fn from_stored_drops_duplicates_and_truncates() {
        let mut stored: Vec<String> = vec!["a".into(), "b".into(), "a".into()];
        stored.extend((0..12).map(|i| format!("n{i}")));

        let list = HistoryList::from_stored(stored);

        assert_eq!(list.len(), HISTORY_CAPACITY);
        assert_eq!(list.get(0), Some("a"));
        assert_eq!(list.get(1), Some("b"));
        assert_eq!(list.get(2), Some("n0"));
        assert_eq!(list.get(9), Some("n7"));
    }

    #[test]
    fn from_stored_keeps_valid_list_unchanged() {
        let stored = vec!["".to_string(), "  ".to_string(), "x".to_string()];

        let list = HistoryList::from_stored(stored.clone());

        assert_eq!(list.to_vec(), stored);
    }
}
