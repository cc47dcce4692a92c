use thiserror::Error;

/// Number of pinned snippet slots.
pub const PINNED_SLOT_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PinnedClipError {
    #[error("pinned slot {slot} is out of range (0..{PINNED_SLOT_COUNT})")]
    SlotOutOfRange { slot: usize },
}

/// User-authored snippets kept independently of the clipboard history.
///
/// Always exactly [`PINNED_SLOT_COUNT`] slots. An empty string marks an
/// unset slot. Content is never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedClips {
    slots: [String; PINNED_SLOT_COUNT],
}

impl PinnedClips {
    pub fn new(slots: [String; PINNED_SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Rebuild from stored values, padding missing slots with empty strings
    /// and ignoring extra values.
    pub fn from_stored(stored: Vec<String>) -> Self {
        let mut slots: [String; PINNED_SLOT_COUNT] = Default::default();
        for (slot, value) in slots.iter_mut().zip(stored) {
            *slot = value;
        }
        Self { slots }
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn set(&mut self, slot: usize, text: String) -> Result<(), PinnedClipError> {
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(PinnedClipError::SlotOutOfRange { slot })?;
        *target = text;
        Ok(())
    }

    pub fn replace_all(&mut self, slots: [String; PINNED_SLOT_COUNT]) {
        self.slots = slots;
    }

    pub fn is_set(&self, slot: usize) -> bool {
        self.get(slot).is_some_and(|text| !text.is_empty())
    }

    /// Non-empty slots with their positions.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(slot, text)| (slot, text.as_str()))
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.slots.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_three_unset_slots() {
        let pinned = PinnedClips::default();

        assert_eq!(pinned.slots().len(), PINNED_SLOT_COUNT);
        assert!(pinned.slots().iter().all(String::is_empty));
        assert_eq!(pinned.iter_set().count(), 0);
    }

    #[test]
    fn set_replaces_by_position() {
        let mut pinned = PinnedClips::default();

        pinned.set(1, "signature".to_string()).unwrap();

        assert_eq!(pinned.to_vec(), vec!["", "signature", ""]);
        assert!(pinned.is_set(1));
        assert!(!pinned.is_set(0));
    }

    #[test]
    fn set_out_of_range_is_rejected() {
        let mut pinned = PinnedClips::default();

        let err = pinned.set(3, "nope".to_string()).unwrap_err();

        assert_eq!(err, PinnedClipError::SlotOutOfRange { slot: 3 });
        assert_eq!(pinned, PinnedClips::default());
    }

    #[test]
    fn setting_empty_text_unsets_the_slot() {
        let mut pinned = PinnedClips::from_stored(vec!["a".into(), "b".into(), "c".into()]);

        pinned.set(0, String::new()).unwrap();

        assert!(!pinned.is_set(0));
        assert_eq!(pinned.iter_set().collect::<Vec<_>>(), vec![(1, "b"), (2, "c")]);
    }

    #[test]
    fn from_stored_pads_and_truncates() {
        let short = PinnedClips::from_stored(vec!["only".into()]);
        assert_eq!(short.to_vec(), vec!["only", "", ""]);

        let long = PinnedClips::from_stored(vec![
            "1".into(),
            "2".into(),
            "3".into(),
            "4".into(),
        ]);
        assert_eq!(long.to_vec(), vec!["1", "2", "3"]);
    }

    #[test]
    fn replace_all_overwrites_every_slot() {
        let mut pinned = PinnedClips::from_stored(vec!["a".into(), "b".into(), "c".into()]);

        pinned.replace_all(["x".into(), String::new(), "z".into()]);

        assert_eq!(pinned.to_vec(), vec!["x", "", "z"]);
    }
}
