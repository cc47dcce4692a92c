//! Menu projection of the history and the pinned clips.
//!
//! The model is presentation-neutral: a status-bar menu, a CLI listing or a
//! test can render it. Items are selected by index or slot, never by title.

use cs_core::history::PinnedClips;

pub const MENU_TITLE_MAX_CHARS: usize = 48;

const EMPTY_HISTORY_TITLE: &str = "No copies yet";
const BLANK_TITLE: &str = "(blank)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Disabled item shown when the history is empty.
    Placeholder { title: String },
    HistoryEntry { index: usize, title: String },
    PinnedClip { slot: usize, title: String },
    Separator,
    ClearAll,
    Quit { key_equivalent: char },
}

impl MenuItem {
    /// Text shown for the item; `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuItem::Placeholder { title }
            | MenuItem::HistoryEntry { title, .. }
            | MenuItem::PinnedClip { title, .. } => Some(title),
            MenuItem::Separator => None,
            MenuItem::ClearAll => Some("Clear All"),
            MenuItem::Quit { .. } => Some("Quit"),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, MenuItem::Placeholder { .. } | MenuItem::Separator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuModel {
    pub items: Vec<MenuItem>,
}

impl MenuModel {
    pub fn build(history: &[String], pinned: &PinnedClips) -> Self {
        let mut items = Vec::with_capacity(history.len() + 6);

        if history.is_empty() {
            items.push(MenuItem::Placeholder {
                title: EMPTY_HISTORY_TITLE.to_string(),
            });
        } else {
            items.extend(
                history
                    .iter()
                    .enumerate()
                    .map(|(index, text)| MenuItem::HistoryEntry {
                        index,
                        title: menu_title(text),
                    }),
            );
        }

        let mut pinned_items = pinned
            .iter_set()
            .map(|(slot, text)| MenuItem::PinnedClip {
                slot,
                title: menu_title(text),
            })
            .peekable();
        if pinned_items.peek().is_some() {
            items.push(MenuItem::Separator);
            items.extend(pinned_items);
        }

        items.push(MenuItem::Separator);
        items.push(MenuItem::ClearAll);
        items.push(MenuItem::Quit { key_equivalent: 'q' });

        Self { items }
    }

    /// Renders one line per item, in menu order.
    pub fn render_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match item {
                MenuItem::Separator => "----".to_string(),
                MenuItem::HistoryEntry { index, title } => format!("{index:>2}  {title}"),
                MenuItem::PinnedClip { slot, title } => format!("p{slot}  {title}"),
                MenuItem::Quit { key_equivalent } => format!("Quit ({key_equivalent})"),
                other => other.label().unwrap_or_default().to_string(),
            })
            .collect()
    }
}

/// First line of `text`, trimmed and cut to [`MENU_TITLE_MAX_CHARS`] characters.
pub fn menu_title(text: &str) -> String {
    let first_line = text.trim().lines().next().unwrap_or_default().trim();
    if first_line.is_empty() {
        return BLANK_TITLE.to_string();
    }

    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(MENU_TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
