//! # cs-core
//!
//! Core domain models and business logic for Clipshelf.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod history;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ChangeCount, ClipboardSnapshot};
pub use config::AppConfig;
pub use history::{HistoryList, PinnedClipError, PinnedClips, HISTORY_CAPACITY, PINNED_SLOT_COUNT};
