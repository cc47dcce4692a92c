//! Clipboard watcher runtime module
//!
//! This module turns OS clipboard changes into `ClipboardChangeHandler`
//! callbacks by sampling the clipboard change counter on a timer.
//!
//! ## Responsibility
//!
//! The clipboard watcher is responsible for:
//!
//! - Periodically reading the change counter via `SystemClipboardPort`
//! - Reading the text payload only when the counter moved
//! - Handing each new text copy to the registered handler
//!
//! The watcher **does not**:
//!
//! - Decide what to keep (dedup, capacity and persistence live in the app layer)
//! - Write to the clipboard
//!
//! ## Architecture Position
//!
//! ```text
//! Local Clipboard
//!      ↓
//! SystemClipboardPort
//!      ↓
//! ClipboardWatcher   (this module)
//!      ↓
//! ClipboardChangeHandler
//!      ↓
//! HistoryStore
//! ```
//!
//! ## Change Detection
//!
//! A change is a difference between the current counter and the last one
//! observed. Content already on the clipboard when the watcher is built is
//! taken as the baseline and never reported. Non-text changes advance the
//! baseline without a callback.

mod runtime;
mod watcher;

pub use runtime::{PollingClipboardRuntime, DEFAULT_POLL_INTERVAL};
pub use watcher::{ClipboardWatcher, PollOutcome};
