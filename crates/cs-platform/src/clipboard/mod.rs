//! System clipboard adapters.

mod common;
pub mod platform;

pub use common::CommonClipboardImpl;
pub use platform::{FingerprintClipboard, FingerprintCounter, LocalClipboard};
