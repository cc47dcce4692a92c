//! Platform adapters implementing `cs-core` ports that are not clipboard I/O.

mod paste;

pub use paste::{EnigoPasteKeystroke, NoopPasteKeystroke};
