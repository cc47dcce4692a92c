//! Clipshelf: a clipboard history shelf.
//!
//! The binary parses the CLI, sets up logging and hands over to
//! [`bootstrap::run`].

pub mod bootstrap;
pub mod cli;

pub use cli::Cli;
