//! # cs-platform
//!
//! Platform-specific implementations for Clipshelf.
//!
//! This crate contains infrastructure implementations that interact with
//! the operating system: the system clipboard, the clipboard polling
//! runtime, synthetic keyboard input and per-user directories.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod runtime;
