//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `cs-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `cs-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod app_dirs;
pub mod clipboard;
mod clipboard_change_handler;
pub mod errors;
mod history_observer;
mod paste;
pub mod storage;
pub mod watcher_control;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use errors::AppDirsError;
pub use history_observer::HistoryObserverPort;
pub use paste::PasteKeystrokePort;
pub use storage::{StorageKey, StringListStorePort};
pub use watcher_control::{WatcherControlError, WatcherControlPort};
