//! Process bootstrap: configuration, logging, dependency wiring and the
//! command runner.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, resolve_settings, ResolvedSettings};
pub use run::run;
pub use wiring::{attach_clipboard_watcher, build_context, WiringOptions};
