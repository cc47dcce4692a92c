//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//! ❌ **No default value calculation**
//!
//! > **This module contains data only, no policy, no validation.**
//! > Missing values map to `0` / empty / `None`; the bootstrap layer decides
//! > what those mean.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Clipboard poll interval in milliseconds (0 when absent)
    pub poll_interval_ms: u64,

    /// Delay between writing the clipboard and sending the paste keystroke (0 when absent)
    pub paste_delay_ms: u64,

    /// Whether empty-string copies are kept out of the history (`None` when absent)
    pub ignore_empty_copies: Option<bool>,

    /// Key-value store file path (path info only, no existence check)
    pub store_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            poll_interval_ms: toml_value
                .get("watcher")
                .and_then(|w| w.get("poll_interval_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            paste_delay_ms: toml_value
                .get("paste")
                .and_then(|p| p.get("delay_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            ignore_empty_copies: toml_value
                .get("history")
                .and_then(|h| h.get("ignore_empty"))
                .and_then(|v| v.as_bool()),
            store_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("store_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    ///
    /// **Note**: This is a pure data constructor with "empty" as valid facts.
    pub fn empty() -> Self {
        Self {
            poll_interval_ms: 0,
            paste_delay_ms: 0,
            ignore_empty_copies: None,
            store_path: PathBuf::new(),
        }
    }
}
