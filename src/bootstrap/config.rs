//! # Configuration Loader
//!
//! `load_config` is pure data loading: read the TOML file and map it onto
//! the `AppConfig` DTO, accepting whatever is in the file. Defaults are
//! applied afterwards, in one place, by `resolve_settings`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use cs_app::services::HistoryPolicy;
use cs_app::usecases::DEFAULT_PASTE_DELAY;
use cs_app::{AppPaths, AppSettings};
use cs_core::config::AppConfig;
use cs_platform::runtime::clipboard::DEFAULT_POLL_INTERVAL;

/// Load configuration from a TOML file.
///
/// **No validation is performed**: missing sections map to empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the configuration source.
///
/// An explicit path must load. Without one, `<data dir>/config.toml` is
/// used when it exists, otherwise an empty config.
pub fn resolve_config(explicit: Option<&Path>, paths: &AppPaths) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if paths.config_path.is_file() => load_config(&paths.config_path),
        None => Ok(AppConfig::empty()),
    }
}

/// Settings with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub poll_interval: Duration,
    pub store_path: PathBuf,
    pub app: AppSettings,
}

/// Map the raw config onto runtime settings. `0` and empty values mean
/// "use the default".
pub fn resolve_settings(config: &AppConfig, paths: &AppPaths) -> ResolvedSettings {
    let poll_interval = match config.poll_interval_ms {
        0 => DEFAULT_POLL_INTERVAL,
        ms => Duration::from_millis(ms),
    };
    let paste_delay = match config.paste_delay_ms {
        0 => DEFAULT_PASTE_DELAY,
        ms => Duration::from_millis(ms),
    };
    let store_path = if config.store_path.as_os_str().is_empty() {
        paths.store_path.clone()
    } else {
        config.store_path.clone()
    };
    let history_policy = HistoryPolicy {
        ignore_empty: config
            .ignore_empty_copies
            .unwrap_or(HistoryPolicy::default().ignore_empty),
    };

    ResolvedSettings {
        poll_interval,
        store_path,
        app: AppSettings {
            paste_delay,
            history_policy,
        },
    }
}
