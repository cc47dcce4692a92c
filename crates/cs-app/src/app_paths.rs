use std::path::PathBuf;

use cs_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub store_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            store_path: dirs.app_data_root.join("store.json"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
