use std::path::PathBuf;

use cs_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "clipshelf";
const PROFILE_ENV: &str = "CLIPSHELF_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Creates an adapter backed by the system local data directory.
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Creates an adapter that resolves everything under `base` instead of
    /// the system local data directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use cs_platform::app_dirs::DirsAppDirsAdapter;
    ///
    /// let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
    /// ```
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    /// Returns the override when set, otherwise `dirs::data_local_dir()`.
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    /// `app_data_root` is the base local data directory joined with
    /// `clipshelf` (or `clipshelf-<profile>`).
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}
