//! Windows defaults, based on the user's known folders

use super::{join_list, DefaultDirs, Native};
use crate::expand::expand;
use crate::home::home_dir;
use std::env;
use std::path::PathBuf;

/// A known folder, or the expanded value of `var` when the shell lookup fails.
fn known_folder(folder: Option<PathBuf>, var: &str) -> Option<PathBuf> {
    folder
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| env_path(var))
}

fn env_path(var: &str) -> Option<PathBuf> {
    let value = expand(&env::var(var).unwrap_or_default());
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn local_app_data() -> PathBuf {
    known_folder(dirs::data_local_dir(), "LOCALAPPDATA")
        .unwrap_or_else(|| home_dir().join("AppData").join("Local"))
}

fn roaming_app_data() -> PathBuf {
    known_folder(dirs::data_dir(), "APPDATA")
        .unwrap_or_else(|| home_dir().join("AppData").join("Roaming"))
}

fn program_data() -> PathBuf {
    env_path("ALLUSERSPROFILE")
        .or_else(|| env_path("ProgramData"))
        .unwrap_or_else(|| PathBuf::from(format!("{}\\ProgramData", system_drive())))
}

fn system_drive() -> String {
    env::var("SystemDrive")
        .ok()
        .filter(|drive| !drive.is_empty())
        .unwrap_or_else(|| "C:".to_string())
}

impl DefaultDirs for Native {
    fn cache_home(&self) -> PathBuf {
        local_app_data().join("Cache")
    }

    fn config_home(&self) -> PathBuf {
        local_app_data()
    }

    fn config_dirs(&self) -> String {
        join_list([program_data(), roaming_app_data()])
    }

    fn data_home(&self) -> PathBuf {
        local_app_data()
    }

    fn data_dirs(&self) -> String {
        join_list([roaming_app_data(), program_data()])
    }

    fn state_home(&self) -> PathBuf {
        local_app_data()
    }
}
