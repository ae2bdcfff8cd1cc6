//! macOS defaults, following Apple's file system programming guide

use super::{join_list, DefaultDirs, Native};
use crate::home::home_dir;
use std::path::PathBuf;

fn application_support() -> PathBuf {
    home_dir().join("Library/Application Support")
}

impl DefaultDirs for Native {
    fn cache_home(&self) -> PathBuf {
        home_dir().join("Library/Caches")
    }

    fn config_home(&self) -> PathBuf {
        application_support()
    }

    fn config_dirs(&self) -> String {
        let home = home_dir();
        join_list([
            home.join("Library/Preferences"),
            PathBuf::from("/Library/Application Support"),
            PathBuf::from("/Library/Preferences"),
            home.join(".config"),
            PathBuf::from("/etc/xdg"),
        ])
    }

    fn data_home(&self) -> PathBuf {
        application_support()
    }

    fn data_dirs(&self) -> String {
        join_list([
            PathBuf::from("/Library/Application Support"),
            home_dir().join(".local/share"),
            PathBuf::from("/usr/local/share"),
            PathBuf::from("/usr/share"),
        ])
    }

    fn state_home(&self) -> PathBuf {
        application_support()
    }
}
