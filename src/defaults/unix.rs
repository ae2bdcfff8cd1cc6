//! Unix-like defaults from the XDG Base Directory convention

use super::{join_list, DefaultDirs, Native};
use crate::home::home_dir;
use std::path::PathBuf;

impl DefaultDirs for Native {
    fn cache_home(&self) -> PathBuf {
        home_dir().join(".cache")
    }

    fn config_home(&self) -> PathBuf {
        home_dir().join(".config")
    }

    fn config_dirs(&self) -> String {
        join_list(["/etc/xdg"])
    }

    fn data_home(&self) -> PathBuf {
        home_dir().join(".local/share")
    }

    fn data_dirs(&self) -> String {
        join_list(["/usr/local/share", "/usr/share"])
    }

    fn state_home(&self) -> PathBuf {
        home_dir().join(".local/state")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::env_lock;

    #[test]
    fn test_home_relative_defaults() {
        let _lock = env_lock();
        let home = home_dir();

        assert_eq!(Native.cache_home(), home.join(".cache"));
        assert_eq!(Native.config_home(), home.join(".config"));
        assert_eq!(Native.data_home(), home.join(".local/share"));
        assert_eq!(Native.state_home(), home.join(".local/state"));
    }

    #[test]
    fn test_search_path_defaults() {
        assert_eq!(Native.config_dirs(), "/etc/xdg");
        assert_eq!(Native.data_dirs(), "/usr/local/share:/usr/share");
    }
}
