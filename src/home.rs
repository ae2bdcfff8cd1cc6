//! Process home directory lookup

use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

#[cfg(windows)]
const HOME_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_VAR: &str = "HOME";

static CACHED_HOME_DIR: RwLock<Option<PathBuf>> = RwLock::new(None);

/// The current user's home directory
///
/// Read from `HOME` (`USERPROFILE` on Windows), falling back to the
/// platform's account database. The first successful lookup is cached for the
/// rest of the process, so later changes to the variable are not observed.
/// Returns an empty path if the home directory cannot be determined; that
/// outcome is not cached.
pub fn home_dir() -> PathBuf {
    if let Some(home) = CACHED_HOME_DIR
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .as_ref()
    {
        return home.clone();
    }

    let Some(found) = lookup() else {
        log::debug!("home directory could not be determined");
        return PathBuf::new();
    };

    let mut cached = CACHED_HOME_DIR
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    cached.get_or_insert(found).clone()
}

fn lookup() -> Option<PathBuf> {
    env::var_os(HOME_VAR)
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .filter(|home| !home.as_os_str().is_empty())
}

#[cfg(test)]
pub(crate) fn reset_home_dir_cache() {
    *CACHED_HOME_DIR
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
}
