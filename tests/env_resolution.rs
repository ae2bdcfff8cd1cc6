//! Resolution of base directories from the process environment

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;
use xdg_basedir::*;

fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets environment variables for the lifetime of the guard and restores the
/// previous values on drop. Hold [`env_lock`] while a guard is alive.
struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    fn new() -> Self {
        Self { saved: Vec::new() }
    }

    fn set(&mut self, key: &'static str, value: impl AsRef<OsStr>) -> &mut Self {
        self.save(key);
        env::set_var(key, value);
        self
    }

    fn remove(&mut self, key: &'static str) -> &mut Self {
        self.save(key);
        env::remove_var(key);
        self
    }

    fn save(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(k, _)| *k == key) {
            self.saved.push((key, env::var_os(key)));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

fn search_list(paths: &[&Path]) -> String {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}

#[test]
fn config_home_defaults_to_platform() {
    let _lock = env_lock();
    let mut env = EnvGuard::new();
    env.remove("XDG_CONFIG_HOME");

    assert_eq!(config_home().unwrap(), Native.config_home());

    #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
    assert_eq!(config_home().unwrap(), home_dir().join(".config"));
}

#[test]
fn relative_config_home_is_an_error() {
    let _lock = env_lock();
    let mut env = EnvGuard::new();
    env.set("XDG_CONFIG_HOME", "relative/path");

    let err = config_home().unwrap_err();
    assert!(matches!(err, XdgError::RelativePath { var: "XDG_CONFIG_HOME", .. }));
    assert!(!err.is_validation());
}

#[test]
fn data_dirs_keep_existing_absolute_dirs_in_order() {
    let _lock = env_lock();
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let missing = a.path().join("missing");
    let mut env = EnvGuard::new();
    env.set(
        "XDG_DATA_DIRS",
        search_list(&[b.path(), &missing, Path::new("relative/dir"), a.path()]),
    );

    assert_eq!(
        data_dirs().unwrap(),
        vec![b.path().to_path_buf(), a.path().to_path_buf()]
    );
}

#[test]
fn find_data_file_in_second_of_three_dirs() {
    let _lock = env_lock();
    let home = TempDir::new().unwrap();
    let dirs: Vec<TempDir> = (0..3).map(|_| TempDir::new().unwrap()).collect();
    let paths: Vec<&Path> = dirs.iter().map(TempDir::path).collect();
    let mut env = EnvGuard::new();
    env.set("XDG_DATA_HOME", home.path())
        .set("XDG_DATA_DIRS", search_list(&paths));

    assert_eq!(find_data_file("my_app", "data_file").unwrap(), None);

    let expected = create_file(|| Ok(paths[1].to_path_buf()), "my_app", "data_file").unwrap();
    assert_eq!(find_data_file("my_app", "data_file").unwrap(), Some(expected));
}

#[test]
fn create_through_env_resolved_home() {
    let _lock = env_lock();
    let state = TempDir::new().unwrap();
    let mut env = EnvGuard::new();
    env.set("XDG_STATE_HOME", state.path());

    let history = create_file_path(state_home, "my_app", "history/commands").unwrap();
    assert_eq!(history, state.path().join("my_app/history/commands"));
    assert_eq!(
        find_state_file("my_app", "history/commands").unwrap(),
        Some(history)
    );
}

#[test]
fn category_table() {
    assert_eq!(Category::Cache.home_var(), "XDG_CACHE_HOME");
    assert_eq!(Category::Config.dirs_var(), Some("XDG_CONFIG_DIRS"));
    assert_eq!(Category::Data.dirs_var(), Some("XDG_DATA_DIRS"));
    assert_eq!(Category::State.dirs_var(), None);
}

#[test]
fn every_home_is_absolute_when_set() {
    let _lock = env_lock();
    let temp_dir = TempDir::new().unwrap();
    let mut env = EnvGuard::new();
    for category in Category::ALL {
        env.set(category.home_var(), temp_dir.path());
    }

    let homes: Vec<PathBuf> = vec![
        cache_home().unwrap(),
        config_home().unwrap(),
        data_home().unwrap(),
        state_home().unwrap(),
    ];
    assert!(homes.iter().all(|h| h == temp_dir.path()));
}
