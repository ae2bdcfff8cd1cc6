//! Base directory and search path resolution

use crate::defaults::{DefaultDirs, Native, LIST_SEPARATOR};
use crate::error::{Result, XdgError};
use crate::expand::expand;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One of the XDG base directory categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Non-essential, regenerable data
    Cache,
    /// Configuration files
    Config,
    /// Data files
    Data,
    /// State that should survive restarts but is not worth backing up
    State,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Cache,
        Category::Config,
        Category::Data,
        Category::State,
    ];

    /// Environment variable naming the home directory of this category
    pub fn home_var(self) -> &'static str {
        match self {
            Category::Cache => "XDG_CACHE_HOME",
            Category::Config => "XDG_CONFIG_HOME",
            Category::Data => "XDG_DATA_HOME",
            Category::State => "XDG_STATE_HOME",
        }
    }

    /// Environment variable listing the search path, for categories that have one
    pub fn dirs_var(self) -> Option<&'static str> {
        match self {
            Category::Config => Some("XDG_CONFIG_DIRS"),
            Category::Data => Some("XDG_DATA_DIRS"),
            Category::Cache | Category::State => None,
        }
    }

    /// Absolute home directory of this category
    pub fn home(self) -> Result<PathBuf> {
        resolve_home(self.home_var(), || match self {
            Category::Cache => Native.cache_home(),
            Category::Config => Native.config_home(),
            Category::Data => Native.data_home(),
            Category::State => Native.state_home(),
        })
    }

    /// Existing search path directories of this category, in preference
    /// order. Always empty for [`Category::Cache`] and [`Category::State`].
    pub fn dirs(self) -> Result<Vec<PathBuf>> {
        match self {
            Category::Config => resolve_dirs("XDG_CONFIG_DIRS", || Native.config_dirs()),
            Category::Data => resolve_dirs("XDG_DATA_DIRS", || Native.data_dirs()),
            Category::Cache | Category::State => Ok(Vec::new()),
        }
    }
}

/// Absolute path of the base directory for user-specific non-essential
/// (cached) data, from `XDG_CACHE_HOME` or the platform default.
///
/// Applications should create their own subdirectory within it, for example
/// with [`create_dir`](crate::create_dir).
pub fn cache_home() -> Result<PathBuf> {
    Category::Cache.home()
}

/// Absolute path of the base directory for user-specific configuration
/// files, from `XDG_CONFIG_HOME` or the platform default.
///
/// # Examples
/// ```no_run
/// let config = xdg_basedir::config_home()?;
/// assert!(config.is_absolute());
/// # Ok::<(), xdg_basedir::XdgError>(())
/// ```
pub fn config_home() -> Result<PathBuf> {
    Category::Config.home()
}

/// Preference-ordered directories searched for configuration files after
/// [`config_home`], from `XDG_CONFIG_DIRS` or the platform default.
pub fn config_dirs() -> Result<Vec<PathBuf>> {
    Category::Config.dirs()
}

/// Absolute path of the base directory for user-specific data files, from
/// `XDG_DATA_HOME` or the platform default.
pub fn data_home() -> Result<PathBuf> {
    Category::Data.home()
}

/// Preference-ordered directories searched for data files after
/// [`data_home`], from `XDG_DATA_DIRS` or the platform default.
pub fn data_dirs() -> Result<Vec<PathBuf>> {
    Category::Data.dirs()
}

/// Absolute path of the base directory for user-specific state, from
/// `XDG_STATE_HOME` or the platform default.
///
/// State persists between restarts but is not important or portable enough
/// to live in [`data_home`]: history, recently used files, window layout,
/// undo history and the like.
pub fn state_home() -> Result<PathBuf> {
    Category::State.home()
}

pub(crate) fn resolve_home<F>(var: &'static str, default: F) -> Result<PathBuf>
where
    F: FnOnce() -> PathBuf,
{
    let expanded = expand(&read_var(var));
    let path = if expanded.is_empty() {
        let path = default();
        log::debug!("{var} is not set, using default {path:?}");
        path
    } else {
        PathBuf::from(expanded)
    };

    if path.is_absolute() {
        Ok(path)
    } else {
        Err(XdgError::RelativePath { var, path })
    }
}

pub(crate) fn resolve_dirs<F>(var: &'static str, default: F) -> Result<Vec<PathBuf>>
where
    F: FnOnce() -> String,
{
    let mut raw = read_var(var);
    if raw.is_empty() {
        raw = default();
        log::debug!("{var} is not set, using default {raw:?}");
    }

    Ok(raw
        .split(LIST_SEPARATOR)
        .map(expand)
        .map(PathBuf::from)
        .filter(|path| {
            let keep = is_absolute_dir(path);
            if !keep {
                log::trace!("dropping {path:?} from {var}: not an existing absolute directory");
            }
            keep
        })
        .collect())
}

fn read_var(var: &str) -> String {
    env::var_os(var)
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_absolute_dir(path: &Path) -> bool {
    path.is_absolute() && fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
