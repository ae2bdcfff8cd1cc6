//! Platform default base directories
//!
//! Used when the corresponding `XDG_*` variable is unset or empty. Exactly one
//! [`Native`] implementation is compiled for the target platform.

use std::path::PathBuf;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod macos;
#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
mod unix;
#[cfg(windows)]
mod windows;

/// Separator between entries of `XDG_CONFIG_DIRS` and `XDG_DATA_DIRS`
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';
/// Separator between entries of `XDG_CONFIG_DIRS` and `XDG_DATA_DIRS`
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// Fallback locations for each category
///
/// The `*_dirs` methods return a [`LIST_SEPARATOR`]-joined list, in the same
/// shape as the environment variable they stand in for.
pub trait DefaultDirs {
    fn cache_home(&self) -> PathBuf;
    fn config_home(&self) -> PathBuf;
    fn config_dirs(&self) -> String;
    fn data_home(&self) -> PathBuf;
    fn data_dirs(&self) -> String;
    fn state_home(&self) -> PathBuf;
}

/// Defaults of the platform this crate was compiled for
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

pub(crate) fn join_list<I, P>(paths: I) -> String
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(|p| p.into().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}
