//! Lexical path normalization
//!
//! Nothing in this module touches the filesystem. Symlinks are resolved later
//! by the scoped directory handle in [`crate::root`].

use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically clean a path
///
/// Removes duplicate and trailing separators and `.` segments, and folds
/// `name/..` pairs. Leading `..` segments of a relative path are kept. The
/// empty path cleans to `.`.
///
/// # Examples
/// ```
/// # #[cfg(unix)] {
/// use xdg_basedir::clean;
/// use std::path::PathBuf;
///
/// assert_eq!(clean("a//b/./c/"), PathBuf::from("a/b/c"));
/// assert_eq!(clean("a/../../b"), PathBuf::from("../b"));
/// assert_eq!(clean(""), PathBuf::from("."));
/// # }
/// ```
pub fn clean<P: AsRef<Path>>(path: P) -> PathBuf {
    path_clean::clean(path.as_ref())
}

/// Whether a cleaned path addresses the directory it is relative to
pub(crate) fn is_current_dir(cleaned: &Path) -> bool {
    cleaned.as_os_str().is_empty() || cleaned == Path::new(".")
}

/// Clean `path` and reject it if it is absolute or climbs above its base
///
/// The error is a [`io::ErrorKind::PermissionDenied`] I/O error, matching
/// what a directory handle reports for an escaping path.
pub(crate) fn clean_relative(path: &Path) -> io::Result<PathBuf> {
    let cleaned = clean(path);
    match cleaned.components().next() {
        Some(Component::ParentDir) | Some(Component::RootDir) | Some(Component::Prefix(_)) => {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("path {path:?} escapes its base directory"),
            ))
        }
        _ => Ok(cleaned),
    }
}

/// Whether a raw path string ends with a separator, or is empty
pub(crate) fn lacks_file_name(raw: &str) -> bool {
    raw.is_empty() || raw.chars().last().is_some_and(std::path::is_separator)
}

/// Split a cleaned file path into its directory prefix and file name
pub(crate) fn split_file_path(cleaned: &Path) -> Option<(PathBuf, String)> {
    let file_name = cleaned.file_name()?.to_string_lossy().into_owned();
    let parent = cleaned.parent().map(Path::to_path_buf).unwrap_or_default();
    Some((parent, file_name))
}
