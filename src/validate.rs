//! Name and path argument validation
//!
//! Checks run before any filesystem access, so a rejected argument never
//! creates or probes anything.

use crate::error::{Result, XdgError};
use crate::normalize::{clean, is_current_dir};
use std::path::{Component, Path, PathBuf};

/// Validate a name that must be a single path segment (an app name or a file name)
///
/// The name is cleaned first, so `app/` and `./app` are accepted as `app`.
/// Empty names and `.` are [`XdgError::EmptyName`]; names with a separator,
/// `..`, a root or a drive prefix are [`XdgError::InvalidName`].
///
/// # Examples
/// ```
/// use xdg_basedir::validate_segment;
///
/// assert!(validate_segment("app name", "my_app").is_ok());
/// assert!(validate_segment("app name", "").is_err());
/// assert!(validate_segment("app name", "../other_app").is_err());
/// ```
pub fn validate_segment(what: &'static str, name: &str) -> Result<PathBuf> {
    let cleaned = clean(name);
    if is_current_dir(&cleaned) {
        return Err(XdgError::EmptyName { what });
    }

    let mut components = cleaned.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(cleaned),
        _ => Err(XdgError::InvalidName {
            what,
            name: name.to_string(),
        }),
    }
}

/// Validate a relative path of one or more segments
///
/// Only emptiness is checked here. Whether the path stays inside its base is
/// decided by the scoped directory handle it is resolved against.
pub fn validate_relative(what: &'static str, path: &str) -> Result<PathBuf> {
    let cleaned = clean(path);
    if is_current_dir(&cleaned) {
        return Err(XdgError::EmptyName { what });
    }
    Ok(cleaned)
}

/// Whether `name` is accepted by [`validate_segment`]
pub fn is_valid_segment<P: AsRef<Path>>(name: P) -> bool {
    validate_segment("name", &name.as_ref().to_string_lossy()).is_ok()
}
