//! Creation of application directories and files under a base directory
//!
//! Each operation takes the base directory as a function, usually one of
//! [`cache_home`](crate::cache_home), [`config_home`](crate::config_home),
//! [`data_home`](crate::data_home) or [`state_home`](crate::state_home), but
//! any `FnOnce() -> Result<PathBuf>` works.

use crate::error::{Result, XdgError};
use crate::normalize::{clean, lacks_file_name, split_file_path};
use crate::root::{ScopedDir, NEW_DIRECTORY_PERMISSIONS};
use crate::validate::validate_segment;
use std::fs::DirBuilder;
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;

/// Create the application directory `app_name` under the base directory
/// returned by `home`, along with any missing ancestors
///
/// `app_name` must be a single path segment.
///
/// # Examples
/// ```
/// use xdg_basedir::create_dir;
///
/// let base = tempfile::tempdir()?;
/// let dir = create_dir(|| Ok(base.path().to_path_buf()), "my_app")?;
/// assert_eq!(dir, base.path().join("my_app"));
/// assert!(dir.is_dir());
///
/// assert!(create_dir(|| Ok(base.path().to_path_buf()), "../other_app").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn create_dir<F>(home: F, app_name: &str) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let app_name = validate_segment("app name", app_name)?;
    let path = home()?.join(app_name);

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(NEW_DIRECTORY_PERMISSIONS);

    builder
        .create(&path)
        .map_err(|source| XdgError::io(&path, source))?;
    log::trace!("application directory {path:?} is ready");
    Ok(path)
}

/// Create `subpath` under the application directory, see [`create_dir`]
///
/// `subpath` may hold any number of segments, and is never allowed to leave
/// the application directory. An empty subpath returns the application
/// directory itself.
pub fn create_subdir<F>(home: F, app_name: &str, subpath: &str) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let app_dir = create_dir(home, app_name)?;
    ScopedDir::open(&app_dir)?.create_dir_all(subpath)
}

/// Create the empty file `file_name` in the application directory, see
/// [`create_dir`]
///
/// An existing file is opened and left unchanged. `file_name` must be a
/// single path segment.
pub fn create_file<F>(home: F, app_name: &str, file_name: &str) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let file_name = validate_segment("file name", file_name)?;
    let app_dir = create_dir(home, app_name)?;
    ScopedDir::open(&app_dir)?.create_file(file_name)
}

/// Create the empty file `file_path`, which may be nested in subdirectories,
/// under the application directory, see [`create_dir`]
///
/// `file_path` must end with a file name. Its directory prefix is created as
/// with [`create_subdir`], and neither part may leave the application
/// directory. An existing file is opened and left unchanged.
///
/// # Examples
/// ```
/// use xdg_basedir::create_file_path;
///
/// let base = tempfile::tempdir()?;
/// let home = || Ok(base.path().to_path_buf());
///
/// let file = create_file_path(home, "my_app", "profiles/default.toml")?;
/// assert_eq!(file, base.path().join("my_app/profiles/default.toml"));
/// assert!(create_file_path(home, "my_app", "profiles/").is_err());
/// assert!(create_file_path(home, "my_app", "../escape.toml").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn create_file_path<F>(home: F, app_name: &str, file_path: &str) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let missing = || XdgError::MissingFileName {
        path: file_path.to_string(),
    };
    if lacks_file_name(file_path) {
        return Err(missing());
    }
    let (subpath, file_name) = split_file_path(&clean(file_path)).ok_or_else(missing)?;
    let file_name = validate_segment("file name", &file_name)?;
    validate_segment("app name", app_name)?;

    let dir = create_subdir(home, app_name, &subpath.to_string_lossy())?;
    ScopedDir::open(&dir)?.create_file(file_name)
}
