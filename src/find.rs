//! Lookup of application files across a home directory and its search path

use crate::error::{Result, XdgError};
use crate::resolve::Category;
use crate::root::ScopedDir;
use crate::validate::{validate_relative, validate_segment};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Look for a file in an app's [`cache_home`](crate::cache_home) directory
///
/// Returns `Ok(None)` if the file does not exist. An error means the
/// arguments were invalid or the filesystem could not be inspected.
pub fn find_cache_file(app_name: &str, file_path: &str) -> Result<Option<PathBuf>> {
    find_category_file(Category::Cache, app_name, file_path)
}

/// Look for a file in an app's [`config_home`](crate::config_home) directory,
/// then in its [`config_dirs`](crate::config_dirs) directories
///
/// Returns the first match, or `Ok(None)` if the file exists nowhere.
///
/// # Examples
/// ```no_run
/// match xdg_basedir::find_config_file("my_app", "settings.toml")? {
///     Some(path) => println!("loading {}", path.display()),
///     None => println!("using built-in settings"),
/// }
/// # Ok::<(), xdg_basedir::XdgError>(())
/// ```
pub fn find_config_file(app_name: &str, file_path: &str) -> Result<Option<PathBuf>> {
    find_category_file(Category::Config, app_name, file_path)
}

/// Look for a file in an app's [`data_home`](crate::data_home) directory,
/// then in its [`data_dirs`](crate::data_dirs) directories
///
/// Returns the first match, or `Ok(None)` if the file exists nowhere.
pub fn find_data_file(app_name: &str, file_path: &str) -> Result<Option<PathBuf>> {
    find_category_file(Category::Data, app_name, file_path)
}

/// Look for a file in an app's [`state_home`](crate::state_home) directory
///
/// Returns `Ok(None)` if the file does not exist.
pub fn find_state_file(app_name: &str, file_path: &str) -> Result<Option<PathBuf>> {
    find_category_file(Category::State, app_name, file_path)
}

fn find_category_file(
    category: Category,
    app_name: &str,
    file_path: &str,
) -> Result<Option<PathBuf>> {
    find_file(|| category.home(), || category.dirs(), app_name, file_path)
}

/// Look for `file_path` under `app_name` in the directory returned by `home`,
/// then in each directory returned by `dirs`, in order
///
/// `file_path` may have several segments but is resolved strictly inside each
/// candidate app directory. App entries that are not directories, and matches
/// that are directories, are skipped. Returns the first regular file found,
/// or `Ok(None)`.
///
/// # Examples
/// ```
/// use xdg_basedir::{create_file, find_file};
///
/// let home = tempfile::tempdir()?;
/// let system = tempfile::tempdir()?;
/// let shared = create_file(|| Ok(system.path().to_path_buf()), "my_app", "shared.toml")?;
///
/// let home_fn = || Ok(home.path().to_path_buf());
/// let dirs_fn = || Ok(vec![system.path().to_path_buf()]);
///
/// assert_eq!(find_file(home_fn, dirs_fn, "my_app", "shared.toml")?, Some(shared));
/// assert_eq!(find_file(home_fn, dirs_fn, "my_app", "missing.toml")?, None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn find_file<H, D>(
    home: H,
    dirs: D,
    app_name: &str,
    file_path: &str,
) -> Result<Option<PathBuf>>
where
    H: FnOnce() -> Result<PathBuf>,
    D: FnOnce() -> Result<Vec<PathBuf>>,
{
    let app_name = validate_segment("app name", app_name)?;
    let file_path = validate_relative("file path", file_path)?;

    let first = home()?;
    let more = dirs()?;

    for base in std::iter::once(first).chain(more) {
        if let Some(found) = find_in(&base, &app_name, &file_path)? {
            log::debug!("found {found:?}");
            return Ok(Some(found));
        }
    }

    log::debug!("{file_path:?} not found for {app_name:?}");
    Ok(None)
}

fn find_in(base: &Path, app_name: &Path, file_path: &Path) -> Result<Option<PathBuf>> {
    let app_dir = base.join(app_name);
    match fs::metadata(&app_dir) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            log::trace!("skipping {app_dir:?}: not a directory");
            return Ok(None);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(XdgError::io(app_dir, err)),
    }

    let root = ScopedDir::open(&app_dir)?;
    match root.metadata(file_path) {
        Ok(metadata) if metadata.is_dir() => {
            log::trace!("skipping {:?}: a directory", app_dir.join(file_path));
            Ok(None)
        }
        Ok(_) => Ok(Some(app_dir.join(file_path))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(XdgError::containment(app_dir.join(file_path), err)),
    }
}
