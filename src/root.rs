//! Contained path resolution through scoped directory handles
//!
//! A [`ScopedDir`] holds an open handle to a base directory. Every path given
//! to it is resolved relative to that handle, and the operating system refuses
//! any resolution that would leave the directory, whether through `..`
//! segments, absolute paths or symlinks pointing elsewhere. Arguments are also
//! cleaned and checked lexically first, so plain `../escape` is rejected
//! without touching the filesystem.

use crate::error::{Result, XdgError};
use crate::normalize::{clean_relative, is_current_dir};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, DirBuilder, File, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use cap_std::fs::{DirBuilderExt, OpenOptionsExt};

/// Permissions of directories created by this crate: `rwx------`
pub const NEW_DIRECTORY_PERMISSIONS: u32 = 0o700;

/// Permissions of files created by this crate: `rw-------`
pub const NEW_FILE_PERMISSIONS: u32 = 0o600;

/// An open directory that paths are resolved beneath
///
/// The handle is closed when the value is dropped.
///
/// # Examples
/// ```
/// use xdg_basedir::ScopedDir;
///
/// let base = tempfile::tempdir()?;
/// let root = ScopedDir::open(base.path())?;
/// assert_eq!(root.path(), base.path());
///
/// assert_eq!(root.create_dir_all("a/b")?, base.path().join("a/b"));
/// assert_eq!(root.create_file("a/b/file")?, base.path().join("a/b/file"));
/// assert!(root.create_file("../escape").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ScopedDir {
    path: PathBuf,
    dir: Dir,
}

impl ScopedDir {
    /// Open `path`, which must be an existing directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|source| XdgError::containment(path, source))?;
        Ok(Self {
            path: path.to_path_buf(),
            dir,
        })
    }

    /// The path this directory was opened with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `sub` beneath this directory
    ///
    /// `sub` does not have to exist, but every existing part of it must
    /// resolve inside this directory.
    pub fn join<P: AsRef<Path>>(&self, sub: P) -> Result<PathBuf> {
        let sub = self.relative(sub.as_ref())?;
        if is_current_dir(&sub) {
            return Ok(self.path.clone());
        }

        match self.dir.metadata(&sub) {
            Ok(_) => Ok(self.path.join(sub)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(self.path.join(sub)),
            Err(err) => Err(XdgError::containment(self.path.join(sub), err)),
        }
    }

    /// Create `sub` and any missing parents beneath this directory
    pub fn create_dir_all<P: AsRef<Path>>(&self, sub: P) -> Result<PathBuf> {
        let sub = self.relative(sub.as_ref())?;
        if is_current_dir(&sub) {
            return Ok(self.path.clone());
        }

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(NEW_DIRECTORY_PERMISSIONS);

        let target = self.path.join(&sub);
        self.dir
            .create_dir_with(&sub, &builder)
            .map_err(|source| XdgError::containment(&target, source))?;
        log::trace!("created directory {target:?}");
        Ok(target)
    }

    /// Create the file `sub` beneath this directory, or open it if it exists
    ///
    /// Existing files are only opened for reading, so their contents and
    /// permissions are left untouched. Parent directories must exist.
    pub fn create_file<P: AsRef<Path>>(&self, sub: P) -> Result<PathBuf> {
        let sub = self.relative(sub.as_ref())?;
        let target = self.path.join(&sub);

        let file = self
            .open_or_create(&sub)
            .map_err(|source| XdgError::containment(&target, source))?;
        let is_dir = file
            .metadata()
            .map_err(|source| XdgError::io(&target, source))?
            .is_dir();
        if is_dir {
            return Err(XdgError::containment(
                &target,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            ));
        }
        Ok(target)
    }

    fn open_or_create(&self, sub: &Path) -> io::Result<File> {
        match self.dir.open(sub) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            existing => return existing,
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(NEW_FILE_PERMISSIONS);

        match self.dir.open_with(sub, &options) {
            Ok(file) => {
                log::trace!("created file {:?}", self.path.join(sub));
                Ok(file)
            }
            // Lost a race with another creator
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => self.dir.open(sub),
            Err(err) => Err(err),
        }
    }

    /// Metadata of `sub` beneath this directory, following symlinks that stay inside it
    pub fn metadata<P: AsRef<Path>>(&self, sub: P) -> io::Result<Metadata> {
        let sub = clean_relative(sub.as_ref())?;
        self.dir.metadata(sub)
    }

    fn relative(&self, sub: &Path) -> Result<PathBuf> {
        clean_relative(sub).map_err(|source| XdgError::containment(self.path.join(sub), source))
    }
}

/// Join `base` and `sub`, refusing any result outside `base`
///
/// # Examples
/// ```
/// use xdg_basedir::contained_join;
///
/// let base = tempfile::tempdir()?;
/// assert_eq!(contained_join(base.path(), "a/../b")?, base.path().join("b"));
/// assert!(contained_join(base.path(), "../escape").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn contained_join<P: AsRef<Path>, Q: AsRef<Path>>(base: P, sub: Q) -> Result<PathBuf> {
    ScopedDir::open(base)?.join(sub)
}

/// Create `sub` and its missing parents beneath `base`, refusing to create
/// anything outside `base`
pub fn contained_mkdir_all<P: AsRef<Path>, Q: AsRef<Path>>(base: P, sub: Q) -> Result<PathBuf> {
    ScopedDir::open(base)?.create_dir_all(sub)
}
