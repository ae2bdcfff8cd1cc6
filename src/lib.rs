//! # xdg-basedir
//!
//! Per-user base directories following the XDG Base Directory convention,
//! with platform defaults for Unix-likes, macOS and Windows.
//!
//! This crate resolves the cache, config, data and state base directories,
//! creates application directories and files inside them, and looks files up
//! across a home directory and its search path. Paths supplied by the caller
//! are resolved through an open directory handle and can never leave the
//! application directory they are meant for.
//!
//! ## Features
//!
//! - **Resolution**: `XDG_*` variables honored on every platform, with nested
//!   `$VAR`/`${VAR}` (and `%VAR%` on Windows) and leading `~` expanded
//! - **Search paths**: `XDG_CONFIG_DIRS`/`XDG_DATA_DIRS` filtered to existing
//!   absolute directories, in preference order
//! - **Containment**: subpaths with `..`, absolute paths or escaping symlinks
//!   are refused by the operating system, not only by string checks
//! - **Private by default**: directories are created `0700`, files `0600`
//!
//! ## Examples
//!
//! ### Base directories
//!
//! ```no_run
//! let config = xdg_basedir::config_home()?;
//! let search = xdg_basedir::config_dirs()?;
//! println!("writing to {}, also reading {:?}", config.display(), search);
//! # Ok::<(), xdg_basedir::XdgError>(())
//! ```
//!
//! ### Creating application files
//!
//! ```no_run
//! use xdg_basedir::{config_home, create_file_path, state_home, create_subdir};
//!
//! let settings = create_file_path(config_home, "my_app", "profiles/default.toml")?;
//! let history = create_subdir(state_home, "my_app", "history")?;
//!
//! // Traversal is refused
//! assert!(create_file_path(config_home, "my_app", "../other_app/file").is_err());
//! # Ok::<(), xdg_basedir::XdgError>(())
//! ```
//!
//! ### Finding files
//!
//! ```no_run
//! // `None` means "not found", which is not an error.
//! if let Some(path) = xdg_basedir::find_data_file("my_app", "themes/dark.toml")? {
//!     println!("theme at {}", path.display());
//! }
//! # Ok::<(), xdg_basedir::XdgError>(())
//! ```

mod create;
mod defaults;
mod error;
mod expand;
mod find;
mod home;
#[cfg(feature = "must")]
mod must;
mod normalize;
mod resolve;
mod root;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;
#[cfg(test)]
mod test_utils;

// Re-export main public API
pub use create::{create_dir, create_file, create_file_path, create_subdir};
pub use defaults::{DefaultDirs, Native, LIST_SEPARATOR};
pub use error::{Result, XdgError};
pub use expand::expand;
pub use find::{find_cache_file, find_config_file, find_data_file, find_file, find_state_file};
pub use home::home_dir;
#[cfg(feature = "must")]
pub use must::{
    must_cache_home, must_config_dirs, must_config_home, must_data_dirs, must_data_home,
    must_state_home,
};
pub use normalize::clean;
pub use resolve::{
    cache_home, config_dirs, config_home, data_dirs, data_home, state_home, Category,
};
pub use root::{
    contained_join, contained_mkdir_all, ScopedDir, NEW_DIRECTORY_PERMISSIONS,
    NEW_FILE_PERMISSIONS,
};
pub use validate::{is_valid_segment, validate_relative, validate_segment};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
