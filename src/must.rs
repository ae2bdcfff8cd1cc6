//! Variants of the resolvers that panic instead of returning an error
//!
//! For call sites that cannot continue without their base directories, such
//! as a program's startup. Everything else should use the fallible versions.

use crate::error::Result;
use std::path::PathBuf;

fn must<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| panic!("{err}"))
}

/// Like [`cache_home`](crate::cache_home), but panics on error
pub fn must_cache_home() -> PathBuf {
    must(crate::cache_home())
}

/// Like [`config_home`](crate::config_home), but panics on error
pub fn must_config_home() -> PathBuf {
    must(crate::config_home())
}

/// Like [`config_dirs`](crate::config_dirs), but panics on error
pub fn must_config_dirs() -> Vec<PathBuf> {
    must(crate::config_dirs())
}

/// Like [`data_home`](crate::data_home), but panics on error
pub fn must_data_home() -> PathBuf {
    must(crate::data_home())
}

/// Like [`data_dirs`](crate::data_dirs), but panics on error
pub fn must_data_dirs() -> Vec<PathBuf> {
    must(crate::data_dirs())
}

/// Like [`state_home`](crate::state_home), but panics on error
pub fn must_state_home() -> PathBuf {
    must(crate::state_home())
}
