//! Environment variable and home shorthand expansion
//!
//! Values of the `XDG_*` variables may themselves reference other variables
//! (`$HOME/.config`, `${HOME}/.cache`, `%LOCALAPPDATA%\Cache`) or start with
//! `~`. This module turns such raw strings into plain paths.

use regex::{Captures, Regex};
use std::env;
use std::sync::LazyLock;

/// `$NAME` or `${NAME}`
static VAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([^}]*)\}|([A-Za-z0-9_]+))").expect("variable reference pattern")
});

/// `%NAME%`
#[cfg(windows)]
static PERCENT_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\w+?)%").expect("percent reference pattern"));

/// Expand environment variables and, outside Windows, a leading `~`
///
/// - `$VAR` and `${VAR}` are replaced with the variable's value; undefined
///   variables become the empty string.
/// - On Windows, `%VAR%` is also accepted. `~` is left alone and the result
///   is returned as-is.
/// - Elsewhere, a `~` in the first position becomes `${HOME}` and the result
///   is lexically cleaned (duplicate separators, trailing separators, `.`
///   and `..` segments are removed).
///
/// The empty string is returned unchanged, and an expansion that produces
/// nothing is returned as the empty string rather than `.`.
///
/// # Examples
/// ```
/// # #[cfg(unix)] {
/// use xdg_basedir::expand;
///
/// assert_eq!(expand(""), "");
/// assert_eq!(expand("/etc//xdg/"), "/etc/xdg");
/// assert_eq!(expand("/usr/./share/../lib"), "/usr/lib");
/// # }
/// ```
pub fn expand(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    expand_platform(raw)
}

#[cfg(windows)]
fn expand_platform(raw: &str) -> String {
    let rewritten = PERCENT_REF.replace_all(raw, |caps: &Captures| format!("${{{}}}", &caps[1]));
    expand_vars(&rewritten)
}

#[cfg(not(windows))]
fn expand_platform(raw: &str) -> String {
    let expanded = match raw.strip_prefix('~') {
        Some(rest) => expand_vars(&format!("${{HOME}}{rest}")),
        None => expand_vars(raw),
    };
    if expanded.is_empty() {
        return expanded;
    }
    path_clean::clean(&expanded).to_string_lossy().into_owned()
}

fn expand_vars(raw: &str) -> String {
    VAR_REF
        .replace_all(raw, |caps: &Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            lookup(name)
        })
        .into_owned()
}

fn lookup(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    env::var(name).unwrap_or_default()
}
