//! Property test generators for base directory operations
//!
//! Generators produce application names and relative subpaths, including the
//! traversal attempts the containment checks have to reject.

use proptest::prelude::*;

/// Generators for name and subpath scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a single path segment without separators
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_]([a-zA-Z0-9_.-]{0,14}[a-zA-Z0-9_])?"
    }

    /// Generate valid application names
    pub fn app_name() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Self::segment(),
            1 => Just("my_app".to_string()),
            1 => Just(".hidden_app".to_string()),
            1 => Just("app with spaces".to_string()),
        ]
    }

    /// Generate application names that are not a single segment
    pub fn invalid_app_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("".to_string()),
            Just(".".to_string()),
            Just("./".to_string()),
            Just("/".to_string()),
            Just("..".to_string()),
            Just("../other_app".to_string()),
            (Self::segment(), Self::segment()).prop_map(|(a, b)| format!("{a}/{b}")),
            Self::segment().prop_map(|a| format!("/{a}")),
            Self::segment().prop_map(|a| format!("../{a}")),
        ]
    }

    /// Generate a path segment that may be a traversal or current-directory marker
    fn subpath_segment() -> impl Strategy<Value = String> {
        prop_oneof![
            6 => Self::segment(),
            1 => Just(".".to_string()),
            2 => Just("..".to_string()),
            1 => Just("".to_string()),
        ]
    }

    /// Generate relative subpaths, some of which climb out of their base
    pub fn subpath() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::subpath_segment(), 0..=5).prop_map(|parts| parts.join("/"))
    }

    /// Generate subpaths that always climb out of their base
    pub fn escaping_subpath() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(Self::segment(), 0..=3),
            Self::segment(),
        )
            .prop_map(|(dirs, last)| {
                let depth = dirs.len() + 1;
                let mut parts = dirs;
                parts.extend(std::iter::repeat("..".to_string()).take(depth));
                parts.push(last);
                parts.join("/")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::clean_relative;
    use crate::validate::is_valid_segment;
    use std::path::Path;

    proptest! {
        #[test]
        fn app_names_are_valid(app_name in PathGenerators::app_name()) {
            prop_assert!(is_valid_segment(&app_name), "{:?}", app_name);
        }

        #[test]
        fn invalid_app_names_are_invalid(app_name in PathGenerators::invalid_app_name()) {
            prop_assert!(!is_valid_segment(&app_name), "{:?}", app_name);
        }

        #[test]
        fn escaping_subpaths_escape(subpath in PathGenerators::escaping_subpath()) {
            prop_assert!(clean_relative(Path::new(&subpath)).is_err(), "{:?}", subpath);
        }

        #[test]
        fn generators_dont_panic(_subpath in PathGenerators::subpath()) {}
    }
}
