//! Error types for the pathkit library.
//!
//! Every fallible operation in the crate returns [`Result`], built on a single
//! error enum derived with `thiserror`. All conditions are local and
//! recoverable; nothing here is logged or retried internally.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Path, Result};
///
/// fn parse_home() -> Result<Path> {
///     Path::new("/home/user")
/// }
///
/// assert!(parse_home().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input string was empty (or only whitespace).
    #[error("empty path")]
    EmptyInput,

    /// A separator other than `/` or `\` was requested.
    #[error("invalid separator {separator:?}: expected '/' or '\\'")]
    InvalidSeparator {
        /// The rejected separator character.
        separator: char,
    },

    /// An operation required an absolute path and received a relative one.
    #[error("path is not absolute: {path}")]
    NotAbsolute {
        /// The offending path.
        path: String,
    },

    /// `to_relative` was given a base that does not prefix the path.
    #[error("{base} is not a parent of {path}")]
    NotAParent {
        /// The path being made relative.
        path: String,
        /// The base that failed to prefix it.
        base: String,
    },

    /// A `..` segment tried to climb above the root or the start of a
    /// relative path.
    #[error("too many '..' segments in {path}")]
    TooManyParentJumps {
        /// The original input that could not be normalized.
        path: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Reading a configuration source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error was caused by an unresolvable `..` segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let err = Path::new("/a/../..").unwrap_err();
    /// assert!(err.is_too_many_parent_jumps());
    /// ```
    #[must_use]
    pub fn is_too_many_parent_jumps(&self) -> bool {
        matches!(self, Self::TooManyParentJumps { .. })
    }

    /// Check if the error was caused by a relative path where an absolute one
    /// was required.
    #[must_use]
    pub fn is_not_absolute(&self) -> bool {
        matches!(self, Self::NotAbsolute { .. })
    }

    /// Check if the error was caused by a base path that is not a prefix.
    #[must_use]
    pub fn is_not_a_parent(&self) -> bool {
        matches!(self, Self::NotAParent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_error() {
        let display = format!("{}", Error::EmptyInput);
        assert_eq!(display, "empty path");
    }

    #[test]
    fn test_invalid_separator_error() {
        let err = Error::InvalidSeparator { separator: ':' };
        let display = format!("{err}");
        assert!(display.contains("invalid separator"));
        assert!(display.contains("':'"));
    }

    #[test]
    fn test_not_absolute_error() {
        let err = Error::NotAbsolute {
            path: "relative/path".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not absolute"));
        assert!(display.contains("relative/path"));
        assert!(err.is_not_absolute());
    }

    #[test]
    fn test_not_a_parent_error() {
        let err = Error::NotAParent {
            path: "/var/www".to_string(),
            base: "/usr".to_string(),
        };
        assert_eq!(format!("{err}"), "/usr is not a parent of /var/www");
        assert!(err.is_not_a_parent());
    }

    #[test]
    fn test_too_many_parent_jumps_error() {
        let err = Error::TooManyParentJumps {
            path: "/a/../..".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("too many '..'"));
        assert!(display.contains("/a/../.."));
        assert!(err.is_too_many_parent_jumps());
        assert!(!err.is_not_absolute());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "PATHKIT_SEPARATOR".to_string(),
            message: "must be a single character".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("PATHKIT_SEPARATOR"));
        assert!(display.contains("single character"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::EmptyInput)
        }

        assert!(returns_result().is_err());
    }
}
