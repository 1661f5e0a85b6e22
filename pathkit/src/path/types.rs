//! Core types for path handling.
//!
//! This module defines the small value types shared by the segment model and
//! the normalizer: path classification, separators, the `..` boundary policy,
//! and output formatting options.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification of a parsed path.
///
/// `Root` is a special case of an absolute path that holds nothing but its
/// anchor segment (`/` or `C:\`).
///
/// # Examples
///
/// ```
/// use pathkit::{Path, PathKind};
///
/// assert_eq!(Path::new("/").unwrap().kind(), PathKind::Root);
/// assert_eq!(Path::new("c:\\").unwrap().kind(), PathKind::Root);
/// assert_eq!(Path::new("/usr/bin").unwrap().kind(), PathKind::AbsoluteUnix);
/// assert_eq!(Path::new("C:/Windows").unwrap().kind(), PathKind::AbsoluteDos);
/// assert_eq!(Path::new("src/lib.rs").unwrap().kind(), PathKind::Relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Only an anchor: `/`, `\`, `C:` or `C:\`.
    Root,
    /// Anchored at `/` or `\` with at least one further segment.
    AbsoluteUnix,
    /// Anchored at a drive letter with at least one further segment.
    AbsoluteDos,
    /// No anchor.
    Relative,
}

impl PathKind {
    /// Returns `true` for every kind except [`PathKind::Relative`].
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        !matches!(self, Self::Relative)
    }
}

/// The character used to join segments on output.
///
/// Only `/` and `\` exist; converting any other character fails with
/// [`Error::InvalidSeparator`].
///
/// # Examples
///
/// ```
/// use pathkit::Separator;
///
/// assert_eq!(Separator::try_from('\\').unwrap(), Separator::Backslash);
/// assert!(Separator::try_from(':').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// `/`
    #[default]
    Slash,
    /// `\`
    Backslash,
}

impl Separator {
    /// Returns the separator as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }

    /// Returns the separator as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slash => "/",
            Self::Backslash => "\\",
        }
    }

    /// Returns `true` if `c` is either separator character.
    #[must_use]
    pub const fn is_separator(c: char) -> bool {
        matches!(c, '/' | '\\')
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(separator: char) -> Result<Self> {
        match separator {
            '/' => Ok(Self::Slash),
            '\\' => Ok(Self::Backslash),
            _ => Err(Error::InvalidSeparator { separator }),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the normalizer does with a `..` segment that cannot climb further.
///
/// # Examples
///
/// ```
/// use pathkit::{BoundaryPolicy, Normalizer, NormalizeOptions};
///
/// let retain = Normalizer::new(NormalizeOptions {
///     boundary: BoundaryPolicy::Retain,
///     ..NormalizeOptions::default()
/// });
/// assert_eq!(retain.normalize("a/../../b").unwrap(), "../b");
///
/// let clamp = Normalizer::new(NormalizeOptions {
///     boundary: BoundaryPolicy::Clamp,
///     ..NormalizeOptions::default()
/// });
/// assert_eq!(clamp.normalize("/../etc").unwrap(), "/etc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Fail with [`Error::TooManyParentJumps`].
    #[default]
    Error,
    /// Drop the `..`, staying at the root or at the relative start.
    Clamp,
    /// Keep a leading run of `..` in relative paths; clamp absolute paths.
    Retain,
}

impl BoundaryPolicy {
    /// Parses a policy name (`error`, `clamp`, `retain`), case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `field` for unknown names.
    pub fn parse(field: &str, s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "clamp" => Ok(Self::Clamp),
            "retain" => Ok(Self::Retain),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("unknown boundary policy '{s}' (expected error/clamp/retain)"),
            }),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Clamp => write!(f, "clamp"),
            Self::Retain => write!(f, "retain"),
        }
    }
}

/// How a normalized path is rendered to a string.
///
/// # Examples
///
/// ```
/// use pathkit::{FormatOptions, Path};
///
/// let path = Path::new("/a/b").unwrap();
/// let options = FormatOptions::new('\\', true).unwrap();
/// assert_eq!(path.format(options), "\\a\\b\\");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Character placed between segments.
    pub separator: Separator,
    /// Whether the output ends with a separator.
    pub trailing_slash: bool,
}

impl FormatOptions {
    /// Builds options from a raw separator character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeparator`] unless `separator` is `/` or `\`.
    pub fn new(separator: char, trailing_slash: bool) -> Result<Self> {
        Ok(Self {
            separator: Separator::try_from(separator)?,
            trailing_slash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_absolute() {
        assert!(PathKind::Root.is_absolute());
        assert!(PathKind::AbsoluteUnix.is_absolute());
        assert!(PathKind::AbsoluteDos.is_absolute());
        assert!(!PathKind::Relative.is_absolute());
    }

    #[test]
    fn test_separator_conversion() {
        assert_eq!(Separator::try_from('/').unwrap(), Separator::Slash);
        assert_eq!(Separator::try_from('\\').unwrap(), Separator::Backslash);

        let err = Separator::try_from('|').unwrap_err();
        assert!(matches!(err, Error::InvalidSeparator { separator: '|' }));
    }

    #[test]
    fn test_separator_chars() {
        assert_eq!(Separator::Slash.as_char(), '/');
        assert_eq!(Separator::Backslash.as_char(), '\\');
        assert!(Separator::is_separator('/'));
        assert!(Separator::is_separator('\\'));
        assert!(!Separator::is_separator(':'));
        assert!(!Separator::is_separator('|'));
    }

    #[test]
    fn test_separator_display() {
        assert_eq!(Separator::Slash.to_string(), "/");
        assert_eq!(Separator::Backslash.to_string(), "\\");
        assert_eq!(Separator::default(), Separator::Slash);
    }

    #[test]
    fn test_boundary_policy_parse() {
        assert_eq!(BoundaryPolicy::parse("f", "error").unwrap(), BoundaryPolicy::Error);
        assert_eq!(BoundaryPolicy::parse("f", "CLAMP").unwrap(), BoundaryPolicy::Clamp);
        assert_eq!(BoundaryPolicy::parse("f", " Retain ").unwrap(), BoundaryPolicy::Retain);
        assert!(BoundaryPolicy::parse("f", "ignore").is_err());
    }

    #[test]
    fn test_boundary_policy_default() {
        assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Error);
        assert_eq!(BoundaryPolicy::Retain.to_string(), "retain");
    }

    #[test]
    fn test_format_options_rejects_bad_separator() {
        assert!(FormatOptions::new(';', false).is_err());
        let options = FormatOptions::new('/', true).unwrap();
        assert!(options.trailing_slash);
    }
}
