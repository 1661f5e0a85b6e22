//! Path normalization.
//!
//! This module turns raw path strings into canonical [`Path`] values by:
//! - Splitting on runs of `/` and `\`
//! - Upper-casing a leading drive letter
//! - Resolving `.` and `..` segments under a [`BoundaryPolicy`]
//! - Re-joining with a single configured separator

use crate::error::{Error, Result};
use crate::path::model::{split_anchor, split_segments, Path, CURRENT_DIR, PARENT_DIR};
use crate::path::types::{BoundaryPolicy, FormatOptions, Separator};

/// Options controlling normalization output.
///
/// # Examples
///
/// ```
/// use pathkit::{BoundaryPolicy, NormalizeOptions, Separator};
///
/// let options = NormalizeOptions::default();
/// assert_eq!(options.separator, Separator::Slash);
/// assert!(!options.trailing_slash);
/// assert_eq!(options.boundary, BoundaryPolicy::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    /// Separator used when rendering.
    pub separator: Separator,
    /// Whether rendered output ends with a separator.
    pub trailing_slash: bool,
    /// Behavior for `..` segments that cannot climb further.
    pub boundary: BoundaryPolicy,
}

impl NormalizeOptions {
    /// The formatting half of these options.
    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            separator: self.separator,
            trailing_slash: self.trailing_slash,
        }
    }
}

/// Normalizes raw path strings according to a fixed set of options.
///
/// # Examples
///
/// ```
/// use pathkit::{NormalizeOptions, Normalizer, Separator};
///
/// let normalizer = Normalizer::new(NormalizeOptions {
///     separator: Separator::Backslash,
///     trailing_slash: true,
///     ..NormalizeOptions::default()
/// });
/// assert_eq!(normalizer.normalize("/a/b/..////d/./c").unwrap(), "\\a\\d\\c\\");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    #[must_use]
    pub const fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// The options this normalizer applies.
    #[must_use]
    pub const fn options(&self) -> NormalizeOptions {
        self.options
    }

    /// Parse `raw` into a normalized [`Path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `raw` is empty or whitespace, and
    /// [`Error::TooManyParentJumps`] under [`BoundaryPolicy::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Normalizer;
    ///
    /// let path = Normalizer::default().parse("a/b/../c").unwrap();
    /// assert_eq!(path.to_string(), "a/c");
    ///
    /// let path = Normalizer::default().parse("a/..").unwrap();
    /// assert!(path.is_current());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Path> {
        if raw.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let (anchor, rest) = split_anchor(raw);
        let path = self.resolve(anchor, split_segments(rest), raw)?;
        log::trace!("normalized {raw:?} to {path}");
        Ok(path)
    }

    /// Parse and render `raw` with this normalizer's separator and
    /// trailing-slash settings.
    ///
    /// # Errors
    ///
    /// Same as [`Normalizer::parse`].
    pub fn normalize(&self, raw: &str) -> Result<String> {
        Ok(self.render(&self.parse(raw)?))
    }

    /// Render an existing path with this normalizer's format settings.
    #[must_use]
    pub fn render(&self, path: &Path) -> String {
        path.format(self.options.format_options())
    }

    /// Resolve `.` and `..` in a segment sequence that follows `anchor`.
    ///
    /// `original` is only used for error reporting.
    pub(crate) fn resolve<'a, I>(
        &self,
        anchor: Option<String>,
        segments: I,
        original: &str,
    ) -> Result<Path>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.resolve_onto(anchor, Vec::new(), segments, original)
    }

    /// Like [`Normalizer::resolve`], but continues from `body`, a segment
    /// list that is already resolved and is kept as is.
    pub(crate) fn resolve_onto<'a, I>(
        &self,
        anchor: Option<String>,
        mut body: Vec<String>,
        segments: I,
        original: &str,
    ) -> Result<Path>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for segment in segments {
            match segment {
                CURRENT_DIR => {}
                PARENT_DIR => {
                    if body.last().is_some_and(|last| last != PARENT_DIR) {
                        body.pop();
                        continue;
                    }
                    match self.options.boundary {
                        BoundaryPolicy::Error => {
                            return Err(Error::TooManyParentJumps {
                                path: original.to_string(),
                            });
                        }
                        BoundaryPolicy::Clamp => {}
                        BoundaryPolicy::Retain => {
                            // Nothing lies above a root.
                            if anchor.is_none() {
                                body.push(PARENT_DIR.to_string());
                            }
                        }
                    }
                }
                name => body.push(name.to_string()),
            }
        }

        Ok(Path::from_parts(anchor, body))
    }
}

/// Normalize `raw` with default options (`/`, no trailing slash, `..` past
/// the boundary is an error).
///
/// # Errors
///
/// Same as [`Normalizer::parse`].
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::normalize;
///
/// assert_eq!(normalize("C:////./Windows/../Windows/Fonts").unwrap(), "C:/Windows/Fonts");
/// assert_eq!(normalize("/a/./b/../c").unwrap(), "/a/c");
/// assert!(normalize("/a/../..").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    Normalizer::default().normalize(raw)
}
