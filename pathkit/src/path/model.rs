//! The segment model.
//!
//! A [`Path`] is an immutable, already-normalized list of segments plus its
//! [`PathKind`]. Absolute paths carry an anchor segment in position 0: the
//! empty string for `/`-rooted paths, or an upper-case drive token such as
//! `C:` for DOS paths. All index-based access goes through
//! [`Path::resolve_index`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::normalize::Normalizer;
use crate::path::types::{FormatOptions, PathKind, Separator};

/// The segment of the current-directory path.
pub(crate) const CURRENT_DIR: &str = ".";

/// The parent-directory segment.
pub(crate) const PARENT_DIR: &str = "..";

/// A normalized path.
///
/// Paths are created by [`Path::new`] (or [`Normalizer::parse`]) and never
/// change afterwards; every transformation returns a new value. Equality and
/// hashing compare segments, so `C:\a` and `c:/a/` are equal.
///
/// # Examples
///
/// ```
/// use pathkit::Path;
///
/// let path = Path::new("/var/www/html/project/public").unwrap();
/// assert_eq!(path.depth(), 5);
/// assert_eq!(path.get_element(0), Some(""));
/// assert_eq!(path.get_element(1), Some("var"));
/// assert_eq!(path.get_element(-2), Some("project"));
/// assert_eq!(path.get_element(6), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
    kind: PathKind,
}

impl Path {
    /// Parse and normalize `raw` with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for blank input and
    /// [`Error::TooManyParentJumps`] when a `..` climbs past the root or the
    /// start of a relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("C:////./Windows/../Windows/Fonts").unwrap();
    /// assert_eq!(path.to_string(), "C:/Windows/Fonts");
    /// assert!(Path::new("").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        Normalizer::default().parse(raw)
    }

    /// The current directory, `.`.
    #[must_use]
    pub fn current() -> Self {
        Self {
            segments: vec![CURRENT_DIR.to_string()],
            kind: PathKind::Relative,
        }
    }

    /// The Unix root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: vec![String::new()],
            kind: PathKind::Root,
        }
    }

    /// Assemble a path from already-resolved parts.
    ///
    /// `body` must not contain separators or `.` segments, and `..` only as a
    /// leading run of a relative path.
    pub(crate) fn from_parts(anchor: Option<String>, body: Vec<String>) -> Self {
        match anchor {
            Some(anchor) => {
                let kind = if body.is_empty() {
                    PathKind::Root
                } else if anchor.is_empty() {
                    PathKind::AbsoluteUnix
                } else {
                    PathKind::AbsoluteDos
                };
                let mut segments = Vec::with_capacity(body.len() + 1);
                segments.push(anchor);
                segments.extend(body);
                Self { segments, kind }
            }
            None if body.is_empty() => Self::current(),
            None => Self {
                segments: body,
                kind: PathKind::Relative,
            },
        }
    }

    /// The classification of this path.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Returns `true` for rooted and drive-anchored paths.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.kind.is_absolute()
    }

    /// Returns `true` if the path has no anchor.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns `true` if the path is only an anchor.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.kind == PathKind::Root
    }

    /// Returns `true` for the current-directory path `.`.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.is_relative() && self.segments.len() == 1 && self.segments[0] == CURRENT_DIR
    }

    /// Returns `true` if the path consists only of `..` segments.
    #[must_use]
    pub fn is_parent_ref(&self) -> bool {
        self.is_relative() && self.segments.iter().all(|s| s == PARENT_DIR)
    }

    /// Returns `true` if the path is anchored at a drive letter.
    #[must_use]
    pub fn is_dos(&self) -> bool {
        self.drive().is_some()
    }

    /// Returns `true` if the path is anchored at `/`.
    #[must_use]
    pub fn is_unix(&self) -> bool {
        self.anchor() == Some("")
    }

    /// The upper-case drive letter of a DOS path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// assert_eq!(Path::new("d:\\games").unwrap().drive(), Some('D'));
    /// assert_eq!(Path::new("/games").unwrap().drive(), None);
    /// ```
    #[must_use]
    pub fn drive(&self) -> Option<char> {
        self.anchor().and_then(|anchor| anchor.chars().next())
    }

    /// The anchor segment (`""` or `"C:"`) of an absolute path.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        if self.is_absolute() {
            Some(self.segments[0].as_str())
        } else {
            None
        }
    }

    /// Number of segments excluding the anchor.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.body().len()
    }

    /// All segments, the anchor included.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments excluding the anchor.
    pub(crate) fn body(&self) -> &[String] {
        if self.is_absolute() {
            &self.segments[1..]
        } else {
            &self.segments
        }
    }

    /// Iterate over the non-anchor segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("C:\\Program Files\\App").unwrap();
    /// let names: Vec<&str> = path.iter().collect();
    /// assert_eq!(names, ["Program Files", "App"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            inner: self.body().iter(),
        }
    }

    /// The last segment, unless it is an anchor, `.` or `..`.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.body()
            .last()
            .map(String::as_str)
            .filter(|name| *name != CURRENT_DIR && *name != PARENT_DIR)
    }

    /// Map a signed element index to a position in [`Path::segments`].
    ///
    /// Index `0` is the anchor and only exists for absolute paths. Positive
    /// indices count non-anchor segments from 1; negative indices count them
    /// from the end, so `-1` is the last segment and `-depth` the first.
    pub(crate) fn resolve_index(&self, index: isize) -> Option<usize> {
        let offset = usize::from(self.is_absolute());
        let depth = self.depth();
        let magnitude = index.unsigned_abs();

        if index == 0 {
            return self.is_absolute().then_some(0);
        }
        if magnitude > depth {
            return None;
        }
        if index > 0 {
            Some(offset + magnitude - 1)
        } else {
            Some(offset + depth - magnitude)
        }
    }

    /// Convert a position in [`Path::segments`] back to an element index.
    pub(crate) fn position_to_index(&self, position: usize) -> usize {
        if self.is_absolute() {
            position
        } else {
            position + 1
        }
    }

    /// Get a segment by signed, anchor-based index.
    ///
    /// Out-of-range indices return `None`; index `0` is `None` for relative
    /// paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let abs = Path::new("/a/b/c").unwrap();
    /// assert_eq!(abs.get_element(1), abs.get_element(-3));
    /// assert_eq!(abs.get_element(-4), None);
    ///
    /// let rel = Path::new("a/b").unwrap();
    /// assert_eq!(rel.get_element(0), None);
    /// assert_eq!(rel.get_element(1), Some("a"));
    /// ```
    #[must_use]
    pub fn get_element(&self, index: isize) -> Option<&str> {
        self.resolve_index(index)
            .map(|position| self.segments[position].as_str())
    }

    /// Render the path.
    ///
    /// Roots always end with the separator; other paths get one only when
    /// `options.trailing_slash` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{FormatOptions, Path, Separator};
    ///
    /// let path = Path::new("C:/Windows/Fonts").unwrap();
    /// let options = FormatOptions {
    ///     separator: Separator::Backslash,
    ///     trailing_slash: false,
    /// };
    /// assert_eq!(path.format(options), "C:\\Windows\\Fonts");
    /// ```
    #[must_use]
    pub fn format(&self, options: FormatOptions) -> String {
        let separator = options.separator.as_str();
        let mut rendered = if self.is_root() {
            format!("{}{separator}", self.segments[0])
        } else if self.is_relative() && has_drive_prefix(&self.segments[0]) {
            // Keep `./c:/x` from reading back as a drive path.
            format!("{CURRENT_DIR}{separator}{}", self.segments.join(separator))
        } else {
            self.segments.join(separator)
        };
        if options.trailing_slash && !rendered.ends_with(options.separator.as_char()) {
            rendered.push_str(separator);
        }
        rendered
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatOptions::default()))
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Path {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the non-anchor segments of a [`Path`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Returns `true` if `raw` starts with a drive token such as `C:`.
pub(crate) fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Split off the anchor of a raw path string.
///
/// Returns the canonical anchor (upper-case drive token, or `""` for a
/// leading separator) and the remainder still to be split into segments.
pub(crate) fn split_anchor(raw: &str) -> (Option<String>, &str) {
    if has_drive_prefix(raw) {
        (Some(raw[..2].to_ascii_uppercase()), &raw[2..])
    } else if raw.starts_with(Separator::is_separator) {
        (Some(String::new()), raw)
    } else {
        (None, raw)
    }
}

/// Split on runs of `/` and `\`, dropping the empty pieces.
pub(crate) fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    rest.split(Separator::is_separator)
        .filter(|segment| !segment.is_empty())
}

/// Classify a raw, un-normalized path string.
///
/// This looks only at the text: `a/..` is still `Relative` and `/a/..` is
/// still `AbsoluteUnix`. Normalization may change the kind.
///
/// # Examples
///
/// ```
/// use pathkit::{path::classify, PathKind};
///
/// assert_eq!(classify("C:"), PathKind::Root);
/// assert_eq!(classify("\\\\"), PathKind::Root);
/// assert_eq!(classify("c:foo"), PathKind::AbsoluteDos);
/// assert_eq!(classify("\\tmp"), PathKind::AbsoluteUnix);
/// assert_eq!(classify("tmp"), PathKind::Relative);
/// ```
#[must_use]
pub fn classify(raw: &str) -> PathKind {
    match split_anchor(raw) {
        (Some(_), rest) if rest.chars().all(Separator::is_separator) => PathKind::Root,
        (Some(anchor), _) if anchor.is_empty() => PathKind::AbsoluteUnix,
        (Some(_), _) => PathKind::AbsoluteDos,
        (None, _) => PathKind::Relative,
    }
}
