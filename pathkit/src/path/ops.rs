//! Derived path operations.
//!
//! Everything here is built from the segment model and the normalizer:
//! parents and slices, absolute/relative conversion, segment-wise prefix,
//! suffix and containment queries, joining, and finding a common base.

use crate::error::{Error, Result};
use crate::path::model::{Path, CURRENT_DIR, PARENT_DIR};
use crate::path::normalize::Normalizer;

impl Path {
    /// The path with its last segment removed.
    ///
    /// Returns `None` for roots, for `.` and for a lone `..`. A single-name
    /// relative path has the current directory as its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("/var/www").unwrap();
    /// assert_eq!(path.parent().unwrap().to_string(), "/var");
    /// assert_eq!(Path::new("/var").unwrap().parent().unwrap().to_string(), "/");
    /// assert_eq!(Path::new("www").unwrap().parent().unwrap().to_string(), ".");
    /// assert!(Path::new("/").unwrap().parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }

        let body = self.body();
        if self.is_relative() && body.len() == 1 {
            return match body[0].as_str() {
                CURRENT_DIR | PARENT_DIR => None,
                _ => Some(Self::current()),
            };
        }

        let anchor = self.anchor().map(str::to_string);
        Some(Self::from_parts(anchor, body[..body.len() - 1].to_vec()))
    }

    /// The inclusive slice `[start, end]` using signed element indices.
    ///
    /// `None` bounds default to the first and last element. A slice that
    /// starts at the anchor (index `0`) stays absolute; any other slice is
    /// relative. Returns `None` if a bound is out of range or `start` lies
    /// after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("/var/www/html/project").unwrap();
    /// assert_eq!(path.subpath(Some(2), Some(-2)).unwrap().to_string(), "www/html");
    /// assert_eq!(path.subpath(None, Some(2)).unwrap().to_string(), "/var/www");
    /// assert_eq!(path.subpath(Some(-1), None).unwrap().to_string(), "project");
    /// assert!(path.subpath(Some(3), Some(1)).is_none());
    /// ```
    #[must_use]
    pub fn subpath(&self, start: Option<isize>, end: Option<isize>) -> Option<Self> {
        let start = match start {
            Some(index) => self.resolve_index(index)?,
            None => 0,
        };
        let end = match end {
            Some(index) => self.resolve_index(index)?,
            None => self.segments().len() - 1,
        };
        if start > end {
            return None;
        }

        let slice = &self.segments()[start..=end];
        if self.is_absolute() && start == 0 {
            Some(Self::from_parts(Some(slice[0].clone()), slice[1..].to_vec()))
        } else {
            Some(Self::from_parts(None, slice.to_vec()))
        }
    }

    /// Resolve this path against an absolute `base` using the default
    /// normalizer.
    ///
    /// # Errors
    ///
    /// See [`Normalizer::to_absolute`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let base = Path::new("/srv/app").unwrap();
    /// let path = Path::new("public/index.html").unwrap();
    /// assert_eq!(path.to_absolute(&base).unwrap().to_string(), "/srv/app/public/index.html");
    /// ```
    pub fn to_absolute(&self, base: &Path) -> Result<Self> {
        Normalizer::default().to_absolute(self, base)
    }

    /// Express this path relative to an absolute `base`.
    ///
    /// Relative paths are returned unchanged. The base must be a segment-wise
    /// prefix of this path; equal paths give `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolute`] if `base` is relative and
    /// [`Error::NotAParent`] if `base` does not prefix this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let base = Path::new("/srv/app").unwrap();
    /// let path = Path::new("/srv/app/public/index.html").unwrap();
    /// assert_eq!(path.to_relative(&base).unwrap().to_string(), "public/index.html");
    ///
    /// let other = Path::new("/srv/application").unwrap();
    /// assert!(other.to_relative(&base).is_err());
    /// ```
    pub fn to_relative(&self, base: &Path) -> Result<Self> {
        if self.is_relative() {
            return Ok(self.clone());
        }
        if base.is_relative() {
            return Err(Error::NotAbsolute {
                path: base.to_string(),
            });
        }
        if !self.starts_with(base) {
            return Err(Error::NotAParent {
                path: self.to_string(),
                base: base.to_string(),
            });
        }

        let remainder = self.segments()[base.segments().len()..].to_vec();
        Ok(Self::from_parts(None, remainder))
    }

    /// Segment-wise prefix test, anchors included.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("/var/www/html").unwrap();
    /// assert!(path.starts_with(&Path::new("/var/www").unwrap()));
    /// assert!(!path.starts_with(&Path::new("/var/ww").unwrap()));
    /// assert!(!path.starts_with(&Path::new("var").unwrap()));
    /// ```
    #[must_use]
    pub fn starts_with(&self, other: &Path) -> bool {
        self.segments().starts_with(other.segments())
    }

    /// Segment-wise suffix test, anchors included.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("/var/www/html").unwrap();
    /// assert!(path.ends_with(&Path::new("www/html").unwrap()));
    /// assert!(path.ends_with(&Path::new("/var/www/html").unwrap()));
    /// assert!(!path.ends_with(&Path::new("/www/html").unwrap()));
    /// ```
    #[must_use]
    pub fn ends_with(&self, other: &Path) -> bool {
        self.segments().ends_with(other.segments())
    }

    /// Returns `true` if `other` is exactly this path's parent.
    #[must_use]
    pub fn is_child_of(&self, other: &Path) -> bool {
        self.parent().is_some_and(|parent| parent == *other)
    }

    /// Returns `true` if this path is exactly `other`'s parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let parent = Path::new("/home").unwrap();
    /// let child = Path::new("/home/user").unwrap();
    /// assert!(parent.is_parent_of(&child));
    /// assert!(child.is_child_of(&parent));
    /// assert!(!parent.is_parent_of(&Path::new("/home/user/docs").unwrap()));
    /// ```
    #[must_use]
    pub fn is_parent_of(&self, other: &Path) -> bool {
        other.is_child_of(self)
    }

    /// Returns `true` if `other`'s segments occur contiguously in this path.
    #[must_use]
    pub fn includes(&self, other: &Path) -> bool {
        self.first_index_of(other, None).is_some()
    }

    /// Element index of the first occurrence of `needle` at or after `start`.
    ///
    /// The search is over whole segments. An absolute needle can only match
    /// at the anchor. Returns `None` if there is no match or `start` is out
    /// of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("/var/www/html").unwrap();
    /// assert_eq!(path.first_index_of(&Path::new("www").unwrap(), None), Some(2));
    /// assert_eq!(path.first_index_of(&Path::new("/www").unwrap(), None), None);
    /// assert_eq!(path.first_index_of(&Path::new("/var").unwrap(), None), Some(0));
    /// ```
    #[must_use]
    pub fn first_index_of(&self, needle: &Path, start: Option<isize>) -> Option<usize> {
        let from = match start {
            Some(index) => self.resolve_index(index)?,
            None => 0,
        };
        let pattern = needle.segments();

        self.segments()
            .get(from..)?
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|offset| self.position_to_index(from + offset))
    }

    /// Element index of the last occurrence of `needle` starting at or
    /// before `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::new("a/b/c/a/b/c").unwrap();
    /// let needle = Path::new("a/b").unwrap();
    /// assert_eq!(path.first_index_of(&needle, None), Some(1));
    /// assert_eq!(path.last_index_of(&needle, None), Some(4));
    /// assert_eq!(path.last_index_of(&needle, Some(3)), Some(1));
    /// ```
    #[must_use]
    pub fn last_index_of(&self, needle: &Path, end: Option<isize>) -> Option<usize> {
        let pattern = needle.segments();
        let segments = self.segments();
        let last_start = segments.len().checked_sub(pattern.len())?;
        let until = match end {
            Some(index) => self.resolve_index(index)?.min(last_start),
            None => last_start,
        };

        (0..=until)
            .rev()
            .find(|&position| segments[position..position + pattern.len()] == *pattern)
            .map(|position| self.position_to_index(position))
    }

    /// Join any number of parts with the default normalizer.
    ///
    /// # Errors
    ///
    /// See [`Normalizer::join`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let path = Path::join(["vendor", "bin/phpunit"]).unwrap();
    /// assert_eq!(path, Path::new("vendor/bin/phpunit").unwrap());
    /// assert!(Path::join(Vec::<&str>::new()).unwrap().is_current());
    /// ```
    pub fn join<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Normalizer::default().join(parts)
    }

    /// Append `other` to this path with the default normalizer.
    ///
    /// # Errors
    ///
    /// See [`Normalizer::join_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let base = Path::new("/srv/app").unwrap();
    /// let joined = base.join_with(&Path::new("public/index.html").unwrap()).unwrap();
    /// assert_eq!(joined.to_string(), "/srv/app/public/index.html");
    /// ```
    pub fn join_with(&self, other: &Path) -> Result<Self> {
        Normalizer::default().join_with(self, other)
    }

    /// The longest common leading run of segments of `paths`.
    ///
    /// All inputs must agree on absoluteness and, if absolute, on their
    /// anchor. Absolute paths that share only the anchor yield that root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Path;
    ///
    /// let a = Path::new("/var/www/html").unwrap();
    /// let b = Path::new("/var/usr/bin").unwrap();
    /// assert_eq!(Path::find_common_base([&a, &b]).unwrap().to_string(), "/var");
    ///
    /// let c = Path::new("C:/var").unwrap();
    /// assert!(Path::find_common_base([&a, &c]).is_none());
    /// ```
    #[must_use]
    pub fn find_common_base<'a, I>(paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut paths = paths.into_iter();
        let first = paths.next()?;
        let mut common = first.segments().len();

        for path in paths {
            if path.anchor() != first.anchor() {
                return None;
            }
            common = first
                .segments()
                .iter()
                .zip(path.segments())
                .take(common)
                .take_while(|(a, b)| a == b)
                .count();
        }

        if common == 0 {
            return None;
        }
        let shared = &first.segments()[..common];
        if first.is_absolute() {
            Some(Self::from_parts(Some(shared[0].clone()), shared[1..].to_vec()))
        } else {
            Some(Self::from_parts(None, shared.to_vec()))
        }
    }
}

impl Normalizer {
    /// Join parts with `/` and normalize, skipping empty parts.
    ///
    /// With no non-empty parts the result is the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the joined parts are only whitespace
    /// and [`Error::TooManyParentJumps`] under the `Error` policy.
    pub fn join<I, S>(&self, parts: I) -> Result<Path>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parts: Vec<S> = parts
            .into_iter()
            .filter(|part| !part.as_ref().is_empty())
            .collect();
        if parts.is_empty() {
            return Ok(Path::current());
        }

        let joined = parts
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join("/");
        self.parse(&joined)
    }

    /// Append `other` to `path`, resolving only the segments of `other`.
    ///
    /// `path` is already normalized, so a leading run of `..` it retained is
    /// kept. An absolute `other` is appended segment by segment rather than
    /// replacing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyParentJumps`] if `other` climbs past `path`'s
    /// boundary under the `Error` policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{BoundaryPolicy, NormalizeOptions, Normalizer, Path};
    ///
    /// let retain = Normalizer::new(NormalizeOptions {
    ///     boundary: BoundaryPolicy::Retain,
    ///     ..NormalizeOptions::default()
    /// });
    /// let path = retain.parse("../a").unwrap();
    /// let joined = retain.join_with(&path, &Path::new("b").unwrap()).unwrap();
    /// assert_eq!(joined.to_string(), "../a/b");
    ///
    /// let climbing = retain.parse("../../c").unwrap();
    /// assert_eq!(retain.join_with(&path, &climbing).unwrap().to_string(), "../../c");
    /// assert!(Normalizer::default().join_with(&path, &climbing).is_err());
    /// ```
    pub fn join_with(&self, path: &Path, other: &Path) -> Result<Path> {
        let body = if path.is_current() {
            Vec::new()
        } else {
            path.body().to_vec()
        };
        let anchor = path.anchor().map(str::to_string);
        let segments = other.body().iter().map(String::as_str);
        self.resolve_onto(anchor, body, segments, &format!("{path}/{other}"))
    }

    /// Resolve a relative `path` against an absolute `base`, applying this
    /// normalizer's boundary policy to `..` segments that cross into `base`.
    ///
    /// Absolute paths are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolute`] if `base` is relative and
    /// [`Error::TooManyParentJumps`] if `path` climbs past `base`'s root
    /// under the `Error` policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{BoundaryPolicy, NormalizeOptions, Normalizer, Path};
    ///
    /// let retain = Normalizer::new(NormalizeOptions {
    ///     boundary: BoundaryPolicy::Retain,
    ///     ..NormalizeOptions::default()
    /// });
    /// let path = retain.parse("../lib").unwrap();
    /// let base = Path::new("/usr/bin").unwrap();
    /// assert_eq!(retain.to_absolute(&path, &base).unwrap().to_string(), "/usr/lib");
    /// ```
    pub fn to_absolute(&self, path: &Path, base: &Path) -> Result<Path> {
        if path.is_absolute() {
            return Ok(path.clone());
        }
        if base.is_relative() {
            return Err(Error::NotAbsolute {
                path: base.to_string(),
            });
        }

        let segments = base
            .body()
            .iter()
            .chain(path.body())
            .map(String::as_str);
        let anchor = base.anchor().map(str::to_string);
        self.resolve(anchor, segments, &format!("{base}/{path}"))
    }
}
