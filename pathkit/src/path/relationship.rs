//! Path relationship checking.
//!
//! This module classifies how two normalized paths relate to each other in
//! the hierarchy: one is an ancestor of the other, a descendant, the same
//! path, or unrelated. Comparison is segment-wise, so `/a` is not an ancestor
//! of `/ab`.

use crate::path::model::{Path, PARENT_DIR};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathkit::{Path, PathRelationship};
///
/// let parent = Path::new("/home/user").unwrap();
/// let child = Path::new("/home/user/project").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths have identical segments.
    Same,

    /// Neither path is a prefix of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Paths of different kinds (absolute against relative, or different
    /// anchors) are always unrelated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Path, PathRelationship};
    ///
    /// let a = Path::new("/a").unwrap();
    /// let ab = Path::new("/a/b").unwrap();
    /// let b = Path::new("/b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if is_prefix(path1, path2) {
            return Self::Ancestor;
        }

        if is_prefix(path2, path1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Returns `true` for `Ancestor`, `Descendant` or `Same`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Path, PathRelationship};
    ///
    /// let dir = Path::new("/home/user").unwrap();
    /// let file = Path::new("/home/user/file.txt").unwrap();
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, directory: &Path) -> bool {
        let rel = Self::between(path, directory);
        matches!(rel, Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &Path, other: &Path) -> bool {
        let rel = Self::between(path, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

/// `.` sits above every relative path that does not climb out with `..`,
/// matching where [`Path::parent`] chains end.
fn is_prefix(ancestor: &Path, path: &Path) -> bool {
    if ancestor.is_current() {
        return path.is_relative()
            && !path.is_current()
            && path.segments().first().is_some_and(|first| first != PARENT_DIR);
    }
    path.starts_with(ancestor)
}
