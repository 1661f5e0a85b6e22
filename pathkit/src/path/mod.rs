//! Lexical path handling.
//!
//! This module parses Unix and DOS path strings into normalized [`Path`]
//! values and provides the operations built on them. Nothing here touches
//! the filesystem.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A path is split on runs of `/` and `\`. Absolute paths keep an anchor
//! segment at element index `0`: `""` for `/`-rooted paths and an upper-case
//! drive token such as `C:` for DOS paths. Element indices are signed:
//! positive indices count from the first non-anchor segment (1-based),
//! negative ones from the last.
//!
//! ## Normalization
//!
//! Normalization:
//! - Drops `.` segments and empty segments
//! - Resolves `..` against the previous segment
//! - Applies a [`BoundaryPolicy`] when a `..` cannot climb further
//! - Renders with one separator, optionally with a trailing separator
//!
//! # Examples
//!
//! ```
//! use pathkit::path::{Normalizer, NormalizeOptions, Path, Separator};
//!
//! let path = Path::new("/var/www/../lib/./node").unwrap();
//! assert_eq!(path.to_string(), "/var/lib/node");
//! assert_eq!(path.get_element(-1), Some("node"));
//!
//! let windows = Normalizer::new(NormalizeOptions {
//!     separator: Separator::Backslash,
//!     ..NormalizeOptions::default()
//! });
//! assert_eq!(windows.normalize("c:/Users//me").unwrap(), "C:\\Users\\me");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use pathkit::path::{Path, PathRelationship};
//!
//! let parent = Path::new("/home/user").unwrap();
//! let child = Path::new("/home/user/project").unwrap();
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod expand;
mod model;
pub mod normalize;
mod ops;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use expand::{EnvLookup, Expander, MapEnv, ProcessEnv};
pub use model::{classify, Path, Segments};
pub use normalize::{NormalizeOptions, Normalizer};
pub use relationship::PathRelationship;
pub use types::{BoundaryPolicy, FormatOptions, PathKind, Separator};
