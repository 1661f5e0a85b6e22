#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A library for lexical manipulation of path strings.
//!
//! `pathkit` parses Unix-style, DOS-style, relative and root paths into an
//! immutable segment model and offers normalization, indexed access and
//! derived operations on top of it. It never touches the filesystem.
//!
//! ## Core Types
//!
//! - [`Path`]: a normalized path with signed, anchor-based indexing
//! - [`Normalizer`] and [`NormalizeOptions`]: configurable normalization
//! - [`BoundaryPolicy`]: what happens when `..` climbs too far
//! - [`PathRelationship`]: ancestor/descendant classification
//! - [`config::PathConfig`]: YAML and environment driven options
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pathkit::Path;
//!
//! let path = Path::new("/var/www/html").unwrap();
//! assert_eq!(path.first_index_of(&Path::new("www").unwrap(), None), Some(2));
//!
//! let joined = Path::join(["vendor", "bin/phpunit"]).unwrap();
//! assert_eq!(joined.to_string(), "vendor/bin/phpunit");
//!
//! let a = Path::new("/var/www/html").unwrap();
//! let b = Path::new("/var/usr/bin").unwrap();
//! assert_eq!(Path::find_common_base([&a, &b]).unwrap().to_string(), "/var");
//! ```

pub mod config;
pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, ConfigLoader, PathConfig};
pub use error::{Error, Result};
pub use path::{
    BoundaryPolicy, EnvLookup, Expander, FormatOptions, MapEnv, NormalizeOptions, Normalizer,
    Path, PathKind, PathRelationship, ProcessEnv, Separator,
};
