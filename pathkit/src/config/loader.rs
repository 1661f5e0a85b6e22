//! Configuration loading.
//!
//! Configuration documents are YAML. The loader only parses text handed to
//! it; locating and opening configuration files is left to the caller.

use std::io::Read;

use crate::config::schema::PathConfig;
use crate::error::Result;

/// Loads configuration documents.
///
/// # Examples
///
/// ```
/// use pathkit::{BoundaryPolicy, ConfigLoader};
///
/// let config = ConfigLoader::from_yaml_str("boundary_policy: clamp").unwrap();
/// assert_eq!(config.boundary_policy, Some(BoundaryPolicy::Clamp));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a YAML document. Blank documents yield the default config.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if the YAML is invalid or
    /// contains unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<PathConfig> {
        if contents.trim().is_empty() {
            return Ok(PathConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Read and parse a YAML document from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if reading fails and
    /// [`crate::Error::Configuration`] if the YAML is invalid.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<PathConfig> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::from_yaml_str(&contents)
    }
}
