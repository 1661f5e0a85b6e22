//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathkit: the separator
//! used on output, the trailing-slash policy and the `..` boundary policy.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::{BoundaryPolicy, NormalizeOptions, Separator};

/// Normalization configuration.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to [`crate::NormalizeOptions`]
/// defaults.
///
/// # Examples
///
/// ```
/// use pathkit::{BoundaryPolicy, PathConfig};
///
/// let config = PathConfig {
///     separator: Some('\\'),
///     boundary_policy: Some(BoundaryPolicy::Clamp),
///     ..Default::default()
/// };
/// assert_eq!(config.trailing_slash, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathConfig {
    /// Separator used when rendering paths (`/` or `\`).
    pub separator: Option<char>,

    /// Whether rendered paths end with a separator.
    pub trailing_slash: Option<bool>,

    /// Behavior for `..` segments that cannot climb further.
    pub boundary_policy: Option<BoundaryPolicy>,
}

impl PathConfig {
    /// Merge `source` into `self`; fields set in `source` win.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PathConfig;
    ///
    /// let mut low = PathConfig { separator: Some('/'), trailing_slash: Some(true), ..Default::default() };
    /// let high = PathConfig { separator: Some('\\'), ..Default::default() };
    ///
    /// low.merge(&high);
    /// assert_eq!(low.separator, Some('\\'));
    /// assert_eq!(low.trailing_slash, Some(true));
    /// ```
    pub fn merge(&mut self, source: &PathConfig) {
        if source.separator.is_some() {
            self.separator = source.separator;
        }

        if source.trailing_slash.is_some() {
            self.trailing_slash = source.trailing_slash;
        }

        if source.boundary_policy.is_some() {
            self.boundary_policy = source.boundary_policy;
        }
    }

    /// Resolve this configuration into normalizer options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSeparator`] if the configured separator
    /// is neither `/` nor `\`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{PathConfig, Separator};
    ///
    /// let options = PathConfig { separator: Some('\\'), ..Default::default() }
    ///     .into_options()
    ///     .unwrap();
    /// assert_eq!(options.separator, Separator::Backslash);
    /// assert!(!options.trailing_slash);
    ///
    /// assert!(PathConfig { separator: Some(':'), ..Default::default() }.into_options().is_err());
    /// ```
    pub fn into_options(self) -> Result<NormalizeOptions> {
        let defaults = NormalizeOptions::default();
        let separator = match self.separator {
            Some(c) => Separator::try_from(c)?,
            None => defaults.separator,
        };

        Ok(NormalizeOptions {
            separator,
            trailing_slash: self.trailing_slash.unwrap_or(defaults.trailing_slash),
            boundary: self.boundary_policy.unwrap_or(defaults.boundary),
        })
    }
}
