//! Configuration validation.
//!
//! Deserialization already rejects unknown fields and policies; this module
//! checks the values serde cannot.

use crate::config::schema::PathConfig;
use crate::error::Result;
use crate::path::Separator;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathkit::config::ConfigValidator;
/// use pathkit::PathConfig;
///
/// ConfigValidator::validate(&PathConfig::default()).unwrap();
///
/// let bad = PathConfig { separator: Some(':'), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// A bad separator is reported as [`crate::Error::InvalidSeparator`], the same
    /// kind [`PathConfig::into_options`] returns.
    ///
    /// # Errors
    ///
    /// Returns the error for the first invalid field.
    pub fn validate(config: &PathConfig) -> Result<()> {
        if let Some(separator) = config.separator {
            Separator::try_from(separator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::BoundaryPolicy;

    #[test]
    fn test_validate_default() {
        assert!(ConfigValidator::validate(&PathConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_full() {
        let config = PathConfig {
            separator: Some('\\'),
            trailing_slash: Some(true),
            boundary_policy: Some(BoundaryPolicy::Retain),
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_bad_separator() {
        let config = PathConfig {
            separator: Some('.'),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidSeparator { separator: '.' }));

        let from_options = config.into_options().unwrap_err();
        assert!(matches!(from_options, Error::InvalidSeparator { separator: '.' }));
    }
}
