//! Environment variable handling for configuration overrides.
//!
//! `PATHKIT_*` variables override values from configuration documents. The
//! environment is read through [`EnvLookup`] so tests can supply a fixed map.

use crate::config::schema::PathConfig;
use crate::error::{Error, Result};
use crate::path::{BoundaryPolicy, EnvLookup};

/// Overrides the output separator (`/` or `\`).
pub const SEPARATOR_VAR: &str = "PATHKIT_SEPARATOR";

/// Overrides the trailing-slash policy.
pub const TRAILING_SLASH_VAR: &str = "PATHKIT_TRAILING_SLASH";

/// Overrides the boundary policy (`error`, `clamp` or `retain`).
pub const BOUNDARY_POLICY_VAR: &str = "PATHKIT_BOUNDARY_POLICY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```
/// use pathkit::config::EnvironmentConfig;
/// use pathkit::{BoundaryPolicy, MapEnv, PathConfig};
///
/// let env = MapEnv::new().with("PATHKIT_BOUNDARY_POLICY", "clamp");
/// let mut config = PathConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config, &env).unwrap();
/// assert_eq!(config.boundary_policy, Some(BoundaryPolicy::Clamp));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// Variable names are matched case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value is
    /// invalid (a separator that is not a single character, an unknown
    /// boolean or an unknown policy).
    pub fn apply_overrides(
        config: &mut PathConfig,
        env: &(impl EnvLookup + ?Sized),
    ) -> Result<()> {
        if let Some(val) = env.lookup(SEPARATOR_VAR, true) {
            config.separator = Some(Self::parse_separator(SEPARATOR_VAR, &val)?);
            log::debug!("{SEPARATOR_VAR} overrides separator");
        }

        if let Some(val) = env.lookup(TRAILING_SLASH_VAR, true) {
            config.trailing_slash = Some(Self::parse_bool(TRAILING_SLASH_VAR, &val)?);
            log::debug!("{TRAILING_SLASH_VAR} overrides trailing_slash");
        }

        if let Some(val) = env.lookup(BOUNDARY_POLICY_VAR, true) {
            config.boundary_policy = Some(BoundaryPolicy::parse(BOUNDARY_POLICY_VAR, &val)?);
            log::debug!("{BOUNDARY_POLICY_VAR} overrides boundary_policy");
        }

        Ok(())
    }

    fn parse_separator(field: &str, s: &str) -> Result<char> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid separator: '{s}' (expected a single character)"),
            }),
        }
    }

    /// Parse boolean from string (supports multiple formats).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::MapEnv;

    #[test]
    fn test_no_variables_leaves_config_untouched() {
        let mut config = PathConfig {
            separator: Some('\\'),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config, &MapEnv::new()).unwrap();
        assert_eq!(config.separator, Some('\\'));
        assert_eq!(config.trailing_slash, None);
    }

    #[test]
    fn test_all_overrides() {
        let env = MapEnv::new()
            .with("PATHKIT_SEPARATOR", "\\")
            .with("PATHKIT_TRAILING_SLASH", "yes")
            .with("PATHKIT_BOUNDARY_POLICY", "Retain");
        let mut config = PathConfig::default();
        EnvironmentConfig::apply_overrides(&mut config, &env).unwrap();
        assert_eq!(config.separator, Some('\\'));
        assert_eq!(config.trailing_slash, Some(true));
        assert_eq!(config.boundary_policy, Some(BoundaryPolicy::Retain));
    }

    #[test]
    fn test_variable_names_are_case_sensitive() {
        let env = MapEnv::new().with("pathkit_trailing_slash", "true");
        let mut config = PathConfig::default();
        EnvironmentConfig::apply_overrides(&mut config, &env).unwrap();
        assert_eq!(config.trailing_slash, None);
    }

    #[test]
    fn test_invalid_separator_names_variable() {
        let env = MapEnv::new().with("PATHKIT_SEPARATOR", "//");
        let err = EnvironmentConfig::apply_overrides(&mut PathConfig::default(), &env).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "PATHKIT_SEPARATOR"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_bool_names_variable() {
        let env = MapEnv::new().with("PATHKIT_TRAILING_SLASH", "maybe");
        let err = EnvironmentConfig::apply_overrides(&mut PathConfig::default(), &env).unwrap_err();
        assert!(err.to_string().contains("PATHKIT_TRAILING_SLASH"));
    }

    #[test]
    fn test_invalid_policy_names_variable() {
        let env = MapEnv::new().with("PATHKIT_BOUNDARY_POLICY", "wrap");
        let err = EnvironmentConfig::apply_overrides(&mut PathConfig::default(), &env).unwrap_err();
        assert!(err.to_string().contains("PATHKIT_BOUNDARY_POLICY"));
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for val in ["true", "TRUE", "1", "yes", "Yes", "on", " on "] {
            assert!(EnvironmentConfig::parse_bool("test", val).unwrap(), "{val}");
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for val in ["false", "False", "0", "no", "NO", "off"] {
            assert!(!EnvironmentConfig::parse_bool("test", val).unwrap(), "{val}");
        }
    }

    #[test]
    fn test_parse_separator() {
        assert_eq!(EnvironmentConfig::parse_separator("s", "/").unwrap(), '/');
        assert_eq!(EnvironmentConfig::parse_separator("s", " \\ ").unwrap(), '\\');
        assert!(EnvironmentConfig::parse_separator("s", "").is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_bool_parsing_rejects_garbage(s in "[a-z]{6,12}") {
                prop_assert!(EnvironmentConfig::parse_bool("test", &s).is_err());
            }

            #[test]
            fn prop_bool_parsing_ignores_case(upper in proptest::bool::ANY) {
                let word = if upper { "ON" } else { "off" };
                prop_assert_eq!(EnvironmentConfig::parse_bool("test", word).unwrap(), upper);
            }
        }
    }
}
