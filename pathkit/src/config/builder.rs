//! Layered configuration building.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::PathConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::{EnvLookup, NormalizeOptions, ProcessEnv};

/// Builds a [`PathConfig`] from YAML documents, the environment and
/// programmatic overrides.
///
/// Sources are applied lowest precedence first: YAML documents in the order
/// they were added, then `PATHKIT_*` variables, then overrides passed to
/// [`ConfigBuilder::with_config`].
///
/// # Examples
///
/// ```
/// use pathkit::config::ConfigBuilder;
/// use pathkit::{BoundaryPolicy, MapEnv, PathConfig, Separator};
///
/// let env = MapEnv::new().with("PATHKIT_TRAILING_SLASH", "on");
/// let options = ConfigBuilder::new()
///     .with_yaml("separator: '\\'\nboundary_policy: clamp")
///     .with_env(&env)
///     .with_config(PathConfig { boundary_policy: Some(BoundaryPolicy::Retain), ..Default::default() })
///     .build_options()
///     .unwrap();
///
/// assert_eq!(options.separator, Separator::Backslash);
/// assert!(options.trailing_slash);
/// assert_eq!(options.boundary, BoundaryPolicy::Retain);
/// ```
pub struct ConfigBuilder<'a> {
    documents: Vec<String>,
    env: Option<&'a dyn EnvLookup>,
    skip_env: bool,
    overrides: Vec<PathConfig>,
}

impl Default for ConfigBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConfigBuilder<'a> {
    /// A builder that reads the process environment and no documents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            env: None,
            skip_env: false,
            overrides: Vec::new(),
        }
    }

    /// Add a YAML document; later documents override earlier ones.
    #[must_use]
    pub fn with_yaml(mut self, contents: impl Into<String>) -> Self {
        self.documents.push(contents.into());
        self
    }

    /// Read `PATHKIT_*` variables from `env` instead of the process.
    #[must_use]
    pub fn with_env(mut self, env: &'a dyn EnvLookup) -> Self {
        self.env = Some(env);
        self.skip_env = false;
        self
    }

    /// Ignore environment variables entirely.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: PathConfig) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a document fails to parse, an environment
    /// variable is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<PathConfig> {
        let mut config = PathConfig::default();

        for (i, document) in self.documents.iter().enumerate() {
            config.merge(&ConfigLoader::from_yaml_str(document)?);
            log::debug!("applied configuration document {i}");
        }

        if !self.skip_env {
            let env = self.env.unwrap_or(&ProcessEnv);
            EnvironmentConfig::apply_overrides(&mut config, env)?;
        }

        for over in &self.overrides {
            config.merge(over);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// [`build`](Self::build) and convert into [`NormalizeOptions`].
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_options(self) -> Result<NormalizeOptions> {
        self.build()?.into_options()
    }
}
