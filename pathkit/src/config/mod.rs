//! Configuration for pathkit.
//!
//! Normalization options can be described in YAML documents, overridden by
//! `PATHKIT_*` environment variables and finally by programmatic values.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_*`)
//! 3. YAML documents, later ones first
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathkit::config::ConfigLoader;
//! use pathkit::Normalizer;
//!
//! let config = ConfigLoader::from_yaml_str("separator: '\\'\ntrailing_slash: true").unwrap();
//! let normalizer = Normalizer::new(config.into_options().unwrap());
//! assert_eq!(normalizer.normalize("/a/b/../c").unwrap(), "\\a\\c\\");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::PathConfig;
pub use validator::ConfigValidator;
