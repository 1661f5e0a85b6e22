//! Environment-variable expansion.
//!
//! Two syntaxes are recognized:
//! - `%NAME%`, looked up case-insensitively (Windows style)
//! - `$NAME`, looked up case-sensitively and ending at `/`, `\`, `$` or the
//!   end of the input (Unix style)
//!
//! Values come first from an optional override map and then from an
//! [`EnvLookup`] supplied by the caller. Nothing in this module reads the
//! process environment unless the caller passes [`ProcessEnv`].

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::path::model::Path;
use crate::path::normalize::Normalizer;
use crate::path::types::Separator;

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([^%/\\]+)%|\$([^/\\$]+)").expect("variable pattern is valid")
});

/// Source of environment variable values.
///
/// Implemented for closures of the shape `Fn(&str, bool) -> Option<String>`,
/// for [`MapEnv`] and for [`ProcessEnv`].
///
/// # Examples
///
/// ```
/// use pathkit::path::expand::EnvLookup;
///
/// let env = |name: &str, _case_sensitive: bool| -> Option<String> {
///     (name == "HOME").then(|| "/home/me".to_string())
/// };
/// assert_eq!(env.lookup("HOME", true).as_deref(), Some("/home/me"));
/// assert_eq!(env.home_dir().as_deref(), Some("/home/me"));
/// ```
pub trait EnvLookup {
    /// Look up `name`, comparing names case-sensitively if requested.
    fn lookup(&self, name: &str, case_sensitive: bool) -> Option<String>;

    /// The user's home directory, used for `~` expansion.
    fn home_dir(&self) -> Option<String> {
        self.lookup("HOME", true)
            .or_else(|| self.lookup("USERPROFILE", false))
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str, bool) -> Option<String>,
{
    fn lookup(&self, name: &str, case_sensitive: bool) -> Option<String> {
        self(name, case_sensitive)
    }
}

/// An in-memory environment.
///
/// # Examples
///
/// ```
/// use pathkit::path::expand::{EnvLookup, MapEnv};
///
/// let env = MapEnv::new().with("AppData", "C:/Users/me/AppData");
/// assert!(env.lookup("APPDATA", false).is_some());
/// assert!(env.lookup("APPDATA", true).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// An empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvLookup for MapEnv {
    fn lookup(&self, name: &str, case_sensitive: bool) -> Option<String> {
        lookup_in(&self.vars, name, case_sensitive)
    }
}

/// The environment of the running process.
///
/// `home_dir` is answered by the `home` crate, so it works even when `HOME`
/// is unset on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str, case_sensitive: bool) -> Option<String> {
        if case_sensitive {
            return std::env::var(name).ok();
        }
        let vars: HashMap<String, String> = std::env::vars().collect();
        lookup_in(&vars, name, false)
    }

    fn home_dir(&self) -> Option<String> {
        home::home_dir().and_then(|home| home.to_str().map(str::to_string))
    }
}

/// An exact key wins; among keys differing only in case the smallest one
/// is used, so the answer never depends on map iteration order.
fn lookup_in(vars: &HashMap<String, String>, name: &str, case_sensitive: bool) -> Option<String> {
    if let Some(value) = vars.get(name) {
        return Some(value.clone());
    }
    if case_sensitive {
        return None;
    }
    vars.iter()
        .filter(|(key, _)| key.eq_ignore_ascii_case(name))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, value)| value.clone())
}

/// Expands variables in path strings and normalizes the result.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pathkit::path::expand::{Expander, MapEnv};
///
/// let env = MapEnv::new().with("HOME", "/home/me").with("AppData", "C:/Roaming");
/// let overrides = HashMap::from([("PROJECT".to_string(), "demo".to_string())]);
///
/// let expander = Expander::new(&env).with_overrides(&overrides);
/// assert_eq!(expander.expand("$HOME/src/$PROJECT").unwrap().to_string(), "/home/me/src/demo");
/// assert_eq!(expander.expand("%APPDATA%\\app").unwrap().to_string(), "C:/Roaming/app");
/// ```
#[derive(Clone, Copy)]
pub struct Expander<'a> {
    env: &'a dyn EnvLookup,
    overrides: Option<&'a HashMap<String, String>>,
    tilde: bool,
    normalizer: Normalizer,
}

impl<'a> Expander<'a> {
    /// An expander reading from `env`, with no overrides and no `~`
    /// expansion.
    #[must_use]
    pub fn new(env: &'a dyn EnvLookup) -> Self {
        Self {
            env,
            overrides: None,
            tilde: false,
            normalizer: Normalizer::default(),
        }
    }

    /// Consult `overrides` before the environment.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &'a HashMap<String, String>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Expand a leading `~` (or `~/`) to the lookup's home directory.
    ///
    /// `~user` forms are left untouched.
    #[must_use]
    pub fn with_tilde(mut self, tilde: bool) -> Self {
        self.tilde = tilde;
        self
    }

    /// Normalize results with `normalizer` instead of the default.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Substitute variables without normalizing.
    ///
    /// Unknown variables become the empty string.
    #[must_use]
    pub fn substitute(&self, raw: &str) -> String {
        let raw = if self.tilde {
            self.expand_tilde(raw)
        } else {
            raw.to_string()
        };

        VARIABLE
            .replace_all(&raw, |caps: &Captures<'_>| {
                let (name, case_sensitive) = match (caps.get(1), caps.get(2)) {
                    (Some(name), _) => (name.as_str(), false),
                    (None, Some(name)) => (name.as_str(), true),
                    (None, None) => return String::new(),
                };
                self.value_of(name, case_sensitive).unwrap_or_else(|| {
                    log::debug!("variable {name} is not set; expanding to empty");
                    String::new()
                })
            })
            .into_owned()
    }

    /// Substitute variables and normalize the result.
    ///
    /// An expansion that leaves nothing but whitespace is the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TooManyParentJumps`] if the expanded path
    /// climbs past its boundary under the `Error` policy.
    pub fn expand(&self, raw: &str) -> Result<Path> {
        let substituted = self.substitute(raw);
        if substituted.trim().is_empty() {
            return Ok(Path::current());
        }
        self.normalizer.parse(&substituted)
    }

    fn value_of(&self, name: &str, case_sensitive: bool) -> Option<String> {
        self.overrides
            .and_then(|overrides| lookup_in(overrides, name, case_sensitive))
            .or_else(|| self.env.lookup(name, case_sensitive))
    }

    fn expand_tilde(&self, raw: &str) -> String {
        let rest = match raw.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with(Separator::is_separator) => rest,
            _ => return raw.to_string(),
        };
        match self.env.home_dir() {
            Some(home) => format!("{home}{rest}"),
            None => raw.to_string(),
        }
    }
}

/// Expand `%NAME%` and `$NAME` in `raw` and normalize with default options.
///
/// # Errors
///
/// See [`Expander::expand`].
///
/// # Examples
///
/// ```
/// use pathkit::path::expand::{expand, MapEnv};
///
/// let env = MapEnv::new().with("ROOT", "/srv");
/// assert_eq!(expand("$ROOT/$MISSING/www", None, &env).unwrap().to_string(), "/srv/www");
/// ```
pub fn expand(
    raw: &str,
    overrides: Option<&HashMap<String, String>>,
    env: &dyn EnvLookup,
) -> Result<Path> {
    let expander = Expander::new(env);
    match overrides {
        Some(overrides) => expander.with_overrides(overrides).expand(raw),
        None => expander.expand(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> MapEnv {
        MapEnv::new()
            .with("HOME", "/home/user")
            .with("ProgramFiles", "C:\\Program Files")
            .with("APP", "demo")
            .with("app", "lower")
    }

    #[test]
    fn test_unix_variables_are_case_sensitive() {
        let env = env();
        assert_eq!(expand("$APP/x", None, &env).unwrap().to_string(), "demo/x");
        assert_eq!(expand("$app/x", None, &env).unwrap().to_string(), "lower/x");
        assert_eq!(expand("$App/x", None, &env).unwrap().to_string(), "/x");
    }

    #[test]
    fn test_windows_variables_are_case_insensitive() {
        let env = MapEnv::new().with("ProgramFiles", "C:\\Program Files");
        let path = expand("%PROGRAMFILES%\\Tool\\bin", None, &env).unwrap();
        assert_eq!(path.to_string(), "C:/Program Files/Tool/bin");
    }

    #[test]
    fn test_case_insensitive_lookup_is_deterministic() {
        let env = env();
        assert_eq!(env.lookup("APP", false).as_deref(), Some("demo"));
        assert_eq!(env.lookup("app", false).as_deref(), Some("lower"));
        for _ in 0..50 {
            let fresh = MapEnv::new().with("app", "lower").with("APP", "upper");
            assert_eq!(
                expand("%App%", None, &fresh).unwrap().to_string(),
                "upper",
                "the smallest matching key wins"
            );
        }
    }

    #[test]
    fn test_case_insensitive_overrides_are_deterministic() {
        let overrides: HashMap<String, String> = [("Root", "/b"), ("ROOT", "/a"), ("root", "/c")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let env = MapEnv::new();
        let path = expand("%rOOT%/x", Some(&overrides), &env).unwrap();
        assert_eq!(path.to_string(), "/a/x");
        let path = expand("%Root%/x", Some(&overrides), &env).unwrap();
        assert_eq!(path.to_string(), "/b/x");
    }

    #[test]
    fn test_dollar_name_terminators() {
        let env = MapEnv::new().with("A", "one").with("B", "two");
        let expander = Expander::new(&env);
        assert_eq!(expander.substitute("$A$B"), "onetwo");
        assert_eq!(expander.substitute("$A/$B"), "one/two");
        assert_eq!(expander.substitute("$A\\x"), "one\\x");
        assert_eq!(expander.substitute("x/$"), "x/$");
    }

    #[test]
    fn test_unterminated_percent_is_literal() {
        let env = MapEnv::new();
        let expander = Expander::new(&env);
        assert_eq!(expander.substitute("50%/done"), "50%/done");
        assert_eq!(expander.substitute("%%"), "%%");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let env = env();
        let overrides = HashMap::from([("HOME".to_string(), "/override".to_string())]);
        let path = expand("$HOME/.config", Some(&overrides), &env).unwrap();
        assert_eq!(path.to_string(), "/override/.config");

        let path = expand("%home%/.config", Some(&overrides), &env).unwrap();
        assert_eq!(path.to_string(), "/override/.config");
    }

    #[test]
    fn test_unknown_variable_expands_to_empty() {
        let env = MapEnv::new();
        assert_eq!(expand("/a/$NOPE/b", None, &env).unwrap().to_string(), "/a/b");
        assert!(expand("$NOPE", None, &env).unwrap().is_current());
    }

    #[test]
    fn test_expansion_is_normalized() {
        let env = MapEnv::new().with("UP", "..");
        let err = expand("/$UP", None, &env).unwrap_err();
        assert!(err.is_too_many_parent_jumps());
        assert_eq!(expand("/a/b/$UP", None, &env).unwrap().to_string(), "/a");
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |name: &str, case_sensitive: bool| -> Option<String> {
            let matches = if case_sensitive {
                name == "DIR"
            } else {
                name.eq_ignore_ascii_case("dir")
            };
            matches.then(|| "/data".to_string())
        };
        assert_eq!(expand("$DIR/x", None, &lookup).unwrap().to_string(), "/data/x");
        assert_eq!(expand("%dir%/x", None, &lookup).unwrap().to_string(), "/data/x");
    }

    #[test]
    fn test_tilde_expansion() {
        let env = env();
        let expander = Expander::new(&env).with_tilde(true);
        assert_eq!(expander.expand("~").unwrap().to_string(), "/home/user");
        assert_eq!(expander.expand("~/src").unwrap().to_string(), "/home/user/src");
        assert_eq!(expander.expand("~other/src").unwrap().to_string(), "~other/src");

        let off = Expander::new(&env);
        assert_eq!(off.expand("~/src").unwrap().to_string(), "~/src");
    }

    #[test]
    fn test_tilde_without_home_is_literal() {
        let env = MapEnv::new();
        let expander = Expander::new(&env).with_tilde(true);
        assert_eq!(expander.substitute("~/x"), "~/x");
    }

    #[test]
    fn test_home_dir_falls_back_to_userprofile() {
        let env = MapEnv::new().with("UserProfile", "C:\\Users\\me");
        assert_eq!(env.home_dir().as_deref(), Some("C:\\Users\\me"));
    }

    #[test]
    fn test_map_env_from_iterator() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.lookup("A", true).as_deref(), Some("1"));
        assert_eq!(env.lookup("b", false).as_deref(), Some("2"));
    }

    #[test]
    fn test_process_env_case_sensitive_lookup_matches_std() {
        let key = "PATH";
        assert_eq!(ProcessEnv.lookup(key, true), std::env::var(key).ok());
    }
}
