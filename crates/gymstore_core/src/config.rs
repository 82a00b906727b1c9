//! Store configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the bulk-load document.
pub const INIT_FILE_ENV: &str = "GYMSTORE_INIT_FILE";

/// Environment variable toggling strict field checking (`true`/`false`).
pub const STRICT_FIELDS_ENV: &str = "GYMSTORE_STRICT_FIELDS";

/// Configuration for opening a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Document to bulk load at startup. `None` starts empty.
    pub init_file: Option<PathBuf>,

    /// Whether document entries with undeclared fields are rejected.
    pub strict_fields: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            init_file: None,
            strict_fields: true,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the process environment.
    ///
    /// An empty `GYMSTORE_INIT_FILE` is treated as unset. Unparsable
    /// `GYMSTORE_STRICT_FIELDS` values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            init_file: lookup(INIT_FILE_ENV)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            strict_fields: lookup(STRICT_FIELDS_ENV)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.strict_fields),
        }
    }

    /// Sets the bulk-load document.
    #[must_use]
    pub fn init_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.init_file = Some(path.into());
        self
    }

    /// Sets whether undeclared fields are rejected.
    #[must_use]
    pub const fn strict_fields(mut self, value: bool) -> Self {
        self.strict_fields = value;
        self
    }
}
