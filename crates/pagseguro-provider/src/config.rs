//! Application configuration.
//!
//! Values live in a JSON tree and are looked up by dotted key
//! (`pagseguro.email` reads `{"pagseguro": {"email": ...}}`).

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Candidate locations of the secrets file, tried in order.
pub const SECRET_PATHS: [&str; 2] = [".secrets/pagseguro.json", "../.secrets/pagseguro.json"];

/// Environment variables that override file values, as `(variable, key)`.
pub const ENV_OVERRIDES: [(&str, &str); 2] = [
    ("PAGSEGURO_EMAIL", "pagseguro.email"),
    ("PAGSEGURO_TOKEN", "pagseguro.token"),
];

/// Key lookup over application configuration.
pub trait ConfigSource: Send + Sync {
    /// Read a string value by dotted key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the key is absent and
    /// [`ConfigError::InvalidType`] if it does not hold a string.
    fn get(&self, key: &str) -> Result<String, ConfigError>;
}

/// JSON-backed configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    values: Map<String, Value>,
}

impl AppConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file whose root is an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let values = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { values })
    }

    /// Load configuration from the secrets file and environment variables.
    ///
    /// The first file in [`SECRET_PATHS`] that exists and parses is used;
    /// variables in [`ENV_OVERRIDES`] then take precedence over its values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::load(&SECRET_PATHS, |name| std::env::var(name).ok())
    }

    /// Load configuration from the given secrets files and an environment lookup.
    #[must_use]
    pub fn load<P: AsRef<Path>>(
        secret_paths: &[P],
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::new();

        for path in secret_paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(loaded) => {
                    tracing::info!(path = %path.display(), "Loaded PagSeguro secrets from file");
                    config = loaded;
                    break;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring unreadable secrets file");
                }
            }
        }

        for (variable, key) in ENV_OVERRIDES {
            if let Some(value) = env(variable) {
                tracing::debug!(variable, key, "Configuration overridden from environment");
                config.set(key, value);
            }
        }

        config
    }

    /// Set a value, creating intermediate objects as needed.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut segments = key.split('.').peekable();
        let mut current = &mut self.values;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value.into());
                return;
            }

            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(map) = entry else {
                return;
            };
            current = map;
        }
    }

    /// Builder form of [`AppConfig::set`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a raw value by dotted key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = self.values.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.get(segment))
    }
}

impl ConfigSource for AppConfig {
    fn get(&self, key: &str) -> Result<String, ConfigError> {
        match self.value(key) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(ConfigError::InvalidType {
                key: key.to_string(),
            }),
            None => Err(ConfigError::MissingKey(key.to_string())),
        }
    }
}
