//! Provider options: the string-keyed configuration handed to provider factories.

use std::collections::HashMap;

use serde_json::Value;

use crate::translator::ConfigError;

/// Option key holding the provider's API key.
pub const OPTION_API_KEY: &str = "apikey";

/// Option key overriding the provider's base URL.
pub const OPTION_URL: &str = "url";

/// Option key setting the HTTP timeout in seconds.
pub const OPTION_TIMEOUT_SECS: &str = "timeout_secs";

/// Configuration mapping passed to a provider factory.
///
/// Values are untyped JSON; factories read them through the typed accessors,
/// which report a `ConfigError` instead of panicking on a missing key or a
/// value of the wrong type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOptions {
    values: HashMap<String, Value>,
}

impl ProviderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// A required, non-blank string option.
    pub fn require_str(&self, key: &str) -> Result<&str, ConfigError> {
        let value = self
            .get_str(key)?
            .ok_or_else(|| ConfigError::MissingOption(key.to_string()))?;

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                key: key.to_string(),
                expected: "a non-empty string",
            });
        }

        Ok(value)
    }

    /// An optional string option; present values of another type are an error.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ConfigError::InvalidOption {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }

    /// An optional non-negative integer option.
    pub fn get_u64(&self, key: &str) -> Result<Option<u64>, ConfigError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| ConfigError::InvalidOption {
                key: key.to_string(),
                expected: "a non-negative integer",
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ProviderOptions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
