use std::fmt;

use serde::{Deserialize, Serialize};

/// Single configuration entry from the base environment.
///
/// The value may be empty: a line that carries only a key is a flag-only entry.
/// Neither field is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    /// Name of the variable.
    key: String,
    /// Raw value, exactly as read.
    value: String,
}

impl KeyValue {
    /// Create a new key–value pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Split a `KEY=VALUE` line on the first `=`.
    ///
    /// A line without `=` becomes a flag-only entry with an empty value.
    pub fn parse(line: &str) -> Self {
        match line.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self::new(line, ""),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` for flag-only entries.
    pub fn is_flag(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value, keeping the key.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Render as a `KEY=VALUE` assignment, the shape containers receive.
    pub fn assignment(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl From<(String, String)> for KeyValue {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}
