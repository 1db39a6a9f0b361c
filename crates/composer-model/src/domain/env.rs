use serde::{Deserialize, Serialize};

use crate::KeyValue;

/// Ordered environment with unique keys.
///
/// Entries keep the order in which their keys were first inserted, so
/// serializing the environment into a service definition is deterministic.
/// Serialized as a transparent array of [`KeyValue`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env(Vec<KeyValue>);

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an environment containing a single entry.
    pub fn single<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(vec![KeyValue::new(key, value)])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.0.iter()
    }

    /// Returns `true` if the key is present (flag-only entries included).
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|kv| kv.key() == key)
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|kv| kv.key() == key).map(|kv| kv.value())
    }

    /// Get the value for a key, or `""` when it is missing.
    pub fn value_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Insert or overwrite an entry.
    ///
    /// Overwriting keeps the entry at its original position.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        match self.0.iter_mut().find(|kv| kv.key() == key) {
            Some(existing) => existing.set_value(value),
            None => self.0.push(KeyValue::new(key, value)),
        }
    }

    /// Render every entry as `KEY=VALUE`, in insertion order.
    pub fn assignments(&self) -> Vec<String> {
        self.0.iter().map(KeyValue::assignment).collect()
    }
}

impl FromIterator<KeyValue> for Env {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        let mut env = Env::new();
        for kv in iter {
            env.set(kv.key(), kv.value());
        }
        env
    }
}

impl<'a> IntoIterator for &'a Env {
    type Item = &'a KeyValue;
    type IntoIter = std::slice::Iter<'a, KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
