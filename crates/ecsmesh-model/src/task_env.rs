use serde::{Deserialize, Serialize};

use crate::KeyValue;

/// List of environment variables passed to a container.
///
/// Internally stored as a list of name–value pairs and serialized as a transparent array wrapper.
/// Order is preserved exactly as supplied; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskEnv(pub Vec<KeyValue>);

impl TaskEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Create an environment containing a single name–value pair.
    pub fn single<K, V>(name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(vec![KeyValue::new(name, value)])
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all name–value pairs.
    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.0.iter()
    }

    /// Get the value for a name, returning the last matching entry.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|kv| kv.name() == name)
            .map(|kv| kv.value())
    }
}

impl Default for TaskEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<KeyValue>> for TaskEnv {
    fn from(items: Vec<KeyValue>) -> Self {
        Self(items)
    }
}
