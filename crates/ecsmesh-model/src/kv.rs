use serde::{Deserialize, Serialize};

/// A single `name`/`value` pair.
///
/// This is the shape used both for container environment variables and for proxy configuration properties.
///
/// Keys other than `name` and `value` are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyValue {
    name: String,
    value: String,
}

impl KeyValue {
    pub fn new<K, V>(name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}
