//! Resource and attribute values
//!
//! Agents report resources (`cpus`, `mem`, `ports`, ...) and attributes
//! (`rack`, `zone`, ...) as flat JSON objects whose values are either numbers
//! or strings. Both are modelled by [`ResourceMap`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single resource or attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    /// Numeric value (e.g. `cpus: 1.5`)
    Scalar(f64),

    /// Text value (e.g. `ports: "[31000-32000]"`)
    Text(String),
}

impl ResourceValue {
    /// A scalar is empty iff it equals zero. Text is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            ResourceValue::Scalar(value) => *value == 0.0,
            ResourceValue::Text(_) => false,
        }
    }

    /// Get the numeric value, if this is a scalar
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ResourceValue::Scalar(value) => Some(*value),
            ResourceValue::Text(_) => None,
        }
    }

    /// Get the text value, if this is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResourceValue::Scalar(_) => None,
            ResourceValue::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing ".0" on whole numbers
            ResourceValue::Scalar(value) => write!(f, "{:?}", value),
            ResourceValue::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

impl From<f64> for ResourceValue {
    fn from(value: f64) -> Self {
        ResourceValue::Scalar(value)
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        ResourceValue::Text(value)
    }
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        ResourceValue::Text(value.to_string())
    }
}

/// Error returned when building values from arbitrary JSON
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidResourceValue {
    /// The value is neither a number nor a string
    #[error("Unsupported value for `{key}`: expected a number or a string, got {found}")]
    UnsupportedValue { key: String, found: &'static str },

    /// The collection is not a JSON object
    #[error("Unsupported collection: expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl TryFrom<&serde_json::Value> for ResourceValue {
    type Error = InvalidResourceValue;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(ResourceValue::Scalar)
                .ok_or(InvalidResourceValue::UnsupportedValue {
                    key: String::new(),
                    found: "an out-of-range number",
                }),
            serde_json::Value::String(text) => Ok(ResourceValue::Text(text.clone())),
            other => Err(InvalidResourceValue::UnsupportedValue {
                key: String::new(),
                found: json_kind(other),
            }),
        }
    }
}

/// Mapping from key to [`ResourceValue`], ordered by key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceMap(BTreeMap<String, ResourceValue>);

/// Total, used, offered or reserved resources of an agent
pub type Resources = ResourceMap;

/// Agent attributes
pub type Attributes = ResourceMap;

impl ResourceMap {
    /// Build a map from numeric values
    pub fn from_scalars<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), ResourceValue::Scalar(value)))
                .collect(),
        )
    }

    /// Build a map from text values
    pub fn from_strings<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), ResourceValue::Text(value.into())))
                .collect(),
        )
    }

    /// Build a map from a JSON object of numbers and strings
    ///
    /// Any other value type (bool, null, array, object) is rejected.
    pub fn try_from_json(value: &serde_json::Value) -> Result<Self, InvalidResourceValue> {
        let object = value
            .as_object()
            .ok_or_else(|| InvalidResourceValue::NotAnObject(json_kind(value)))?;

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            let value = ResourceValue::try_from(value).map_err(|err| match err {
                InvalidResourceValue::UnsupportedValue { found, .. } => {
                    InvalidResourceValue::UnsupportedValue {
                        key: key.clone(),
                        found,
                    }
                }
                other => other,
            })?;
            entries.insert(key.clone(), value);
        }

        Ok(Self(entries))
    }

    /// Combine two maps; on a key collision the value from `other` wins
    pub fn merge(mut self, other: ResourceMap) -> Self {
        self.0.extend(other.0);
        self
    }

    /// True if there are no entries or every entry is empty
    pub fn is_empty(&self) -> bool {
        self.0.values().all(ResourceValue::is_empty)
    }

    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        self.0.get(key)
    }

    /// Numeric value for `key`, if present and scalar
    pub fn scalar(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ResourceValue::as_scalar)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ResourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{ {} }}", entries)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
