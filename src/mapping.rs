//! Type mappings: JSON objects from a type alias to its definition.
//!
//! Values are opaque. A definition may be a plain alias string or any nested
//! JSON descriptor; merging only ever looks at top-level keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered alias → definition map. Keys keep the position of their first insertion.
pub struct TypeMapping(Map<String, Value>);

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping of plain string aliases, e.g. the built-in override tables.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut map = Map::new();
        for (name, definition) in pairs {
            map.insert((*name).to_string(), Value::String((*definition).to_string()));
        }
        Self(map)
    }

    /// Shallow-merge `other` into `self`. Every key in `other` overwrites the
    /// existing value unconditionally; collisions are not reported.
    pub fn merge(&mut self, other: TypeMapping) {
        for (name, definition) in other.0 {
            self.0.insert(name, definition);
        }
    }

    /// Fold `sources` left to right; later sources win on key collision.
    pub fn merged<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = TypeMapping>,
    {
        sources.into_iter().fold(Self::new(), |mut acc, source| {
            acc.merge(source);
            acc
        })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render with two-space indentation and no trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl From<Map<String, Value>> for TypeMapping {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Short label for a JSON value's kind, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
        Value::Null => "null",
    }
}
