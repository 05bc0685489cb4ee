//! Viewer configuration.
//!
//! Config is a JSON document read leniently: unknown keys ride along
//! untouched and missing keys fall back to defaults, so one file can
//! serve several viewer builds. The mindmap feature reads `mindmap.type`.

use serde_json::{Map, Value, json};

use crate::error::{Error, Result};
use crate::serialize::LayoutType;

/// JSON-backed configuration with dotted-path access.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig(Value);

impl Default for ViewerConfig {
    /// Fallback used when no config file is present or it fails to load.
    fn default() -> Self {
        Self(json!({
            "mindmap": { "type": "spider" }
        }))
    }
}

impl ViewerConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses config JSON, typically the contents of a `config.json`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value = serde_json::from_str(text).map_err(|err| Error::InvalidConfig {
            message: err.to_string(),
        })?;
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Reads a string at a dotted path like `mindmap.type`.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        let mut current = &self.0;
        for key in path.split('.') {
            current = current.as_object()?.get(key)?;
        }
        current.as_str()
    }

    /// Writes a value at a dotted path, creating intermediate objects.
    /// Non-object values along the way are replaced by objects.
    pub fn set_value(&mut self, path: &str, value: Value) {
        let mut current = &mut self.0;
        let mut parts = path.split('.').peekable();
        let mut value = Some(value);
        while let Some(key) = parts.next() {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            let Some(map) = current.as_object_mut() else {
                return;
            };
            if parts.peek().is_none() {
                if let Some(leaf) = value.take() {
                    map.insert(key.to_owned(), leaf);
                }
                return;
            }
            current = map
                .entry(key.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }

    /// Merges `overlay` into this config.
    pub fn deep_merge(&mut self, overlay: &Value) {
        deep_merge_value(&mut self.0, overlay);
    }

    /// Layout from `mindmap.type`. Missing or unrecognized values fall
    /// back to the spider layout.
    pub fn layout_type(&self) -> LayoutType {
        self.get_str("mindmap.type")
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}

/// Recursively merges `overlay` into `base`. Object keys merge one by
/// one; any other pairing replaces the base value wholesale.
pub fn deep_merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}
