use std::collections::HashMap;

use serde_json::Value;

use crate::form::error::FormError;

/// Field-name → display-string mapping used to populate a form.
///
/// Typically built from a record object deserialized elsewhere (the server
/// response for an edit page). Only displayable primitives survive the
/// conversion: strings pass through, numbers and booleans render to their
/// display form, nulls are dropped so the population policy decides what an
/// absent value means. Arrays and nested objects are a shape error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialValues {
    map: HashMap<String, String>,
}

impl InitialValues {
    pub fn new() -> Self {
        InitialValues {
            map: HashMap::new(),
        }
    }

    pub fn insert(&mut self, field: &str, value: &str) {
        self.map.insert(field.to_string(), value.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.map.get(field).map(|v| v.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Build from a parsed record object.
    pub fn from_json_record(record: &Value) -> Result<Self, FormError> {
        let object = record
            .as_object()
            .ok_or_else(|| FormError::RecordShape("record is not a JSON object".to_string()))?;

        let mut values = InitialValues::new();
        for (field, value) in object {
            match value {
                Value::String(s) => values.insert(field, s),
                Value::Number(n) => values.insert(field, &n.to_string()),
                Value::Bool(b) => values.insert(field, if *b { "true" } else { "false" }),
                Value::Null => {} // absent value; the populate policy decides
                Value::Array(_) | Value::Object(_) => {
                    return Err(FormError::RecordShape(format!(
                        "field '{}' is not a displayable primitive",
                        field
                    )));
                }
            }
        }

        Ok(values)
    }

    /// Load a record from a JSON file.
    pub fn load(path: &str) -> Result<Self, FormError> {
        let content = std::fs::read_to_string(path).map_err(|e| FormError::RecordRead {
            path: path.to_string(),
            source: e,
        })?;

        let record: Value = serde_json::from_str(&content).map_err(|e| FormError::RecordParse {
            path: path.to_string(),
            source: e,
        })?;

        Self::from_json_record(&record)
    }

    /// Stable fingerprint of the whole mapping, for trace correlation
    /// without logging raw record contents.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort();

        let mut hasher = Sha1::new();
        for (field, value) in entries {
            hasher.update(field.as_bytes());
            hasher.update(b"=");
            hasher.update(value.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl FromIterator<(String, String)> for InitialValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        InitialValues {
            map: iter.into_iter().collect(),
        }
    }
}
