use std::collections::HashMap;

use serde_json::Value;

use crate::document::element::FormElement;
use crate::form::error::FormError;

/// Opaque handle to one element inside one document.
///
/// Handles are only meaningful for the document that produced them and are
/// resolved fresh on each call; nothing caches them across documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub(crate) usize);

/// Read/write access to the form controls of one rendered page.
///
/// The page owns its elements; this crate only borrows the capability.
/// Passing the document in explicitly (instead of reaching for an ambient
/// global) is what lets the resolver and populator run against an in-memory
/// registry in tests.
pub trait FormDocument {
    /// Look up an element by its id. A miss is an ordinary `None`, never an
    /// error; the caller decides what absence means.
    fn find_by_id(&self, id: &str) -> Option<ElementHandle>;

    /// Currently displayed value of an element. `None` for a stale handle.
    fn value(&self, handle: ElementHandle) -> Option<&str>;

    /// Assign an element's displayed value.
    fn set_value(&mut self, handle: ElementHandle, value: &str) -> Result<(), FormError>;
}

/// A `FormDocument` backed by a JSON page snapshot.
///
/// Snapshot shape: `{"title": "...", "elements": [...]}` with one object per
/// captured control. Duplicate element ids keep the first occurrence, which
/// matches document-order id lookup in a real page.
#[derive(Debug, Clone)]
pub struct SnapshotDocument {
    title: String,
    elements: Vec<FormElement>,
    index: HashMap<String, usize>,
}

impl SnapshotDocument {
    pub fn new(title: &str, elements: Vec<FormElement>) -> Self {
        let mut index = HashMap::new();
        for (i, el) in elements.iter().enumerate() {
            index.entry(el.id.clone()).or_insert(i);
        }

        SnapshotDocument {
            title: title.to_string(),
            elements,
            index,
        }
    }

    /// Build a document from already-parsed snapshot JSON.
    pub fn from_json(raw: &Value) -> Result<Self, FormError> {
        let elements = raw["elements"]
            .as_array()
            .ok_or_else(|| FormError::SnapshotStructure("no 'elements' array".to_string()))?;

        let elements: Vec<FormElement> =
            serde_json::from_value(Value::Array(elements.clone())).map_err(|e| {
                FormError::SnapshotParse {
                    context: "elements array".to_string(),
                    source: e,
                }
            })?;

        let title = raw["title"].as_str().unwrap_or("");
        Ok(SnapshotDocument::new(title, elements))
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &str) -> Result<Self, FormError> {
        let content = std::fs::read_to_string(path).map_err(|e| FormError::SnapshotRead {
            path: path.to_string(),
            source: e,
        })?;

        let raw: Value = serde_json::from_str(&content).map_err(|e| FormError::SnapshotParse {
            context: path.to_string(),
            source: e,
        })?;

        Self::from_json(&raw)
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "title": self.title,
            "elements": self.elements,
        })
    }

    /// Write the snapshot (including any populated values) back to a file.
    pub fn save(&self, path: &str) -> Result<(), FormError> {
        let content = serde_json::to_string_pretty(&self.to_json()).map_err(|e| {
            FormError::SnapshotParse {
                context: path.to_string(),
                source: e,
            }
        })?;

        std::fs::write(path, content).map_err(|e| FormError::SnapshotWrite {
            path: path.to_string(),
            source: e,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[FormElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element behind a handle, for callers that need more than the value.
    pub fn element(&self, handle: ElementHandle) -> Option<&FormElement> {
        self.elements.get(handle.0)
    }
}

impl FormDocument for SnapshotDocument {
    fn find_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.index.get(id).copied().map(ElementHandle)
    }

    fn value(&self, handle: ElementHandle) -> Option<&str> {
        self.elements.get(handle.0).map(|el| el.value.as_str())
    }

    fn set_value(&mut self, handle: ElementHandle, value: &str) -> Result<(), FormError> {
        match self.elements.get_mut(handle.0) {
            Some(el) => {
                el.value = value.to_string();
                Ok(())
            }
            None => Err(FormError::StaleHandle { index: handle.0 }),
        }
    }
}
