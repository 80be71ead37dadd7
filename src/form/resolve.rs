use std::collections::HashMap;

use crate::document::registry::{ElementHandle, FormDocument};

/// Field-name → element mapping produced by [`resolve_elements`].
///
/// Iteration order is the order fields were requested in, so downstream
/// output (reports, traces) stays deterministic. A field whose element was
/// not found is still present in the mapping, with an absent handle; callers
/// must handle that case explicitly instead of dereferencing a null.
#[derive(Debug, Clone, Default)]
pub struct ResolvedElements {
    order: Vec<String>,
    map: HashMap<String, Option<ElementHandle>>,
}

impl ResolvedElements {
    fn insert(&mut self, field: &str, handle: Option<ElementHandle>) {
        // Duplicate field names collide onto one entry; the later
        // resolution wins, the requested order keeps the first position.
        if !self.map.contains_key(field) {
            self.order.push(field.to_string());
        }
        self.map.insert(field.to_string(), handle);
    }

    /// The resolved handle for a field, if the element was found.
    pub fn handle(&self, field: &str) -> Option<ElementHandle> {
        self.map.get(field).copied().flatten()
    }

    /// Whether the field was part of the resolution at all.
    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Whether the field resolved to a present element.
    pub fn is_present(&self, field: &str) -> bool {
        self.handle(field).is_some()
    }

    /// Fields whose element was not found, in request order.
    pub fn missing(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(|f| f.as_str())
            .filter(|f| !self.is_present(f))
            .collect()
    }

    /// Entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<ElementHandle>)> {
        self.order
            .iter()
            .map(|f| (f.as_str(), self.map[f.as_str()]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Resolve each field name to its element in the given document.
///
/// One entry per distinct field name, in request order. Misses resolve to an
/// absent handle; resolution itself never fails.
pub fn resolve_elements<D: FormDocument + ?Sized>(
    doc: &D,
    field_names: &[String],
) -> ResolvedElements {
    let mut resolved = ResolvedElements::default();

    for field in field_names {
        resolved.insert(field, doc.find_by_id(field));
    }

    resolved
}
