use serde::{Deserialize, Serialize};

/// One UI control captured in a page snapshot.
///
/// Field names mirror the JSON emitted by the page-extraction script, hence
/// the camelCase renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    /// DOM id; the key every lookup goes through
    pub id: String,

    pub tag: String,

    /// Input type attribute (`text`, `number`, `checkbox`, ...)
    pub r#type: Option<String>,

    /// Visible label text, if the extractor could associate one
    pub label: Option<String>,

    /// Currently displayed value
    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub required: bool,

    /// Id of the enclosing form element, if any
    #[serde(rename = "formId", default)]
    pub form_id: Option<String>,
}

impl FormElement {
    /// Minimal element with just an id and tag; the usual starting point for
    /// fixtures and tests.
    pub fn input(id: &str) -> Self {
        FormElement {
            id: id.to_string(),
            tag: "input".to_string(),
            r#type: Some("text".to_string()),
            label: None,
            value: String::new(),
            disabled: false,
            required: false,
            form_id: None,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}
