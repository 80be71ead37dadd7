use serde::Serialize;

/// One line in the population trace log.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A form's fields were resolved against a document
    FormResolved {
        form: String,
        requested: usize,
        present: usize,
        missing: Vec<String>,
    },

    /// One element's displayed value was assigned
    ValueSet { field: String, value: String },

    /// A field was skipped under the skip-missing policy
    FieldSkipped { field: String, reason: String },

    /// A population pass finished; the fingerprint identifies the record
    /// without logging its contents
    FormPopulated {
        form: String,
        fields_set: usize,
        skipped: usize,
        record_fingerprint: String,
    },
}
