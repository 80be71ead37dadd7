use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// Snapshot file could not be read
    SnapshotRead { path: String, source: std::io::Error },

    /// Snapshot file could not be written
    SnapshotWrite { path: String, source: std::io::Error },

    /// Snapshot JSON failed to parse or serialize
    SnapshotParse { context: String, source: serde_json::Error },

    /// Snapshot JSON parsed but had an unexpected shape
    SnapshotStructure(String),

    /// Form spec file could not be read
    SpecRead { path: String, source: std::io::Error },

    /// Form spec YAML failed to parse
    SpecParse { path: String, source: serde_yaml::Error },

    /// No form spec with the requested name
    SpecNotFound { name: String },

    /// Record file could not be read
    RecordRead { path: String, source: std::io::Error },

    /// Record JSON failed to parse
    RecordParse { path: String, source: serde_json::Error },

    /// Record value is not a displayable primitive
    RecordShape(String),

    /// Handle does not belong to this document
    StaleHandle { index: usize },

    /// No element resolved for a field during strict population
    MissingElement { field: String },

    /// No initial value supplied for a field during strict population
    MissingValue { field: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {}", path, source)
            }
            FormError::SnapshotWrite { path, source } => {
                write!(f, "Failed to write snapshot '{}': {}", path, source)
            }
            FormError::SnapshotParse { context, source } => {
                write!(f, "Snapshot JSON error ({}): {}", context, source)
            }
            FormError::SnapshotStructure(msg) => {
                write!(f, "Unexpected snapshot structure: {}", msg)
            }
            FormError::SpecRead { path, source } => {
                write!(f, "Failed to read form spec '{}': {}", path, source)
            }
            FormError::SpecParse { path, source } => {
                write!(f, "Form spec YAML error ({}): {}", path, source)
            }
            FormError::SpecNotFound { name } => {
                write!(f, "No form spec named '{}'", name)
            }
            FormError::RecordRead { path, source } => {
                write!(f, "Failed to read record '{}': {}", path, source)
            }
            FormError::RecordParse { path, source } => {
                write!(f, "Record JSON error ({}): {}", path, source)
            }
            FormError::RecordShape(msg) => {
                write!(f, "Record shape error: {}", msg)
            }
            FormError::StaleHandle { index } => {
                write!(f, "Stale element handle (index {})", index)
            }
            FormError::MissingElement { field } => {
                write!(f, "No element found for field '{}'", field)
            }
            FormError::MissingValue { field } => {
                write!(f, "No initial value for field '{}'", field)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::SnapshotRead { source, .. } => Some(source),
            FormError::SnapshotWrite { source, .. } => Some(source),
            FormError::SnapshotParse { source, .. } => Some(source),
            FormError::SpecRead { source, .. } => Some(source),
            FormError::SpecParse { source, .. } => Some(source),
            FormError::RecordRead { source, .. } => Some(source),
            FormError::RecordParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
