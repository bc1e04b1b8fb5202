pub mod operation;
pub mod parameter;
pub mod response;
pub mod spec;

use crate::error::BuildError;
use spec::SwaggerDocument;

/// Convert a fetched document into the typed Swagger 2.0 model.
///
/// `paths` is the only required key; everything else defaults to empty.
pub fn from_value(value: serde_json::Value) -> Result<SwaggerDocument, BuildError> {
    if value.get("paths").is_none_or(serde_json::Value::is_null) {
        return Err(BuildError::MissingField("paths".to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Render a JSON value the way it appears in table cells: strings verbatim,
/// everything else as compact JSON.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
