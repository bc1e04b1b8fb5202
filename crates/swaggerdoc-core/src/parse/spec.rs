use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The subset of a Swagger 2.0 document that documentation is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    pub paths: IndexMap<String, PathItem>,
}
