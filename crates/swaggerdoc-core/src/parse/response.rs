use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::parameter::PropertySpec;

/// A response definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaSpec>,
}

impl ResponseSpec {
    /// Declared schema properties, if the schema has a `properties` key.
    pub fn properties(&self) -> Option<&IndexMap<String, PropertySpec>> {
        self.schema.as_ref()?.properties.as_ref()
    }
}

/// The parts of a schema object that documentation reads. Everything else
/// (`type`, `$ref`, `items`, ...) is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, PropertySpec>>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}
