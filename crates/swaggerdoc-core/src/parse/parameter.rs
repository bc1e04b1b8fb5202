use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::display_value;
use super::response::SchemaSpec;

/// Keys rendered in their own table columns and therefore left out of Notes.
pub const COLUMN_KEYS: [&str; 4] = ["name", "in", "description", "type"];

/// An operation parameter, or a schema property shown as one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Typed view of `extra["schema"]`.
    #[serde(skip)]
    pub schema: Option<SchemaSpec>,

    /// Every key outside [`COLUMN_KEYS`] in source order, `schema` included.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl<'de> Deserialize<'de> for ParameterSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut column = |key: &str| match raw.shift_remove(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(D::Error::custom(format!(
                "parameter `{key}` must be a string, found {other}"
            ))),
        };
        let name = column("name")?;
        let location = column("in")?;
        let description = column("description")?;
        let type_name = column("type")?;

        let schema = raw
            .get("schema")
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(|e| D::Error::custom(format!("schema: {e}")))?;

        Ok(ParameterSpec {
            name,
            location,
            description,
            type_name,
            schema,
            extra: raw,
        })
    }
}

/// A property row reuses the parameter shape.
pub type PropertySpec = ParameterSpec;

impl ParameterSpec {
    /// Properties of a `body` parameter's schema, each turned into its own
    /// row positioned in the body. `None` for any other parameter.
    pub fn body_properties(&self) -> Option<Vec<ParameterSpec>> {
        if self.name.as_deref() != Some("body") {
            return None;
        }
        let properties = self.schema.as_ref()?.properties.as_ref()?;
        Some(
            properties
                .iter()
                .map(|(name, property)| ParameterSpec {
                    name: Some(name.clone()),
                    location: Some("body".to_string()),
                    ..property.clone()
                })
                .collect(),
        )
    }

    /// `key: value` pairs for every key outside [`COLUMN_KEYS`], in source order.
    pub fn notes(&self) -> String {
        self.extra
            .iter()
            .filter(|(key, _)| !COLUMN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| format!("{}: {}", key, display_value(value)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
