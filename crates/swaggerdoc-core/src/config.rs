use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level project configuration loaded from `.swaggerdoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwaggerDocConfig {
    /// Base directory that relative references resolve against.
    pub doc_root: PathBuf,
    /// Section title used for the default group when the document declares no tags.
    pub default_group_title: String,
    pub tables: TableOptions,
}

impl Default for SwaggerDocConfig {
    fn default() -> Self {
        Self {
            doc_root: PathBuf::from("."),
            default_group_title: String::new(),
            tables: TableOptions::default(),
        }
    }
}

/// Column width overrides for generated tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Widths for `[Name, Position, Description, Type, Notes]`.
    pub parameter_widths: Option<Vec<u32>>,
    /// Widths for `[Name, Description, Type]`.
    pub response_widths: Option<Vec<u32>>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swaggerdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwaggerDocConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    parse_config(&content)
        .map(Some)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))
}

#[cfg(feature = "yaml")]
fn parse_config(content: &str) -> Result<SwaggerDocConfig, String> {
    serde_yaml_ng::from_str(content).map_err(|e| e.to_string())
}

#[cfg(not(feature = "yaml"))]
fn parse_config(_content: &str) -> Result<SwaggerDocConfig, String> {
    Err("reading the config file requires the `yaml` feature".to_string())
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swaggerdoc configuration
doc_root: .                # relative references resolve against this directory
default_group_title: ""    # section title when the document declares no tags

# Column width overrides, equal widths when unset:
#   parameter_widths: [2, 1, 4, 1, 3]   # Name, Position, Description, Type, Notes
#   response_widths: [2, 4, 1]          # Name, Description, Type
tables: {}
"#
}
