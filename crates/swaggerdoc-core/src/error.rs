use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid URL {0}")]
    InvalidUrl(String),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(String),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("malformed Swagger document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error(
        "YAML support is optional. Rebuild swaggerdoc with the `{feature}` feature \
         (which enables the `{package}` crate) to read YAML documents"
    )]
    MissingOptionalDependency {
        package: &'static str,
        feature: &'static str,
    },

    #[error("Tag '{tag}' not found in Swagger URL {reference}.")]
    InvalidTagSelection { tag: String, reference: String },

    #[error("build error: {0}")]
    Build(#[from] BuildError),
}
