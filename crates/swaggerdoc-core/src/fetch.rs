//! Resolve a document reference to a parsed value.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, FetchError};

/// The local file a reference points at, for dependency tracking.
///
/// Resolved without touching the filesystem, so callers can record the
/// dependency before the read that may fail. `None` for network URLs.
pub fn source_path(reference: &str, doc_root: &Path) -> Option<PathBuf> {
    match Url::parse(reference) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => Some(doc_root.join(reference)),
        Err(_) => None,
    }
}

/// Fetch and parse the document behind `reference`.
///
/// References without a URL scheme are paths relative to `doc_root`; `.yml`
/// and `.yaml` files are parsed as YAML, anything else as JSON. `http`,
/// `https` and `file` URLs are read and parsed as JSON.
pub fn fetch(reference: &str, doc_root: &Path) -> Result<serde_json::Value, Error> {
    match Url::parse(reference) {
        Ok(url) => fetch_url(&url),
        Err(url::ParseError::RelativeUrlWithoutBase) => fetch_relative(reference, doc_root),
        Err(e) => Err(FetchError::InvalidUrl(format!("{reference}: {e}")).into()),
    }
}

fn fetch_relative(reference: &str, doc_root: &Path) -> Result<serde_json::Value, Error> {
    let path = doc_root.join(reference);
    log::debug!("reading {}", path.display());

    let content = read_file(&path)?;
    if is_yaml(&path) {
        parse_yaml(&content)
    } else {
        Ok(serde_json::from_str(&content).map_err(FetchError::from)?)
    }
}

fn fetch_url(url: &Url) -> Result<serde_json::Value, Error> {
    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| FetchError::InvalidUrl(url.to_string()))?;
            log::debug!("reading {}", path.display());
            let content = read_file(&path)?;
            Ok(serde_json::from_str(&content).map_err(FetchError::from)?)
        }
        "http" | "https" => {
            log::debug!("fetching {url}");
            Ok(http_get(url)?)
        }
        other => Err(FetchError::UnsupportedScheme(other.to_string()).into()),
    }
}

fn http_get(url: &Url) -> Result<serde_json::Value, FetchError> {
    let http_err = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::new();
    let body = client
        .get(url.clone())
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(http_err)?;
    Ok(serde_json::from_str(&body)?)
}

fn read_file(path: &Path) -> Result<String, FetchError> {
    fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == "yml" || ext == "yaml")
}

#[cfg(feature = "yaml")]
fn parse_yaml(content: &str) -> Result<serde_json::Value, Error> {
    serde_yaml_ng::from_str(content).map_err(|e| FetchError::Yaml(e.to_string()).into())
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_content: &str) -> Result<serde_json::Value, Error> {
    Err(Error::MissingOptionalDependency {
        package: "serde_yaml_ng",
        feature: "yaml",
    })
}
