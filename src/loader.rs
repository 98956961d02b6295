use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::Catalog;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read pricing document `{path}`: {source}")]
    Unreachable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed pricing document `{path}`: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load(path: &Path) -> Result<Catalog, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Unreachable {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = parse(&raw).map_err(|source| LoadError::Malformed {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), "loaded pricing document");
    Ok(catalog)
}

pub fn parse(raw: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(raw)
}
