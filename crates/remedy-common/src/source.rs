/// Raw catalog text plus the metadata needed to tell catalog snapshots apart.
///
/// A source is either compiled into the binary or read from a file once at startup.
/// The fingerprint is a SHA-256 digest of the exact text, so two processes serving the
/// same catalog report the same value.
use std::path::Path;

use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::CommonError;

#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// JSON document text.
    pub text: String,
    /// Where the text came from, e.g. "bundled" or a file path.
    pub origin: String,
    /// Lowercase hex SHA-256 of `text`.
    pub fingerprint: String,
}

impl CatalogSource {
    pub fn new(text: impl Into<String>, origin: impl Into<String>) -> Self {
        let text = text.into();
        let fingerprint = fingerprint(&text);
        Self {
            text,
            origin: origin.into(),
            fingerprint,
        }
    }

    /// Catalog text compiled into the binary.
    pub fn bundled(text: &str) -> Self {
        Self::new(text, "bundled")
    }

    pub fn from_file(path: &Path) -> Result<Self, CommonError> {
        let text = std::fs::read_to_string(path).map_err(|source| CommonError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let fingerprint = fingerprint(&text);
        info!(path = %path.display(), bytes = text.len(), "read catalog file");
        Ok(Self {
            text,
            origin: path.display().to_string(),
            fingerprint,
        })
    }

    /// Decode the JSON text into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, CommonError> {
        serde_json::from_str(&self.text).map_err(|e| {
            warn!(origin = %self.origin, error = %e, "catalog text is not a valid document");
            CommonError::Json(e)
        })
    }
}

pub fn fingerprint(text: &str) -> String {
    let mut h = Sha256::new();
    h.update(text.as_bytes());
    format!("{:x}", h.finalize())
}
