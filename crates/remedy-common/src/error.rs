/// Error types shared across the remedy server crates.
///
/// These errors cover reading and decoding catalog sources. Application-specific errors
/// are defined in each server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),
}
