use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TableParseError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("unsupported operation '{0}'. Only 'parseTables' is available")]
    UnsupportedOperation(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("table extraction failed: {0}")]
    Extraction(String),

    #[error("failed to load requests from {path}: {reason}")]
    RequestLoad { path: PathBuf, reason: String },

    #[error("item {item} failed: {source}")]
    ItemFailed {
        item: usize,
        #[source]
        source: Box<TableParseError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
