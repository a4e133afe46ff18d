use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures inside a store implementation.
///
/// These never cross the `RentalStore` boundary: the gateway logs them and
/// degrades to an empty collection (reads) or `false` (appends).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl StoreError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
