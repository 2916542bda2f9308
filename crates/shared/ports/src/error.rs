use thiserror::Error;

/// Storage-level errors
///
/// These never escape [`PivotStore::load`](crate::PivotStore::load) or
/// [`PivotStore::save`](crate::PivotStore::save); only the `try_*` methods
/// surface them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt pivot document {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
