//! Error types for CV Forge

use thiserror::Error;

/// Main error type for CV Forge operations
#[derive(Error, Debug)]
pub enum CvError {
    /// Submission attempted while a slot is empty or a request is in flight
    #[error("Form is not ready for submission: {0}")]
    NotReady(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Attachment bytes could not be decoded as an image
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid backend URL or download URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level HTTP failure (connection refused, broken body, ...)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },
}

impl CvError {
    /// Text shown to the user in the form's error area.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias using CvError
pub type CvResult<T> = Result<T, CvError>;
