//! Error types for the search engine.
//!
//! Every error is detected synchronously at the call that violates a
//! precondition. A failed call leaves the server unchanged.

use crate::DocumentId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A document with this id has already been added.
    #[error("document {0} already exists")]
    DuplicateId(DocumentId),

    #[error("document id {0} is negative")]
    NegativeId(DocumentId),

    /// A word is empty or contains control characters.
    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    /// A minus term is a bare `-` or starts with `--`.
    #[error("malformed query term: {0:?}")]
    MalformedQuery(String),

    #[error("document {0} not found")]
    DocumentNotFound(DocumentId),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
