use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod error;
pub mod index;
pub mod matcher;
pub mod query;
pub mod ranking;
pub mod server;
pub mod shared;
pub mod store;
pub mod tokenizer;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use ranking::DocumentPredicate;
pub use server::SearchServer;
pub use shared::SharedSearchServer;

pub type DocumentId = i32;

/// Upper bound on the number of documents a single query returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevance values closer than this are ranked as equal.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    #[default]
    Actual = 0,
    Irrelevant = 1,
    Banned = 2,
    Removed = 3,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}", *self as i32)
    }
}

/// A ranked search hit. `relevance` only carries meaning inside a result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Self { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}
