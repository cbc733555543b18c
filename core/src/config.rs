use crate::error::{Result, SearchError};
use crate::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
use serde::{Deserialize, Serialize};

/// Engine settings. Every field is optional when decoded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whitespace-separated stop words, parsed like document text.
    pub stop_words: String,
    pub max_results: usize,
    pub relevance_epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_words: String::new(),
            max_results: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
        }
    }
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SearchError::Config("max_results must be positive".into()));
        }
        if !self.relevance_epsilon.is_finite() || self.relevance_epsilon < 0.0 {
            return Err(SearchError::Config(format!(
                "relevance_epsilon must be a finite non-negative number, got {}",
                self.relevance_epsilon
            )));
        }
        Ok(())
    }
}
