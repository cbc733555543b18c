use crate::error::{Result, SearchError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref CONTROL_CHARS: Regex = Regex::new(r"\p{Cc}").expect("valid regex");
}

/// Returns true when `word` is non-empty and free of control characters.
pub fn is_valid_word(word: &str) -> bool {
    !word.trim().is_empty() && !CONTROL_CHARS.is_match(word)
}

/// Split text on whitespace into lowercase words. No stemming is applied.
pub fn split_into_words(text: &str) -> Result<Vec<String>> {
    text.split_whitespace()
        .map(|raw| {
            if is_valid_word(raw) {
                Ok(raw.to_lowercase())
            } else {
                Err(SearchError::InvalidWord(raw.to_string()))
            }
        })
        .collect()
}

/// Words dropped from both documents and queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self { words: split_into_words(text)?.into_iter().collect() })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tokenize `text` and drop every stop word.
    pub fn split_without_stop_words(&self, text: &str) -> Result<Vec<String>> {
        let mut words = split_into_words(text)?;
        words.retain(|w| !self.contains(w));
        Ok(words)
    }
}
