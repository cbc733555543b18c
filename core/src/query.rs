use crate::error::{Result, SearchError};
use crate::tokenizer::{split_into_words, StopWords};
use std::collections::BTreeSet;

/// A parsed query. `plus` and `minus` never share a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus: BTreeSet<String>,
    pub minus: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.plus.is_empty() && self.minus.is_empty()
    }
}

enum QueryWord<'a> {
    Plus(&'a str),
    Minus(&'a str),
}

fn classify(token: &str) -> Result<QueryWord<'_>> {
    match token.strip_prefix('-') {
        None => Ok(QueryWord::Plus(token)),
        Some(rest) if rest.is_empty() || rest.starts_with('-') => {
            Err(SearchError::MalformedQuery(token.to_string()))
        }
        Some(rest) => Ok(QueryWord::Minus(rest)),
    }
}

/// Parse a free-text query into plus and minus words, dropping stop words.
/// A word given both ways is kept only as a minus word.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for token in split_into_words(text)? {
        match classify(&token)? {
            QueryWord::Plus(word) if !stop_words.contains(word) => {
                query.plus.insert(word.to_string());
            }
            QueryWord::Minus(word) if !stop_words.contains(word) => {
                query.minus.insert(word.to_string());
            }
            _ => {}
        }
    }
    query.plus.retain(|w| !query.minus.contains(w));
    Ok(query)
}
