use crate::DocumentId;
use std::collections::{BTreeMap, HashMap};

/// Per-document term frequencies: word -> occurrences / total words.
pub type WordFrequencies = BTreeMap<String, f64>;

/// Compute term frequencies for an already tokenized document.
pub fn term_frequencies(words: &[String]) -> WordFrequencies {
    let mut tf = WordFrequencies::new();
    if words.is_empty() {
        return tf;
    }
    let inv_word_count = 1.0 / words.len() as f64;
    for word in words {
        *tf.entry(word.clone()).or_insert(0.0) += inv_word_count;
    }
    tf
}

/// Word -> (document id -> term frequency). Only words of indexed documents have entries.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashMap<DocumentId, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc_id: DocumentId, frequencies: &WordFrequencies) {
        for (word, &tf) in frequencies {
            self.postings.entry(word.clone()).or_default().insert(doc_id, tf);
        }
    }

    pub fn postings(&self, word: &str) -> Option<&HashMap<DocumentId, f64>> {
        self.postings.get(word)
    }

    /// Number of documents containing `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.postings.get(word).map_or(0, HashMap::len)
    }

    pub fn contains(&self, word: &str, doc_id: DocumentId) -> bool {
        self.postings.get(word).is_some_and(|docs| docs.contains_key(&doc_id))
    }

    pub fn num_words(&self) -> usize {
        self.postings.len()
    }
}
