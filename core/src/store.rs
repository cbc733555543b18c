use crate::index::WordFrequencies;
use crate::{DocumentId, DocumentStatus};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
    pub word_count: usize,
    pub frequencies: WordFrequencies,
}

/// Mean of the ratings, truncated toward zero. No ratings rate 0.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

/// Document metadata keyed by id, remembering insertion order.
#[derive(Debug, Default)]
pub struct DocumentStore {
    order: Vec<DocumentId>,
    docs: HashMap<DocumentId, DocumentData>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.docs.contains_key(&id)
    }

    /// Callers must have checked `contains` first; an existing entry is left untouched.
    pub fn insert(&mut self, id: DocumentId, data: DocumentData) {
        if let std::collections::hash_map::Entry::Vacant(slot) = self.docs.entry(id) {
            slot.insert(data);
            self.order.push(id);
        }
    }

    pub fn get(&self, id: DocumentId) -> Option<&DocumentData> {
        self.docs.get(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.order.iter().copied()
    }
}
