//! TF-IDF relevance and top-K selection.
//!
//! A document's relevance is the sum over matching plus words of
//! `ln(N / df(word)) * tf(word, doc)`. Any minus word removes the document.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::store::DocumentStore;
use crate::{Document, DocumentId, DocumentStatus};
use std::collections::HashMap;

/// Decides whether a document may appear in a result list.
///
/// Implemented for any `Fn(DocumentId, DocumentStatus, i32) -> bool` and for
/// [`DocumentStatus`] itself, which admits only documents with that status.
pub trait DocumentPredicate {
    fn admits(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool,
{
    fn admits(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn admits(&self, _id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == *self
    }
}

pub fn inverse_document_frequency(total_documents: usize, documents_with_word: usize) -> f64 {
    (total_documents as f64 / documents_with_word as f64).ln()
}

/// Score every admitted document that contains a plus word and none of the minus words.
pub fn find_all_documents<P>(
    query: &Query,
    index: &InvertedIndex,
    store: &DocumentStore,
    predicate: &P,
) -> Vec<Document>
where
    P: DocumentPredicate + ?Sized,
{
    let mut relevance: HashMap<DocumentId, f64> = HashMap::new();
    for word in &query.plus {
        let Some(postings) = index.postings(word) else { continue };
        let idf = inverse_document_frequency(store.len(), postings.len());
        for (&doc_id, &tf) in postings {
            let Some(data) = store.get(doc_id) else { continue };
            if predicate.admits(doc_id, data.status, data.rating) {
                *relevance.entry(doc_id).or_insert(0.0) += idf * tf;
            }
        }
    }

    for word in &query.minus {
        if let Some(postings) = index.postings(word) {
            for doc_id in postings.keys() {
                relevance.remove(doc_id);
            }
        }
    }

    relevance
        .into_iter()
        .filter_map(|(id, score)| store.get(id).map(|data| Document::new(id, score, data.rating)))
        .collect()
}

/// Order by relevance descending. Documents whose relevance lies within
/// `epsilon` of their run's leading score are ordered by rating descending,
/// then by id ascending.
pub fn sort_by_relevance(docs: &mut [Document], epsilon: f64) {
    let by_rating_then_id =
        |a: &Document, b: &Document| b.rating.cmp(&a.rating).then_with(|| a.id.cmp(&b.id));
    docs.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| by_rating_then_id(a, b))
    });

    let mut start = 0;
    while start < docs.len() {
        let lead = docs[start].relevance;
        let mut end = start + 1;
        while end < docs.len() && (lead - docs[end].relevance).abs() < epsilon {
            end += 1;
        }
        docs[start..end].sort_by(by_rating_then_id);
        start = end;
    }
}

/// Sort and keep at most `limit` documents.
pub fn top_documents(mut docs: Vec<Document>, limit: usize, epsilon: f64) -> Vec<Document> {
    sort_by_relevance(&mut docs, epsilon);
    docs.truncate(limit);
    docs
}
