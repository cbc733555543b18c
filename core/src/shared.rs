use crate::error::Result;
use crate::ranking::DocumentPredicate;
use crate::server::SearchServer;
use crate::{Document, DocumentId, DocumentStatus};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle for using one [`SearchServer`] from several threads.
///
/// Ingestion and stop-word changes take the write lock; queries take the read lock.
#[derive(Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self {
        Self { inner: Arc::new(RwLock::new(server)) }
    }

    pub fn set_stop_words(&self, text: &str) -> Result<()> {
        self.inner.write().set_stop_words(text)
    }

    pub fn add_document(
        &self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.inner.write().add_document(id, text, status, ratings)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents_with_status(raw_query, status)
    }

    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: &P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        self.inner.read().find_top_documents_by(raw_query, predicate)
    }

    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        self.inner.read().match_document(raw_query, id)
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }
}
