use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index::{term_frequencies, InvertedIndex, WordFrequencies};
use crate::matcher::matched_words;
use crate::query::parse_query;
use crate::ranking::{find_all_documents, top_documents, DocumentPredicate};
use crate::store::{average_rating, DocumentData, DocumentStore};
use crate::tokenizer::StopWords;
use crate::{Document, DocumentId, DocumentStatus};

static EMPTY_FREQUENCIES: WordFrequencies = WordFrequencies::new();

/// In-memory TF-IDF search engine owning the document store and inverted index.
#[derive(Debug, Default)]
pub struct SearchServer {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
    store: DocumentStore,
}

impl SearchServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(text: &str) -> Result<Self> {
        Self::with_config(SearchConfig { stop_words: text.to_string(), ..SearchConfig::default() })
    }

    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = StopWords::parse(&config.stop_words)?;
        Ok(Self { config, stop_words, ..Self::default() })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the stop words. Documents already indexed keep their entries.
    pub fn set_stop_words(&mut self, text: &str) -> Result<()> {
        self.stop_words = StopWords::parse(text)?;
        self.config.stop_words = text.to_string();
        tracing::debug!(num_stop_words = self.stop_words.len(), "stop words updated");
        Ok(())
    }

    /// Index a document. On error nothing is stored.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 {
            tracing::warn!(id, "rejected document with negative id");
            return Err(SearchError::NegativeId(id));
        }
        if self.store.contains(id) {
            tracing::warn!(id, "rejected duplicate document");
            return Err(SearchError::DuplicateId(id));
        }
        let words = self.stop_words.split_without_stop_words(text).map_err(|err| {
            tracing::warn!(id, %err, "rejected document text");
            err
        })?;

        let frequencies = term_frequencies(&words);
        self.index.insert(id, &frequencies);
        self.store.insert(
            id,
            DocumentData {
                rating: average_rating(ratings),
                status,
                word_count: words.len(),
                frequencies,
            },
        );
        tracing::debug!(id, %status, word_count = words.len(), "document indexed");
        Ok(())
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, &DocumentStatus::Actual)
    }

    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, &status)
    }

    /// Top documents admitted by `predicate`, at most `config().max_results` of them.
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: &P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        let query = parse_query(raw_query, &self.stop_words)?;
        if query.plus.is_empty() {
            return Ok(Vec::new());
        }
        let matched = find_all_documents(&query, &self.index, &self.store, predicate);
        let total_hits = matched.len();
        let top = top_documents(matched, self.config.max_results, self.config.relevance_epsilon);
        tracing::debug!(
            plus = query.plus.len(),
            minus = query.minus.len(),
            total_hits,
            returned = top.len(),
            "query ranked"
        );
        Ok(top)
    }

    /// Plus words of the query found in document `id`, ascending, with its status.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let status = self.store.get(id).ok_or(SearchError::DocumentNotFound(id))?.status;
        let query = parse_query(raw_query, &self.stop_words)?;
        Ok((matched_words(&query, &self.index, id), status))
    }

    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Ids in the order documents were added.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.store.ids()
    }

    /// Word -> term frequency for a document; empty for unknown ids.
    pub fn word_frequencies(&self, id: DocumentId) -> &WordFrequencies {
        match self.store.get(id) {
            Some(data) => &data.frequencies,
            None => &EMPTY_FREQUENCIES,
        }
    }

    /// Number of indexed words in a document, stop words excluded.
    pub fn word_count(&self, id: DocumentId) -> Option<usize> {
        self.store.get(id).map(|data| data.word_count)
    }
}
