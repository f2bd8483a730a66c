//! In-memory document source for embedded documents and tests.

use crate::source::{DocumentSource, FetchError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Path-to-text map. Missing paths fail with `FetchError::NotFound`.
#[derive(Debug, Default)]
pub struct StaticDocumentSource {
    documents: BTreeMap<String, String>,
    fetches: AtomicUsize,
}

impl StaticDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }

    /// Number of `fetch` calls served so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DocumentSource for StaticDocumentSource {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}
