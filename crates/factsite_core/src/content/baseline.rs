//! Baseline loader and its explicit memoization cache.
//!
//! # Responsibility
//! - Fetch and decode the baseline envelope of a kind at most once per cache
//!   lifetime.
//! - Degrade fetch/parse failures to the kind's fallback content.
//!
//! # Invariants
//! - Concurrent first loads of one kind share a single fetch: later callers
//!   block on the in-flight load and receive its result.
//! - Fallback envelopes are memoized like successful loads; only a reset
//!   triggers another fetch.
//! - `load` never fails.

use crate::content::clock::now_timestamp;
use crate::content::item::ContentItem;
use crate::model::blog_post::BlogPost;
use crate::model::category::Category;
use crate::model::envelope::{decode_envelope, Envelope};
use crate::model::fact::Fact;
use crate::model::kind::ContentKind;
use crate::source::{DirectoryDocumentSource, DocumentSource};
use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Memo slot for one kind.
///
/// The inner cell is swapped out on reset, so a load already running keeps
/// filling the old cell while new callers start from an empty one.
pub struct CacheSlot<T> {
    cell: Mutex<Arc<OnceCell<Arc<Envelope<T>>>>>,
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        Self {
            cell: Mutex::new(Arc::new(OnceCell::new())),
        }
    }
}

impl<T> CacheSlot<T> {
    fn handle(&self) -> Arc<OnceCell<Arc<Envelope<T>>>> {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn invalidate(&self) {
        *self.cell.lock().unwrap_or_else(PoisonError::into_inner) = Arc::new(OnceCell::new());
    }

    pub fn is_loaded(&self) -> bool {
        self.handle().get().is_some()
    }
}

/// Baseline memoization for every kind, with an explicit reset lifecycle.
#[derive(Default)]
pub struct BaselineCache {
    pub(crate) facts: CacheSlot<Fact>,
    pub(crate) posts: CacheSlot<BlogPost>,
    pub(crate) categories: CacheSlot<Category>,
}

impl BaselineCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Facts => self.facts.is_loaded(),
            ContentKind::BlogPosts => self.posts.is_loaded(),
            ContentKind::Categories => self.categories.is_loaded(),
        }
    }

    /// Drops the memoized baseline of `kind`.
    pub fn reset(&self, kind: ContentKind) {
        match kind {
            ContentKind::Facts => self.facts.invalidate(),
            ContentKind::BlogPosts => self.posts.invalidate(),
            ContentKind::Categories => self.categories.invalidate(),
        }
    }

    pub fn reset_all(&self) {
        for kind in ContentKind::ALL {
            self.reset(kind);
        }
    }
}

/// Loads baseline envelopes from a document source through a `BaselineCache`.
///
/// One loader is meant to live for the whole process and be shared by
/// reference with every resolver.
pub struct BaselineLoader {
    source: Box<dyn DocumentSource>,
    cache: BaselineCache,
}

impl BaselineLoader {
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: BaselineCache::new(),
        }
    }

    /// Loader reading `data/*.json` below `root`.
    pub fn from_directory(root: impl Into<PathBuf>) -> Self {
        Self::new(DirectoryDocumentSource::new(root))
    }

    pub fn cache(&self) -> &BaselineCache {
        &self.cache
    }

    /// Returns the memoized baseline of `T`, fetching it on first use.
    pub fn load<T: ContentItem>(&self) -> Arc<Envelope<T>> {
        let cell = T::baseline_slot(&self.cache).handle();
        if let Some(envelope) = cell.get() {
            debug!(
                "event=baseline_load module=content status=hit kind={}",
                T::KIND
            );
            return Arc::clone(envelope);
        }
        Arc::clone(cell.get_or_init(|| Arc::new(self.fetch_or_fallback::<T>())))
    }

    /// Forgets the memoized baseline of `kind`; the next `load` refetches.
    pub fn invalidate(&self, kind: ContentKind) {
        self.cache.reset(kind);
    }

    fn fetch_or_fallback<T: ContentItem>(&self) -> Envelope<T> {
        let started_at = Instant::now();
        let kind = T::KIND;
        let path = kind.document_path();

        let text = match self.source.fetch(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    "event=baseline_load module=content status=fallback kind={} duration_ms={} error_code=fetch_failed error={}",
                    kind,
                    started_at.elapsed().as_millis(),
                    err
                );
                return fallback_envelope();
            }
        };

        match decode_envelope::<T>(&text, kind.collection_field()) {
            Ok(envelope) => {
                info!(
                    "event=baseline_load module=content status=ok kind={} items={} version={} duration_ms={}",
                    kind,
                    envelope.items.len(),
                    envelope.version,
                    started_at.elapsed().as_millis()
                );
                envelope
            }
            Err(err) => {
                warn!(
                    "event=baseline_load module=content status=fallback kind={} duration_ms={} error_code=parse_failed error={}",
                    kind,
                    started_at.elapsed().as_millis(),
                    err
                );
                fallback_envelope()
            }
        }
    }
}

fn fallback_envelope<T: ContentItem>() -> Envelope<T> {
    Envelope::new(now_timestamp(), T::fallback_items())
}
