//! Effective-collection resolution.
//!
//! # Invariants
//! - `effective::<T>()` returns exactly the override snapshot items when a
//!   readable snapshot exists, whatever the baseline holds.
//! - Otherwise it returns the (memoized) baseline items.

use crate::content::baseline::BaselineLoader;
use crate::content::item::ContentItem;
use crate::content::override_store::OverrideStore;
use crate::model::blog_post::BlogPost;
use crate::model::category::Category;
use crate::model::fact::Fact;
use crate::model::kind::ContentKind;
use crate::storage::KeyValueStorage;
use log::debug;

/// Per-kind summary for admin dashboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStatus {
    pub kind: ContentKind,
    pub item_count: usize,
    /// An override snapshot shadows the baseline.
    pub has_pending_overrides: bool,
    pub baseline_loaded: bool,
}

/// Resolver over a shared baseline loader and an injected storage capability.
///
/// Mutation, export and reset entry points live in sibling modules as
/// further `impl` blocks on this type.
pub struct HybridResolver<'a, S> {
    pub(crate) baseline: &'a BaselineLoader,
    pub(crate) overrides: OverrideStore<S>,
}

impl<'a, S: KeyValueStorage> HybridResolver<'a, S> {
    pub fn new(baseline: &'a BaselineLoader, storage: S) -> Self {
        Self {
            baseline,
            overrides: OverrideStore::new(storage),
        }
    }

    pub fn baseline(&self) -> &BaselineLoader {
        self.baseline
    }

    pub fn overrides(&self) -> &OverrideStore<S> {
        &self.overrides
    }

    /// Items of `T` after override precedence is applied.
    pub fn effective<T: ContentItem>(&self) -> Vec<T> {
        if let Some(snapshot) = self.overrides.read::<T>() {
            debug!(
                "event=resolve module=content status=ok kind={} origin=override items={}",
                T::KIND,
                snapshot.items.len()
            );
            return snapshot.items;
        }

        let baseline = self.baseline.load::<T>();
        debug!(
            "event=resolve module=content status=ok kind={} origin=baseline items={}",
            T::KIND,
            baseline.items.len()
        );
        baseline.items.clone()
    }

    /// Looks up one effective item by id.
    pub fn find<T: ContentItem>(&self, id: &str) -> Option<T> {
        self.effective::<T>()
            .into_iter()
            .find(|item| item.id() == id)
    }

    /// Whether admin edits for `kind` are waiting to be exported.
    pub fn has_pending_overrides(&self, kind: ContentKind) -> bool {
        self.overrides.contains(kind)
    }

    pub fn status(&self, kind: ContentKind) -> ContentStatus {
        let item_count = match kind {
            ContentKind::Facts => self.effective::<Fact>().len(),
            ContentKind::BlogPosts => self.effective::<BlogPost>().len(),
            ContentKind::Categories => self.effective::<Category>().len(),
        };
        ContentStatus {
            kind,
            item_count,
            has_pending_overrides: self.has_pending_overrides(kind),
            baseline_loaded: self.baseline.cache().is_loaded(kind),
        }
    }
}
