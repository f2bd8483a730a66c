//! Per-kind behavior the generic resolver needs from an item type.

use crate::content::baseline::{BaselineCache, CacheSlot};
use crate::model::blog_post::{BlogPost, BlogPostPatch};
use crate::model::category::{Category, CategoryPatch};
use crate::model::fact::{Fact, FactPatch};
use crate::model::kind::ContentKind;
use crate::model::seed::{default_categories, sample_blog_post, seed_facts};
use crate::model::validation::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type stored in one resolver-managed collection.
pub trait ContentItem: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: ContentKind;

    /// Partial-update payload accepted by `HybridResolver::update`.
    type Patch;

    fn id(&self) -> &str;

    fn assign_id(&mut self, id: String);

    fn validate(&self) -> Result<(), ValidationError>;

    /// Secondary key that must stay unique in the collection, if any.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    fn apply_patch(&mut self, patch: Self::Patch, now: &str);

    /// Content served when the baseline document cannot be loaded.
    fn fallback_items() -> Vec<Self>;

    fn baseline_slot(cache: &BaselineCache) -> &CacheSlot<Self>;
}

impl ContentItem for Fact {
    const KIND: ContentKind = ContentKind::Facts;
    type Patch = FactPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Fact::validate(self)
    }

    fn apply_patch(&mut self, patch: FactPatch, _now: &str) {
        patch.apply_to(self);
    }

    fn fallback_items() -> Vec<Self> {
        seed_facts()
    }

    fn baseline_slot(cache: &BaselineCache) -> &CacheSlot<Self> {
        &cache.facts
    }
}

impl ContentItem for BlogPost {
    const KIND: ContentKind = ContentKind::BlogPosts;
    type Patch = BlogPostPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        BlogPost::validate(self)
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn apply_patch(&mut self, patch: BlogPostPatch, now: &str) {
        patch.apply_to(self, now);
    }

    fn fallback_items() -> Vec<Self> {
        vec![sample_blog_post()]
    }

    fn baseline_slot(cache: &BaselineCache) -> &CacheSlot<Self> {
        &cache.posts
    }
}

impl ContentItem for Category {
    const KIND: ContentKind = ContentKind::Categories;
    type Patch = CategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Category::validate(self)
    }

    fn apply_patch(&mut self, patch: CategoryPatch, _now: &str) {
        patch.apply_to(self);
    }

    fn fallback_items() -> Vec<Self> {
        default_categories()
    }

    fn baseline_slot(cache: &BaselineCache) -> &CacheSlot<Self> {
        &cache.categories
    }
}
