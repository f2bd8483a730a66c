//! Fact accessors.

use crate::content::clock::now_timestamp;
use crate::content::{ContentResult, HybridResolver};
use crate::model::category::Category;
use crate::model::fact::{Fact, FactDraft, FactPatch};
use crate::storage::KeyValueStorage;
use rand::seq::SliceRandom;

pub struct FactService<'a, S> {
    resolver: HybridResolver<'a, S>,
}

impl<'a, S: KeyValueStorage> FactService<'a, S> {
    pub fn new(resolver: HybridResolver<'a, S>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &HybridResolver<'a, S> {
        &self.resolver
    }

    /// All effective facts in collection order.
    pub fn list_facts(&self) -> Vec<Fact> {
        self.resolver.effective()
    }

    pub fn get_fact(&self, id: &str) -> Option<Fact> {
        self.resolver.find(id)
    }

    /// Facts whose category matches `category`, ignoring ASCII case.
    pub fn facts_by_category(&self, category: &str) -> Vec<Fact> {
        self.list_facts()
            .into_iter()
            .filter(|fact| fact.in_category(category))
            .collect()
    }

    /// Effective facts in uniformly shuffled order, optionally truncated.
    pub fn random_facts(&self, limit: Option<usize>) -> Vec<Fact> {
        let mut facts = self.list_facts();
        facts.shuffle(&mut rand::rng());
        if let Some(limit) = limit {
            facts.truncate(limit);
        }
        facts
    }

    pub fn categories(&self) -> Vec<Category> {
        self.resolver.effective()
    }

    /// Creates an approved, verified fact stamped with the current time.
    pub fn create_fact(&self, draft: FactDraft) -> ContentResult<Fact> {
        self.resolver.create(draft.into_fact(&now_timestamp()))
    }

    pub fn update_fact(&self, id: &str, patch: FactPatch) -> ContentResult<Fact> {
        self.resolver.update::<Fact>(id, patch)
    }

    pub fn delete_fact(&self, id: &str) -> ContentResult<bool> {
        self.resolver.delete::<Fact>(id)
    }
}
