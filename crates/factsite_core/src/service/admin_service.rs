//! Admin tooling: export, reset and pending-change status.

use crate::content::{ContentResult, ContentStatus, HybridResolver};
use crate::model::kind::ContentKind;
use crate::storage::KeyValueStorage;

pub struct AdminService<'a, S> {
    resolver: HybridResolver<'a, S>,
}

impl<'a, S: KeyValueStorage> AdminService<'a, S> {
    pub fn new(resolver: HybridResolver<'a, S>) -> Self {
        Self { resolver }
    }

    /// Envelope text of the effective collection, ready for promotion.
    pub fn export(&self, kind: ContentKind) -> ContentResult<String> {
        self.resolver.export_kind(kind)
    }

    /// Discards the override snapshot and baseline memo of `kind`.
    pub fn reset(&self, kind: ContentKind) -> ContentResult<()> {
        self.resolver.reset(kind)
    }

    /// Resets every kind, stopping at the first storage failure.
    pub fn reset_all(&self) -> ContentResult<()> {
        for kind in ContentKind::ALL {
            self.resolver.reset(kind)?;
        }
        Ok(())
    }

    pub fn has_pending_overrides(&self, kind: ContentKind) -> bool {
        self.resolver.has_pending_overrides(kind)
    }

    pub fn status(&self) -> Vec<ContentStatus> {
        ContentKind::ALL
            .into_iter()
            .map(|kind| self.resolver.status(kind))
            .collect()
    }
}
