//! Cache invalidation after an export has been promoted.

use crate::content::resolver::HybridResolver;
use crate::content::ContentResult;
use crate::model::kind::ContentKind;
use crate::storage::KeyValueStorage;
use log::info;

impl<S: KeyValueStorage> HybridResolver<'_, S> {
    /// Forgets the memoized baseline of `kind` and deletes its override
    /// snapshot, so the next read refetches the baseline document.
    ///
    /// The baseline memo is dropped even when clearing storage fails.
    pub fn reset(&self, kind: ContentKind) -> ContentResult<()> {
        self.baseline.invalidate(kind);
        self.overrides.clear(kind)?;
        info!("event=content_reset module=content status=ok kind={kind}");
        Ok(())
    }
}
