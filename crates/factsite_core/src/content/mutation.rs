//! Copy-on-write mutations over the effective collection.
//!
//! # Invariants
//! - Each call reads `effective::<T>()`, changes it in memory and writes the
//!   whole list back as a new override snapshot with a fresh `lastUpdated`.
//! - Created ids never collide with ids already in the collection.
//! - `unique_key` values (blog slugs) stay unique; conflicts fail before
//!   anything is written.
//! - `update` of an unknown id fails with `NotFound` and writes nothing.
//! - `update` only rejects problems the patch introduces. Baseline records
//!   with legacy slugs stay editable as long as the slug is left alone.
//! - `delete` of an unknown id is a no-op and writes nothing.

use crate::content::clock::now_timestamp;
use crate::content::item::ContentItem;
use crate::content::resolver::HybridResolver;
use crate::content::{ContentError, ContentResult};
use crate::model::envelope::Envelope;
use crate::storage::KeyValueStorage;
use log::{debug, info, warn};
use uuid::Uuid;

impl<S: KeyValueStorage> HybridResolver<'_, S> {
    /// Appends `item` under a fresh id and returns the stored record.
    ///
    /// Any id already set on `item` is replaced.
    pub fn create<T: ContentItem>(&self, mut item: T) -> ContentResult<T> {
        let mut items = self.effective::<T>();
        item.assign_id(fresh_id(&items));
        item.validate()?;
        ensure_unique_key(&item, &items)?;

        items.push(item.clone());
        self.commit(items)?;
        info!(
            "event=content_create module=content status=ok kind={} id={}",
            T::KIND,
            item.id()
        );
        Ok(item)
    }

    /// Applies `patch` to the item with `id` and returns the updated record.
    pub fn update<T: ContentItem>(&self, id: &str, patch: T::Patch) -> ContentResult<T> {
        let mut items = self.effective::<T>();
        let Some(index) = items.iter().position(|item| item.id() == id) else {
            warn!(
                "event=content_update module=content status=error kind={} id={} error_code=not_found",
                T::KIND,
                id
            );
            return Err(ContentError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            });
        };

        let original = &items[index];
        let mut updated = original.clone();
        updated.apply_patch(patch, &now_timestamp());
        validate_changes(original, &updated)?;
        if updated.unique_key() != original.unique_key() {
            ensure_unique_key(&updated, &items)?;
        }

        items[index] = updated.clone();
        self.commit(items)?;
        info!(
            "event=content_update module=content status=ok kind={} id={}",
            T::KIND,
            id
        );
        Ok(updated)
    }

    /// Removes the item with `id`. Returns whether anything was removed.
    pub fn delete<T: ContentItem>(&self, id: &str) -> ContentResult<bool> {
        let mut items = self.effective::<T>();
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            debug!(
                "event=content_delete module=content status=noop kind={} id={}",
                T::KIND,
                id
            );
            return Ok(false);
        }

        self.commit(items)?;
        info!(
            "event=content_delete module=content status=ok kind={} id={}",
            T::KIND,
            id
        );
        Ok(true)
    }

    fn commit<T: ContentItem>(&self, items: Vec<T>) -> ContentResult<()> {
        self.overrides.write(&Envelope::new(now_timestamp(), items))
    }
}

fn fresh_id<T: ContentItem>(items: &[T]) -> String {
    loop {
        let candidate = Uuid::new_v4().to_string();
        if !items.iter().any(|item| item.id() == candidate) {
            return candidate;
        }
    }
}

/// Fails when `updated` is invalid in a way `original` was not.
fn validate_changes<T: ContentItem>(original: &T, updated: &T) -> ContentResult<()> {
    match updated.validate() {
        Ok(()) => Ok(()),
        Err(err) if original.validate().err().as_ref() == Some(&err) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn ensure_unique_key<T: ContentItem>(item: &T, items: &[T]) -> ContentResult<()> {
    let Some(key) = item.unique_key() else {
        return Ok(());
    };
    let taken = items
        .iter()
        .filter(|other| other.id() != item.id())
        .any(|other| other.unique_key() == Some(key));
    if taken {
        warn!(
            "event=content_conflict module=content status=error kind={} id={} error_code=slug_conflict",
            T::KIND,
            item.id()
        );
        return Err(ContentError::SlugConflict(key.to_string()));
    }
    Ok(())
}
