//! Override snapshots in the key/value area.
//!
//! # Invariants
//! - One key per kind (`ContentKind::override_key`).
//! - Unreadable or unparsable snapshots read as absent; the failure is logged.

use crate::content::item::ContentItem;
use crate::content::ContentResult;
use crate::model::envelope::{decode_envelope, encode_envelope, Envelope};
use crate::model::kind::ContentKind;
use crate::storage::{KeyValueStorage, StorageResult};
use log::{error, info, warn};

/// Reads and writes whole-collection override snapshots.
pub struct OverrideStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> OverrideStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the snapshot of `T`, or `None` when absent or unreadable.
    pub fn read<T: ContentItem>(&self) -> Option<Envelope<T>> {
        let text = self.raw(T::KIND)?;
        match decode_envelope::<T>(&text, T::KIND.collection_field()) {
            Ok(envelope) => Some(envelope),
            Err(err) => {
                warn!(
                    "event=override_read module=content status=ignored kind={} error_code=parse_failed error={}",
                    T::KIND,
                    err
                );
                None
            }
        }
    }

    /// Replaces the snapshot of `T` with `envelope`.
    pub fn write<T: ContentItem>(&self, envelope: &Envelope<T>) -> ContentResult<()> {
        let text = encode_envelope(envelope, T::KIND.collection_field())?;
        self.storage.set_value(T::KIND.override_key(), &text)?;
        info!(
            "event=override_write module=content status=ok kind={} items={}",
            T::KIND,
            envelope.items.len()
        );
        Ok(())
    }

    /// Removes the snapshot of `kind`; a missing snapshot is not an error.
    pub fn clear(&self, kind: ContentKind) -> StorageResult<()> {
        self.storage.remove_value(kind.override_key())?;
        info!("event=override_clear module=content status=ok kind={kind}");
        Ok(())
    }

    /// Whether a snapshot key exists for `kind`, parsable or not.
    pub fn contains(&self, kind: ContentKind) -> bool {
        self.raw(kind).is_some()
    }

    fn raw(&self, kind: ContentKind) -> Option<String> {
        match self.storage.get_value(kind.override_key()) {
            Ok(value) => value,
            Err(err) => {
                error!(
                    "event=override_read module=content status=error kind={} error_code=storage_read_failed error={}",
                    kind, err
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OverrideStore;
    use crate::model::envelope::Envelope;
    use crate::model::fact::Fact;
    use crate::model::kind::ContentKind;
    use crate::storage::{KeyValueStorage, MemoryKeyValueStorage};

    #[test]
    fn write_read_clear_cycle() {
        let store = OverrideStore::new(MemoryKeyValueStorage::new());
        assert!(store.read::<Fact>().is_none());

        let envelope = Envelope::new("t", vec![Fact::with_id("1", "a", "Food")]);
        store.write(&envelope).unwrap();
        assert_eq!(store.read::<Fact>().unwrap(), envelope);
        assert!(store.contains(ContentKind::Facts));
        assert!(!store.contains(ContentKind::BlogPosts));

        store.clear(ContentKind::Facts).unwrap();
        store.clear(ContentKind::Facts).unwrap();
        assert!(store.read::<Fact>().is_none());
    }

    #[test]
    fn corrupt_snapshot_reads_as_absent() {
        let storage = MemoryKeyValueStorage::new();
        storage.set_value("temp_facts_data", "not json").unwrap();
        let store = OverrideStore::new(&storage);

        assert!(store.read::<Fact>().is_none());
        assert!(store.contains(ContentKind::Facts));
    }
}
