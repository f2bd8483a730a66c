//! Moderation queue for visitor-submitted facts.
//!
//! # Invariants
//! - The queue is a JSON array under `submitted_facts`, in submission order.
//! - A corrupt queue reads as empty (logged) and is replaced on next write.
//! - Approval goes through the fact mutation API, so it creates or replaces
//!   the facts override snapshot like any admin edit.

use crate::content::clock::now_timestamp;
use crate::content::{ContentResult, HybridResolver};
use crate::model::envelope::EnvelopeError;
use crate::model::fact::Fact;
use crate::model::submission::{FactSubmission, SubmittedFact};
use crate::storage::KeyValueStorage;
use log::{error, info, warn};
use uuid::Uuid;

const SUBMISSIONS_KEY: &str = "submitted_facts";

pub struct SubmissionService<'a, S> {
    resolver: HybridResolver<'a, S>,
}

impl<'a, S: KeyValueStorage> SubmissionService<'a, S> {
    pub fn new(resolver: HybridResolver<'a, S>) -> Self {
        Self { resolver }
    }

    /// Pending submissions, oldest first.
    pub fn list_submissions(&self) -> Vec<SubmittedFact> {
        let storage = self.resolver.overrides().storage();
        let text = match storage.get_value(SUBMISSIONS_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(
                    "event=submissions_read module=service status=error error_code=storage_read_failed error={err}"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(submissions) => submissions,
            Err(err) => {
                warn!(
                    "event=submissions_read module=service status=ignored error_code=parse_failed error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Queues a visitor submission as unapproved.
    pub fn submit(&self, submission: FactSubmission) -> ContentResult<SubmittedFact> {
        submission.validate()?;
        let mut queue = self.list_submissions();
        let submitted = submission.into_submitted(Uuid::new_v4().to_string(), &now_timestamp());
        queue.push(submitted.clone());
        self.save(&queue)?;
        info!(
            "event=submission_create module=service status=ok id={} pending={}",
            submitted.id,
            queue.len()
        );
        Ok(submitted)
    }

    /// Promotes a submission to an approved fact.
    ///
    /// The submission leaves the stored queue before the fact is created, and
    /// is put back if the create fails, so one submission yields at most one
    /// fact. Returns `None` when no submission has `id`.
    pub fn approve(&self, id: &str) -> ContentResult<Option<Fact>> {
        let original = self.list_submissions();
        let Some(index) = original.iter().position(|entry| entry.id == id) else {
            return Ok(None);
        };
        let mut queue = original.clone();
        let submission = queue.remove(index);
        self.save(&queue)?;

        let fact = Fact {
            approved: Some(true),
            verified: Some(true),
            submitted_by: Some(submission.submitted_by),
            source: submission.source,
            created_at: Some(submission.created_at),
            ..Fact::new(submission.text, submission.category)
        };
        let created = match self.resolver.create(fact) {
            Ok(created) => created,
            Err(err) => {
                if let Err(restore_err) = self.save(&original) {
                    error!(
                        "event=submission_approve module=service status=error submission_id={} error_code=queue_restore_failed error={}",
                        id, restore_err
                    );
                }
                warn!(
                    "event=submission_approve module=service status=error submission_id={} error_code=create_failed error={}",
                    id, err
                );
                return Err(err);
            }
        };
        info!(
            "event=submission_approve module=service status=ok submission_id={} fact_id={}",
            id, created.id
        );
        Ok(Some(created))
    }

    /// Drops a submission. Returns whether one was removed.
    pub fn reject(&self, id: &str) -> ContentResult<bool> {
        let mut queue = self.list_submissions();
        let before = queue.len();
        queue.retain(|entry| entry.id != id);
        if queue.len() == before {
            return Ok(false);
        }
        self.save(&queue)?;
        info!("event=submission_reject module=service status=ok id={id}");
        Ok(true)
    }

    fn save(&self, queue: &[SubmittedFact]) -> ContentResult<()> {
        let text = serde_json::to_string(queue).map_err(EnvelopeError::from)?;
        self.resolver
            .overrides()
            .storage()
            .set_value(SUBMISSIONS_KEY, &text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmissionService, SUBMISSIONS_KEY};
    use crate::content::{BaselineLoader, ContentError, HybridResolver};
    use crate::model::fact::Fact;
    use crate::model::submission::FactSubmission;
    use crate::source::StaticDocumentSource;
    use crate::storage::{KeyValueStorage, MemoryKeyValueStorage, StorageError, StorageResult};

    /// Memory storage that refuses to write fact override snapshots.
    #[derive(Default)]
    struct FactsWriteFails {
        inner: MemoryKeyValueStorage,
    }

    impl KeyValueStorage for FactsWriteFails {
        fn get_value(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get_value(key)
        }

        fn set_value(&self, key: &str, value: &str) -> StorageResult<()> {
            if key == "temp_facts_data" {
                return Err(StorageError::Unavailable("disk full".to_string()));
            }
            self.inner.set_value(key, value)
        }

        fn remove_value(&self, key: &str) -> StorageResult<()> {
            self.inner.remove_value(key)
        }
    }

    fn submission(text: &str) -> FactSubmission {
        FactSubmission {
            text: text.to_string(),
            category: "Animals".to_string(),
            submitted_by: "visitor".to_string(),
            source: None,
        }
    }

    #[test]
    fn failed_create_keeps_submission_queued() {
        let loader = BaselineLoader::new(StaticDocumentSource::new());
        let storage = FactsWriteFails::default();
        let service = SubmissionService::new(HybridResolver::new(&loader, &storage));
        let queued = service.submit(submission("Owls cannot move their eyes.")).unwrap();

        let err = service.approve(&queued.id).unwrap_err();
        assert!(matches!(err, ContentError::Storage(_)));
        assert_eq!(service.list_submissions(), vec![queued]);
        assert!(HybridResolver::new(&loader, &storage)
            .effective::<Fact>()
            .iter()
            .all(|fact| fact.submitted_by.is_none()));
    }

    #[test]
    fn invalid_stored_submission_is_restored_after_failed_approval() {
        let loader = BaselineLoader::new(StaticDocumentSource::new());
        let storage = MemoryKeyValueStorage::new();
        storage
            .set_value(
                SUBMISSIONS_KEY,
                r#"[{"id":"s1","text":" ","category":"Animals","submittedBy":"v","approved":false,"createdAt":"t"}]"#,
            )
            .unwrap();
        let service = SubmissionService::new(HybridResolver::new(&loader, &storage));

        assert!(matches!(
            service.approve("s1").unwrap_err(),
            ContentError::Validation(_)
        ));
        assert_eq!(service.list_submissions().len(), 1);
        assert!(storage.get_value("temp_facts_data").unwrap().is_none());
    }

    #[test]
    fn approval_dequeues_exactly_once() {
        let loader = BaselineLoader::new(StaticDocumentSource::new());
        let storage = MemoryKeyValueStorage::new();
        let service = SubmissionService::new(HybridResolver::new(&loader, &storage));
        let queued = service.submit(submission("Cows have best friends.")).unwrap();

        assert!(service.approve(&queued.id).unwrap().is_some());
        assert!(service.approve(&queued.id).unwrap().is_none());
        assert!(service.list_submissions().is_empty());
    }
}
