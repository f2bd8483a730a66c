//! Hybrid content resolution.
//!
//! # Responsibility
//! - Load read-only baseline envelopes once per cache lifetime.
//! - Keep admin edits as whole-collection override snapshots.
//! - Resolve the effective collection per kind and fold it back into
//!   exportable envelope text.
//!
//! # Invariants
//! - An override snapshot, when present, fully replaces the baseline for its
//!   kind. There is no per-item merge.
//! - Every mutation rewrites the entire snapshot for its kind.
//! - Fetch and parse failures never reach resolver callers; they degrade to
//!   fallback content or to "no override".

use crate::model::envelope::EnvelopeError;
use crate::model::kind::ContentKind;
use crate::model::validation::ValidationError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod baseline;
pub mod clock;
pub mod export;
pub mod invalidate;
pub mod item;
pub mod mutation;
pub mod override_store;
pub mod resolver;

pub use baseline::{BaselineCache, BaselineLoader, CacheSlot};
pub use export::import_envelope;
pub use item::ContentItem;
pub use override_store::OverrideStore;
pub use resolver::{ContentStatus, HybridResolver};

pub type ContentResult<T> = Result<T, ContentError>;

/// Failure of a mutation or export call.
#[derive(Debug)]
pub enum ContentError {
    NotFound { kind: ContentKind, id: String },
    /// Another post in the effective collection already uses this slug.
    SlugConflict(String),
    Validation(ValidationError),
    Storage(StorageError),
    Encode(EnvelopeError),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} item not found: {id}"),
            Self::SlugConflict(slug) => write!(f, "slug already in use: {slug}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::NotFound { .. } | Self::SlugConflict(_) => None,
        }
    }
}

impl From<ValidationError> for ContentError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for ContentError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<EnvelopeError> for ContentError {
    fn from(value: EnvelopeError) -> Self {
        Self::Encode(value)
    }
}
