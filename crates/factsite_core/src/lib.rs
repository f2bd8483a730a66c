//! Content core for the facts + blog site.
//!
//! Reconciles read-only baseline documents with locally persisted admin
//! overrides, and exports the result back into baseline form.

pub mod config;
pub mod content;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod source;
pub mod storage;

pub use config::{ConfigError, CoreConfig};
pub use content::{
    import_envelope, BaselineCache, BaselineLoader, ContentError, ContentItem, ContentResult,
    ContentStatus, HybridResolver, OverrideStore,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::about::{AboutUsContent, AboutUsPatch};
pub use model::blog_post::{create_slug, BlogPost, BlogPostDraft, BlogPostPatch};
pub use model::category::{Category, CategoryPatch};
pub use model::envelope::{Envelope, EnvelopeError, ENVELOPE_VERSION};
pub use model::fact::{Fact, FactDraft, FactPatch};
pub use model::kind::ContentKind;
pub use model::submission::{FactSubmission, SubmittedFact};
pub use model::validation::ValidationError;
pub use service::about_service::AboutService;
pub use service::admin_service::AdminService;
pub use service::blog_service::BlogService;
pub use service::fact_service::FactService;
pub use service::submission_service::SubmissionService;
pub use source::{DirectoryDocumentSource, DocumentSource, FetchError, StaticDocumentSource};
pub use storage::{
    KeyValueStorage, MemoryKeyValueStorage, NoopKeyValueStorage, SqliteKeyValueStorage,
    StorageError, StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
