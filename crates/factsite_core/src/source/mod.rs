//! Static document sources for baseline envelopes.
//!
//! # Responsibility
//! - Fetch the raw text of a baseline document by its fixed path.
//!
//! # Invariants
//! - Sources never parse; envelope decoding happens in the baseline loader.
//! - Failures are reported as `FetchError`, never panics.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod directory;
pub mod static_docs;

pub use directory::DirectoryDocumentSource;
pub use static_docs::StaticDocumentSource;

#[derive(Debug)]
pub enum FetchError {
    NotFound(String),
    /// Path is empty or escapes the source root.
    InvalidPath(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "document not found: {path}"),
            Self::InvalidPath(path) => write!(f, "invalid document path: `{path}`"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read-only origin of baseline documents.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for std::sync::Arc<S> {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch(path)
    }
}
