//! Baseline documents served from a directory tree.

use crate::source::{DocumentSource, FetchError};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Resolves `/data/facts.json` style paths below `root`.
#[derive(Debug, Clone)]
pub struct DirectoryDocumentSource {
    root: PathBuf,
}

impl DirectoryDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim().trim_start_matches('/'));
        let mut resolved = self.root.clone();
        let mut has_segment = false;
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    has_segment = true;
                }
                Component::CurDir => {}
                _ => return Err(FetchError::InvalidPath(path.to_string())),
            }
        }
        if !has_segment {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }
}

impl DocumentSource for DirectoryDocumentSource {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let resolved = self.resolve(path)?;
        std::fs::read_to_string(&resolved).map_err(|err| match err.kind() {
            ErrorKind::NotFound => FetchError::NotFound(path.to_string()),
            _ => FetchError::Io {
                path: resolved,
                source: err,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DirectoryDocumentSource;
    use crate::source::{DocumentSource, FetchError};

    #[test]
    fn fetch_reads_below_root_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/facts.json"), "{}").unwrap();
        let source = DirectoryDocumentSource::new(dir.path());

        assert_eq!(source.fetch("/data/facts.json").unwrap(), "{}");
        assert!(matches!(
            source.fetch("/data/blog-posts.json").unwrap_err(),
            FetchError::NotFound(_)
        ));
    }

    #[test]
    fn fetch_rejects_escaping_or_empty_paths() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryDocumentSource::new(dir.path());

        assert!(matches!(
            source.fetch("/../secret.json").unwrap_err(),
            FetchError::InvalidPath(_)
        ));
        assert!(matches!(
            source.fetch("/").unwrap_err(),
            FetchError::InvalidPath(_)
        ));
    }
}
