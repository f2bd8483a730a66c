//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose content reads, admin writes, export and reset to Dart via FRB.
//! - Own the process-wide baseline loader so every call shares one cache.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Reads never fail: without a usable database they serve the baseline.
//! - Item payloads cross the boundary as camelCase JSON text.

use factsite_core::db::open_db;
use factsite_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AboutService,
    AboutUsPatch, AdminService, BaselineLoader, BlogPostDraft, BlogPostPatch, BlogService,
    ContentError, ContentKind, CoreConfig, FactDraft, FactPatch, FactService, FactSubmission,
    HybridResolver, KeyValueStorage, MemoryKeyValueStorage, NoopKeyValueStorage,
    SqliteKeyValueStorage, SubmissionService,
};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const RANDOM_LIMIT_MAX: u32 = 100;

static CONTENT_RUNTIME: OnceLock<ContentRuntime> = OnceLock::new();

/// Where admin overrides live for the lifetime of the process.
enum OverrideArea {
    /// SQLite file, opened per call.
    Database(PathBuf),
    /// Process-wide map used when no database path is configured.
    Memory(MemoryKeyValueStorage),
}

/// Baseline loader plus the override area shared by all FFI calls.
struct ContentRuntime {
    loader: BaselineLoader,
    data_root: PathBuf,
    overrides: OverrideArea,
}

impl ContentRuntime {
    fn new(data_root: PathBuf, db_path: Option<PathBuf>) -> Self {
        info!(
            "event=ffi_configure module=ffi status=ok data_root={} overrides={}",
            data_root.display(),
            db_path
                .as_deref()
                .map_or_else(|| "memory".to_string(), |path| path.display().to_string())
        );
        let overrides = match db_path {
            Some(path) => OverrideArea::Database(path),
            None => OverrideArea::Memory(MemoryKeyValueStorage::new()),
        };
        Self {
            loader: BaselineLoader::from_directory(data_root.clone()),
            data_root,
            overrides,
        }
    }

    fn from_config(config: CoreConfig) -> Self {
        Self::new(config.data_root, config.database_path)
    }

    fn from_env() -> Self {
        let config = CoreConfig::from_env().unwrap_or_else(|err| {
            warn!("event=ffi_configure module=ffi status=fallback error={err}");
            CoreConfig::default()
        });
        Self::from_config(config)
    }

    fn db_path(&self) -> Option<&Path> {
        match &self.overrides {
            OverrideArea::Database(path) => Some(path.as_path()),
            OverrideArea::Memory(_) => None,
        }
    }

    /// Runs a read; a database that cannot be opened reads as no overrides.
    fn read_with<R>(&self, f: impl FnOnce(HybridResolver<'_, &dyn KeyValueStorage>) -> R) -> R {
        let path = match &self.overrides {
            OverrideArea::Memory(storage) => {
                return f(HybridResolver::new(
                    &self.loader,
                    storage as &dyn KeyValueStorage,
                ))
            }
            OverrideArea::Database(path) => path,
        };
        match open_db(path) {
            Ok(conn) => {
                let storage = SqliteKeyValueStorage::new(&conn);
                f(HybridResolver::new(
                    &self.loader,
                    &storage as &dyn KeyValueStorage,
                ))
            }
            Err(err) => {
                warn!(
                    "event=ffi_read module=ffi status=fallback error_code=db_open_failed error={err}"
                );
                f(HybridResolver::new(
                    &self.loader,
                    &NoopKeyValueStorage as &dyn KeyValueStorage,
                ))
            }
        }
    }

    fn with_storage<R>(
        &self,
        f: impl FnOnce(HybridResolver<'_, &dyn KeyValueStorage>) -> Result<R, String>,
    ) -> Result<R, String> {
        let path = match &self.overrides {
            OverrideArea::Memory(storage) => {
                return f(HybridResolver::new(
                    &self.loader,
                    storage as &dyn KeyValueStorage,
                ))
            }
            OverrideArea::Database(path) => path,
        };
        let conn = open_db(path).map_err(|err| format!("content DB open failed: {err}"))?;
        let storage = SqliteKeyValueStorage::new(&conn);
        f(HybridResolver::new(
            &self.loader,
            &storage as &dyn KeyValueStorage,
        ))
    }
}

fn runtime() -> &'static ContentRuntime {
    CONTENT_RUNTIME.get_or_init(ContentRuntime::from_env)
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Points the content runtime at a baseline directory and override database.
///
/// A blank `db_path` keeps overrides in memory for the life of the process.
/// Must run before the first content call; otherwise `FACTSITE_*`
/// environment variables (or defaults) are used.
///
/// # FFI contract
/// - Idempotent for identical arguments.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_content(data_root: String, db_path: String) -> String {
    let data_root = PathBuf::from(data_root.trim());
    if data_root.as_os_str().is_empty() {
        return "configure_content failed: data_root is required".to_string();
    }
    let db_path = Some(db_path.trim())
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    let current =
        CONTENT_RUNTIME.get_or_init(|| ContentRuntime::new(data_root.clone(), db_path.clone()));
    if current.data_root == data_root && current.db_path() == db_path.as_deref() {
        String::new()
    } else {
        format!(
            "configure_content failed: already configured with data_root={} db_path={}",
            current.data_root.display(),
            current
                .db_path()
                .map_or_else(|| "<memory>".to_string(), |path| path.display().to_string())
        )
    }
}

/// Generic action response envelope for admin writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id of the created or changed item, when there is one.
    pub item_id: Option<String>,
    /// Item JSON after the write, when there is one.
    pub item_json: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ContentActionResponse {
    fn success(
        message: impl Into<String>,
        item_id: Option<String>,
        item_json: Option<String>,
    ) -> Self {
        Self {
            ok: true,
            item_id,
            item_json,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            item_json: None,
            message: message.into(),
        }
    }
}

/// Export payload for admin "download" flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentExportResponse {
    pub ok: bool,
    /// Envelope text ready to replace the baseline document.
    pub content: String,
    /// Suggested file name, e.g. `facts.json`.
    pub file_name: String,
    pub message: String,
}

/// Effective facts as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn list_facts_json() -> String {
    runtime().read_with(|resolver| to_json(&FactService::new(resolver).list_facts()))
}

/// One fact as JSON, or `None` when the id is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn get_fact_json(id: String) -> Option<String> {
    runtime().read_with(|resolver| {
        FactService::new(resolver)
            .get_fact(id.trim())
            .map(|fact| to_json(&fact))
    })
}

/// Facts of one category (case-insensitive) as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn facts_by_category_json(category: String) -> String {
    runtime().read_with(|resolver| {
        to_json(&FactService::new(resolver).facts_by_category(&category))
    })
}

/// Shuffled facts as a JSON array; `limit` is capped at 100.
#[flutter_rust_bridge::frb(sync)]
pub fn random_facts_json(limit: Option<u32>) -> String {
    let limit = limit.map(|value| value.min(RANDOM_LIMIT_MAX) as usize);
    runtime().read_with(|resolver| to_json(&FactService::new(resolver).random_facts(limit)))
}

/// Effective categories as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn list_categories_json() -> String {
    runtime().read_with(|resolver| to_json(&FactService::new(resolver).categories()))
}

/// Every effective post, drafts included, as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn list_posts_json() -> String {
    runtime().read_with(|resolver| to_json(&BlogService::new(resolver).list_posts()))
}

/// Published posts, newest first, as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn published_posts_json() -> String {
    runtime().read_with(|resolver| to_json(&BlogService::new(resolver).published_posts()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn post_by_slug_json(slug: String) -> Option<String> {
    runtime().read_with(|resolver| {
        BlogService::new(resolver)
            .post_by_slug(slug.trim())
            .map(|post| to_json(&post))
    })
}

/// Creates a fact from `FactDraft` JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn create_fact(draft_json: String) -> ContentActionResponse {
    write_item("create_fact", "Fact created.", |resolver| {
        let draft = parse_json::<FactDraft>(&draft_json)?;
        let fact = FactService::new(resolver).create_fact(draft)?;
        Ok((fact.id.clone(), to_json(&fact)))
    })
}

/// Applies `FactPatch` JSON to the fact with `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_fact(id: String, patch_json: String) -> ContentActionResponse {
    write_item("update_fact", "Fact updated.", |resolver| {
        let patch = parse_json::<FactPatch>(&patch_json)?;
        let fact = FactService::new(resolver).update_fact(id.trim(), patch)?;
        Ok((fact.id.clone(), to_json(&fact)))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_fact(id: String) -> ContentActionResponse {
    delete_item("delete_fact", |resolver| {
        FactService::new(resolver).delete_fact(id.trim())
    })
}

/// Creates a post from `BlogPostDraft` JSON; the slug defaults to the title.
#[flutter_rust_bridge::frb(sync)]
pub fn create_post(draft_json: String) -> ContentActionResponse {
    write_item("create_post", "Post created.", |resolver| {
        let draft = parse_json::<BlogPostDraft>(&draft_json)?;
        let post = BlogService::new(resolver).create_post(draft)?;
        Ok((post.id.clone(), to_json(&post)))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn update_post(id: String, patch_json: String) -> ContentActionResponse {
    write_item("update_post", "Post updated.", |resolver| {
        let patch = parse_json::<BlogPostPatch>(&patch_json)?;
        let post = BlogService::new(resolver).update_post(id.trim(), patch)?;
        Ok((post.id.clone(), to_json(&post)))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_post(id: String) -> ContentActionResponse {
    delete_item("delete_post", |resolver| {
        BlogService::new(resolver).delete_post(id.trim())
    })
}

/// Pending visitor submissions as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn list_submissions_json() -> String {
    runtime().read_with(|resolver| {
        to_json(&SubmissionService::new(resolver).list_submissions())
    })
}

/// Queues a visitor submission from `FactSubmission` JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_fact(submission_json: String) -> ContentActionResponse {
    write_item("submit_fact", "Submission received.", |resolver| {
        let submission = parse_json::<FactSubmission>(&submission_json)?;
        let submitted = SubmissionService::new(resolver).submit(submission)?;
        Ok((submitted.id.clone(), to_json(&submitted)))
    })
}

/// Promotes a submission to an approved fact; `item_id` is the new fact id.
#[flutter_rust_bridge::frb(sync)]
pub fn approve_submission(id: String) -> ContentActionResponse {
    let result = runtime().with_storage(|resolver| {
        SubmissionService::new(resolver)
            .approve(id.trim())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Some(fact)) => ContentActionResponse::success(
            "Submission approved.",
            Some(fact.id.clone()),
            Some(to_json(&fact)),
        ),
        Ok(None) => ContentActionResponse::failure(format!(
            "approve_submission failed: no submission {}",
            id.trim()
        )),
        Err(err) => ContentActionResponse::failure(format!("approve_submission failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn reject_submission(id: String) -> ContentActionResponse {
    delete_item("reject_submission", |resolver| {
        SubmissionService::new(resolver).reject(id.trim())
    })
}

/// About page content as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn about_json() -> String {
    runtime().read_with(|resolver| {
        to_json(&AboutService::new(resolver.overrides().storage()).about())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn update_about(patch_json: String) -> ContentActionResponse {
    write_item("update_about", "About page updated.", |resolver| {
        let patch = parse_json::<AboutUsPatch>(&patch_json)?;
        let about = AboutService::new(resolver.overrides().storage()).update_about(patch)?;
        Ok((String::new(), to_json(&about)))
    })
}

/// Renders the effective collection of `kind` as baseline envelope text.
#[flutter_rust_bridge::frb(sync)]
pub fn export_content(kind: String) -> ContentExportResponse {
    let failure = |message: String| ContentExportResponse {
        ok: false,
        content: String::new(),
        file_name: String::new(),
        message,
    };
    let Some(kind) = ContentKind::parse(&kind) else {
        return failure(format!("export_content failed: unknown kind `{kind}`"));
    };
    let file_name = kind
        .document_path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    match runtime().read_with(|resolver| AdminService::new(resolver).export(kind)) {
        Ok(content) => ContentExportResponse {
            ok: true,
            content,
            file_name,
            message: format!("Exported {kind}."),
        },
        Err(err) => failure(format!("export_content failed: {err}")),
    }
}

/// Drops the override snapshot and baseline memo of `kind` (or `all`).
#[flutter_rust_bridge::frb(sync)]
pub fn reset_content(kind: String) -> ContentActionResponse {
    let reset_all = kind.trim().eq_ignore_ascii_case("all");
    let parsed = ContentKind::parse(&kind);
    if !reset_all && parsed.is_none() {
        return ContentActionResponse::failure(format!(
            "reset_content failed: unknown kind `{kind}`"
        ));
    }
    let result = runtime().with_storage(|resolver| {
        let admin = AdminService::new(resolver);
        let reset = match parsed {
            Some(kind) => admin.reset(kind),
            None => admin.reset_all(),
        };
        reset.map_err(|err| err.to_string())
    });
    match result {
        Ok(()) => ContentActionResponse::success("Content reset.", None, None),
        Err(err) => ContentActionResponse::failure(format!("reset_content failed: {err}")),
    }
}

/// Whether admin edits of `kind` are waiting to be exported.
///
/// Unknown kinds report `false`.
#[flutter_rust_bridge::frb(sync)]
pub fn has_pending_changes(kind: String) -> bool {
    let Some(kind) = ContentKind::parse(&kind) else {
        return false;
    };
    runtime().read_with(|resolver| resolver.has_pending_overrides(kind))
}

fn write_item(
    operation: &str,
    message: &str,
    f: impl FnOnce(
        HybridResolver<'_, &dyn KeyValueStorage>,
    ) -> Result<(String, String), ContentCallError>,
) -> ContentActionResponse {
    match runtime().with_storage(|resolver| f(resolver).map_err(|err| err.to_string())) {
        Ok((id, json)) => {
            let id = (!id.is_empty()).then_some(id);
            ContentActionResponse::success(message, id, Some(json))
        }
        Err(err) => ContentActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn delete_item(
    operation: &str,
    f: impl FnOnce(HybridResolver<'_, &dyn KeyValueStorage>) -> Result<bool, ContentError>,
) -> ContentActionResponse {
    match runtime().with_storage(|resolver| f(resolver).map_err(|err| err.to_string())) {
        Ok(true) => ContentActionResponse::success("Deleted.", None, None),
        Ok(false) => ContentActionResponse::success("Nothing to delete.", None, None),
        Err(err) => ContentActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

/// Failure inside a write closure: bad input JSON or a content error.
enum ContentCallError {
    Input(serde_json::Error),
    Content(ContentError),
}

impl std::fmt::Display for ContentCallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "invalid input JSON: {err}"),
            Self::Content(err) => write!(f, "{err}"),
        }
    }
}

impl From<ContentError> for ContentCallError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ContentCallError> {
    serde_json::from_str(text).map_err(ContentCallError::Input)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        warn!("event=ffi_encode module=ffi status=error error={err}");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::{
        approve_submission, configure_content, core_version, create_fact, create_post,
        delete_fact, export_content, facts_by_category_json, get_fact_json, has_pending_changes,
        init_logging, list_facts_json, post_by_slug_json, published_posts_json,
        random_facts_json, reset_content, submit_fact, update_post, ContentRuntime,
        OverrideArea,
    };
    use factsite_core::{CoreConfig, Fact, FactDraft, FactService};
    use std::fs;
    use std::path::Path;
    use std::sync::{Mutex, MutexGuard, Once, PoisonError};
    use std::time::{SystemTime, UNIX_EPOCH};

    static SETUP: Once = Once::new();
    // Writes rewrite whole snapshots, so tests sharing the runtime take turns.
    static CONTENT_LOCK: Mutex<()> = Mutex::new(());

    const FACTS_DOC: &str = r#"{"version":"1.0.0","lastUpdated":"2025-05-01T00:00:00.000Z","facts":[{"id":"1","text":"Honey never spoils.","category":"Food"}]}"#;

    fn write_baseline(root: &Path) {
        let data_dir = root.join("data");
        fs::create_dir_all(&data_dir).expect("create data dir");
        fs::write(data_dir.join("facts.json"), FACTS_DOC).expect("write facts");
    }

    /// Configures the process runtime with in-memory overrides.
    ///
    /// The facts baseline is memoized before the temp directory is removed;
    /// the other kinds fall back to their defaults.
    fn setup() -> MutexGuard<'static, ()> {
        let guard = CONTENT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        SETUP.call_once(|| {
            let root = tempfile::tempdir().expect("create temp dir");
            write_baseline(root.path());

            let error = configure_content(
                root.path().to_string_lossy().into_owned(),
                String::new(),
            );
            assert!(error.is_empty(), "{error}");
            assert!(list_facts_json().contains("Honey never spoils."));
        });
        guard
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn configure_rejects_a_different_second_configuration() {
        let _guard = setup();
        let error = configure_content("/elsewhere".to_string(), "/elsewhere.db".to_string());
        assert!(error.contains("already configured"));
        assert!(!configure_content(String::new(), "x".to_string()).is_empty());
        assert!(super::runtime().db_path().is_none());
    }

    #[test]
    fn created_fact_is_readable_and_deletable() {
        let _guard = setup();
        let token = unique_token("fact");
        let created = create_fact(format!(r#"{{"text":"{token}","category":"Science"}}"#));
        assert!(created.ok, "{}", created.message);
        let id = created.item_id.expect("created fact should return item_id");

        assert!(list_facts_json().contains(&token));
        assert!(get_fact_json(id.clone()).is_some_and(|json| json.contains(&token)));
        assert!(facts_by_category_json("science".to_string()).contains(&token));
        assert!(has_pending_changes("facts".to_string()));

        let deleted = delete_fact(id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(get_fact_json(id).is_none());
    }

    #[test]
    fn invalid_input_is_reported_not_panicked() {
        let _guard = setup();
        let response = create_fact("{not json".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid input JSON"));

        let response = update_post("missing".to_string(), "{}".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("not found"));
    }

    #[test]
    fn unpublished_post_stays_reachable_by_slug() {
        let _guard = setup();
        let token = unique_token("post");
        let created = create_post(format!(r#"{{"title":"{token}","published":true}}"#));
        assert!(created.ok, "{}", created.message);
        let id = created.item_id.expect("created post should return item_id");
        assert!(published_posts_json().contains(&token));

        let updated = update_post(id, r#"{"published":false}"#.to_string());
        assert!(updated.ok, "{}", updated.message);
        assert!(!published_posts_json().contains(&token));
        assert!(post_by_slug_json(token).is_some());
    }

    #[test]
    fn approved_submission_becomes_a_fact() {
        let _guard = setup();
        let token = unique_token("submission");
        let submitted = submit_fact(format!(
            r#"{{"text":"{token}","category":"Animals","submittedBy":"visitor"}}"#
        ));
        assert!(submitted.ok, "{}", submitted.message);

        let approved = approve_submission(submitted.item_id.expect("submission id"));
        assert!(approved.ok, "{}", approved.message);
        assert!(list_facts_json().contains(&token));
        assert!(!approve_submission("missing".to_string()).ok);
    }

    #[test]
    fn export_and_reset_validate_kind() {
        let _guard = setup();
        let export = export_content("categories".to_string());
        assert!(export.ok, "{}", export.message);
        assert_eq!(export.file_name, "categories.json");
        assert!(export.content.contains("\"categories\""));
        assert!(!export_content("comments".to_string()).ok);

        assert!(reset_content("categories".to_string()).ok);
        assert!(!has_pending_changes("categories".to_string()));
        assert!(!reset_content("comments".to_string()).ok);
        assert!(!random_facts_json(Some(1)).is_empty());
    }

    #[test]
    fn config_without_database_keeps_overrides_in_memory() {
        let root = tempfile::tempdir().expect("create temp dir");
        write_baseline(root.path());
        let config = CoreConfig {
            data_root: root.path().to_path_buf(),
            database_path: None,
            ..CoreConfig::default()
        };

        let runtime = ContentRuntime::from_config(config.clone());
        assert!(matches!(runtime.overrides, OverrideArea::Memory(_)));
        let created = runtime
            .with_storage(|resolver| {
                FactService::new(resolver)
                    .create_fact(FactDraft::new("kept in memory", "Science"))
                    .map_err(|err| err.to_string())
            })
            .expect("create in memory");
        let facts = runtime.read_with(|resolver| resolver.effective::<Fact>());
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[1], created);

        let fresh = ContentRuntime::from_config(config);
        assert_eq!(fresh.read_with(|resolver| resolver.effective::<Fact>()).len(), 1);
        let entries = fs::read_dir(root.path())
            .expect("list temp dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect::<Vec<_>>();
        assert_eq!(entries, vec!["data"]);
    }

    #[test]
    fn config_with_database_persists_overrides_across_runtimes() {
        let root = tempfile::tempdir().expect("create temp dir");
        write_baseline(root.path());
        let db_path = root.path().join("content.sqlite3");
        let config = CoreConfig {
            data_root: root.path().to_path_buf(),
            database_path: Some(db_path.clone()),
            ..CoreConfig::default()
        };

        let runtime = ContentRuntime::from_config(config.clone());
        assert_eq!(runtime.db_path(), Some(db_path.as_path()));
        runtime
            .with_storage(|resolver| {
                FactService::new(resolver)
                    .create_fact(FactDraft::new("kept on disk", "Science"))
                    .map_err(|err| err.to_string())
            })
            .expect("create on disk");

        let reopened = ContentRuntime::from_config(config);
        assert_eq!(
            reopened
                .read_with(|resolver| resolver.effective::<Fact>())
                .len(),
            2
        );
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
