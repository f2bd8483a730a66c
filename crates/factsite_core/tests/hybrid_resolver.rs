use factsite_core::db::open_db_in_memory;
use factsite_core::model::seed::sample_blog_post;
use factsite_core::{
    BaselineLoader, BlogPost, ContentKind, Envelope, Fact, FactDraft, FactService,
    HybridResolver, KeyValueStorage, MemoryKeyValueStorage, NoopKeyValueStorage,
    SqliteKeyValueStorage, StaticDocumentSource,
};
use std::sync::Arc;

const FACTS_DOC: &str = r#"{
  "version": "1.0.0",
  "lastUpdated": "2025-05-01T00:00:00.000Z",
  "facts": [
    { "id": "1", "text": "Honey never spoils.", "category": "Food" },
    { "id": "2", "text": "Venus days are long.", "category": "Space" }
  ]
}"#;

fn facts_source() -> Arc<StaticDocumentSource> {
    Arc::new(StaticDocumentSource::new().with_document("/data/facts.json", FACTS_DOC))
}

#[test]
fn baseline_is_served_when_no_override_exists() {
    let loader = BaselineLoader::new(facts_source());
    let resolver = HybridResolver::new(&loader, MemoryKeyValueStorage::new());

    let ids = resolver
        .effective::<Fact>()
        .into_iter()
        .map(|fact| fact.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["1", "2"]);
    assert!(!resolver.has_pending_overrides(ContentKind::Facts));
}

#[test]
fn override_snapshot_wins_regardless_of_baseline() {
    let loader = BaselineLoader::new(facts_source());
    let resolver = HybridResolver::new(&loader, MemoryKeyValueStorage::new());

    let snapshot = Envelope::new(
        "2025-06-01T00:00:00.000Z",
        vec![Fact::with_id("only", "Shadowing fact", "Science")],
    );
    resolver.overrides().write(&snapshot).unwrap();

    assert_eq!(resolver.effective::<Fact>(), snapshot.items);
    assert!(resolver.has_pending_overrides(ContentKind::Facts));
}

#[test]
fn empty_override_snapshot_still_hides_baseline() {
    let loader = BaselineLoader::new(facts_source());
    let resolver = HybridResolver::new(&loader, MemoryKeyValueStorage::new());

    resolver
        .overrides()
        .write(&Envelope::<Fact>::new("t", Vec::new()))
        .unwrap();

    assert!(resolver.effective::<Fact>().is_empty());
}

#[test]
fn corrupt_override_falls_back_to_baseline() {
    let storage = MemoryKeyValueStorage::new();
    storage.set_value("temp_facts_data", "{broken").unwrap();
    let loader = BaselineLoader::new(facts_source());
    let resolver = HybridResolver::new(&loader, &storage);
    assert_eq!(resolver.effective::<Fact>().len(), 2);
}

#[test]
fn failed_blog_fetch_serves_sample_post() {
    let loader = BaselineLoader::new(StaticDocumentSource::new());
    let resolver = HybridResolver::new(&loader, MemoryKeyValueStorage::new());

    assert_eq!(resolver.effective::<BlogPost>(), vec![sample_blog_post()]);
}

#[test]
fn reset_drops_override_and_refetches_baseline() {
    let source = facts_source();
    let loader = BaselineLoader::new(Arc::clone(&source));
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKeyValueStorage::new(&conn);
    let service = FactService::new(HybridResolver::new(&loader, &storage));

    service
        .create_fact(FactDraft::new("X", "Science"))
        .unwrap();
    assert_eq!(service.list_facts().len(), 3);
    assert_eq!(source.fetch_count(), 1);

    service.resolver().reset(ContentKind::Facts).unwrap();
    assert!(!service.resolver().has_pending_overrides(ContentKind::Facts));
    assert!(!loader.cache().is_loaded(ContentKind::Facts));

    let facts = service.list_facts();
    assert_eq!(facts.len(), 2);
    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn reset_only_touches_the_named_kind() {
    let loader = BaselineLoader::new(facts_source());
    let storage = MemoryKeyValueStorage::new();
    let resolver = HybridResolver::new(&loader, &storage);

    resolver
        .overrides()
        .write(&Envelope::new("t", vec![sample_blog_post()]))
        .unwrap();
    resolver
        .overrides()
        .write(&Envelope::<Fact>::new("t", Vec::new()))
        .unwrap();

    resolver.reset(ContentKind::Facts).unwrap();
    assert!(!resolver.has_pending_overrides(ContentKind::Facts));
    assert!(resolver.has_pending_overrides(ContentKind::BlogPosts));
}

#[test]
fn noop_storage_always_serves_baseline() {
    let loader = BaselineLoader::new(facts_source());
    let service = FactService::new(HybridResolver::new(&loader, NoopKeyValueStorage));

    let created = service.create_fact(FactDraft::new("X", "Science")).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(service.list_facts().len(), 2);
}

#[test]
fn resolvers_sharing_one_loader_fetch_once() {
    let source = facts_source();
    let loader = BaselineLoader::new(Arc::clone(&source));

    for _ in 0..3 {
        let resolver = HybridResolver::new(&loader, MemoryKeyValueStorage::new());
        assert_eq!(resolver.effective::<Fact>().len(), 2);
    }
    assert_eq!(source.fetch_count(), 1);
}
