use factsite_core::db::migrations::{current_user_version, latest_version};
use factsite_core::db::{open_db, open_db_in_memory, DbError};
use factsite_core::{KeyValueStorage, SqliteKeyValueStorage};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn values_survive_reopening_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factsite.db");

    {
        let conn = open_db(&path).unwrap();
        SqliteKeyValueStorage::new(&conn)
            .set_value("temp_facts_data", "{}")
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    let stored = SqliteKeyValueStorage::new(&conn)
        .get_value("temp_facts_data")
        .unwrap();
    assert_eq!(stored.as_deref(), Some("{}"));
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_under_a_missing_directory_reports_the_target_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("factsite.db");

    let err = open_db(&path).unwrap_err();
    match &err {
        DbError::Open { target, .. } => assert_eq!(target.as_deref(), Some(path.as_path())),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("cannot open override database"));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
