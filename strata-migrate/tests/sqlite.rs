//! End-to-end runs against a real SQLite database.

#![cfg(feature = "sqlite")]

use strata_ddl::{ColumnOptions, SqliteDialect};
use strata_migrate::{
    DatabaseGateway, Migration, MigrationBuilder, MigrationRegistry, Runner, SqliteGateway,
};

fn create_users_up(m: &mut MigrationBuilder<'_>) {
    m.create_table("users", |t| {
        t.string("name", ());
        t.integer("age", ColumnOptions::new().limit(1));
        t.primary_key("name");
        t.index("age");
    });
}

fn create_users_down(m: &mut MigrationBuilder<'_>) {
    m.drop_table("users");
}

fn add_bio_up(m: &mut MigrationBuilder<'_>) {
    m.change_table("users", |t| {
        t.text("bio", ());
        t.index("name");
    });
}

fn add_bio_down(m: &mut MigrationBuilder<'_>) {
    m.remove_index("users", "name");
}

fn registry() -> MigrationRegistry {
    let mut registry = MigrationRegistry::new();
    registry
        .register(Migration::new(
            "20240101120000_create_users",
            create_users_up,
            create_users_down,
        ))
        .unwrap();
    registry
        .register(Migration::new(
            "20240102120000_add_bio",
            add_bio_up,
            add_bio_down,
        ))
        .unwrap();
    registry
}

#[tokio::test]
async fn test_migrate_rollback_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strata.db");

    let gateway = SqliteGateway::open(&path).await.unwrap();
    let mut runner = Runner::new(registry(), gateway, Box::new(SqliteDialect));

    let report = runner.migrate().await.unwrap();
    assert_eq!(
        report.applied,
        vec!["20240101120000_create_users", "20240102120000_add_bio"]
    );

    let status = runner.status().await.unwrap();
    assert_eq!(status.current, Some(20240102120000));
    assert!(status.pending.is_empty());

    let report = runner.rollback(2).await.unwrap();
    assert_eq!(
        report.rolled_back,
        vec!["20240102120000_add_bio", "20240101120000_create_users"]
    );

    let status = runner.status().await.unwrap();
    assert_eq!(status.current, None);
    assert_eq!(status.pending.len(), 2);

    // The whole chain applies cleanly onto the rolled-back schema.
    let report = runner.migrate().await.unwrap();
    assert_eq!(report.applied.len(), 2);
    runner.close().await.unwrap();

    let mut gateway = SqliteGateway::open(&path).await.unwrap();
    assert!(gateway.table_exists("users").await.unwrap());
    assert!(gateway.table_exists("schema_migrations").await.unwrap());
    assert!(!gateway.table_exists("posts").await.unwrap());
    gateway.close().await.unwrap();
}

#[tokio::test]
async fn test_migrate_in_memory_is_idempotent() {
    let gateway = SqliteGateway::open_in_memory().await.unwrap();
    let mut runner = Runner::new(registry(), gateway, Box::new(SqliteDialect));

    assert_eq!(runner.migrate().await.unwrap().applied.len(), 2);
    assert_eq!(runner.migrate().await.unwrap().applied.len(), 0);
    runner.close().await.unwrap();
}
