//! Integration tests for the public facade.
//!
//! These tests exercise the full pipeline through `strata::prelude`:
//! building migrations with the DSL, applying them to a real SQLite
//! database, and walking the version ledger back and forth.

#![cfg(feature = "sqlite")]

use strata::prelude::*;

fn create_accounts_up(m: &mut MigrationBuilder<'_>) {
    m.create_table("accounts", |t| {
        t.string("email", ());
        t.decimal("balance", ColumnOptions::new().precision(10).scale(2));
        t.boolean("active", ColumnOptions::new().not_null());
        t.primary_key("email");
    });
}

fn create_accounts_down(m: &mut MigrationBuilder<'_>) {
    m.drop_table("accounts");
}

fn add_entries_up(m: &mut MigrationBuilder<'_>) {
    m.create_table("entries", |t| {
        t.integer("amount", ());
        t.timestamp("posted_at", ());
        t.index("posted_at");
    });
}

fn add_entries_down(m: &mut MigrationBuilder<'_>) {
    m.drop_table("entries");
}

fn registry() -> MigrationRegistry {
    let mut registry = MigrationRegistry::new();
    registry
        .register(Migration::new(
            "20240301000000_create_accounts",
            create_accounts_up,
            create_accounts_down,
        ))
        .unwrap();
    registry
        .register(Migration::new(
            "20240302000000_add_entries",
            add_entries_up,
            add_entries_down,
        ))
        .unwrap();
    registry
}

#[tokio::test]
async fn test_full_migrate_and_rollback_cycle() {
    let gateway = SqliteGateway::open_in_memory().await.unwrap();
    let mut runner = Runner::new(registry(), gateway, Box::new(SqliteDialect));

    let report = runner.migrate().await.unwrap();
    assert_eq!(report.applied.len(), 2);
    assert_eq!(report.summary(), "Applied 2 migration(s); schema up-to-date.");

    let status = runner.status().await.unwrap();
    assert_eq!(status.current, Some(20240302000000));
    assert!(status.pending.is_empty());

    let report = runner.rollback(1).await.unwrap();
    assert_eq!(report.rolled_back, vec!["20240302000000_add_entries"]);

    let status = runner.status().await.unwrap();
    assert_eq!(status.current, Some(20240301000000));
    assert_eq!(status.pending, vec!["20240302000000_add_entries"]);

    runner.close().await.unwrap();
}

#[tokio::test]
async fn test_sqlite_rejects_column_removal_at_build_time() {
    fn bad_up(m: &mut MigrationBuilder<'_>) {
        m.remove_column("accounts", "email");
    }
    fn noop(_: &mut MigrationBuilder<'_>) {}

    let migration = Migration::new("20240303000000_remove_email", bad_up, noop);
    let err = migration.up_sql(&SqliteDialect).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the sqlite dialect does not support remove_column: \
         columns can only be added, never renamed, redefined or removed"
    );

    // The same migration is fine under MySQL.
    assert_eq!(
        migration.up_sql(&MysqlDialect).unwrap(),
        "ALTER TABLE accounts DROP COLUMN email;\n"
    );
}
