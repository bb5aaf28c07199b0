//! `migrate` command - apply pending migrations.

use strata_migrate::MigrationRegistry;

use crate::config::Config;
use crate::error::CliResult;
use crate::output;

pub async fn run(config: &Config, registry: MigrationRegistry) -> CliResult<()> {
    let mut runner = super::runner(config, registry).await?;

    // Release the connection even when the run fails partway.
    let outcome = runner.migrate().await;
    let closed = runner.close().await;
    let report = outcome?;
    closed?;

    for id in &report.applied {
        output::success(&format!("applied {id}"));
    }
    output::info(&report.summary());
    Ok(())
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use strata_migrate::{DatabaseGateway, Migration, MigrationBuilder, MigrationRegistry};

    use super::*;

    fn exploding_up(m: &mut MigrationBuilder<'_>) {
        m.execute("THIS IS NOT SQL;");
    }

    fn noop(_: &mut MigrationBuilder<'_>) {}

    #[tokio::test]
    async fn test_failed_run_still_releases_the_connection() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("app.db");

        let mut registry = MigrationRegistry::new();
        registry
            .register(Migration::new("1_explode", exploding_up, noop))
            .unwrap();

        let err = run(&config, registry).await.unwrap_err();
        assert!(err.to_string().contains("migration '1_explode' failed"));

        // The connection was closed despite the failure, so the database
        // opens cleanly and the ledger the run created is intact.
        let mut gateway = strata_migrate::SqliteGateway::open(&config.database.path)
            .await
            .unwrap();
        assert!(gateway.table_exists("schema_migrations").await.unwrap());
        gateway.close().await.unwrap();
    }
}
