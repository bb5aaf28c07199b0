//! `rollback` command - revert applied migrations.

use strata_migrate::MigrationRegistry;

use crate::cli::RollbackArgs;
use crate::config::Config;
use crate::error::CliResult;
use crate::output;

pub async fn run(
    config: &Config,
    registry: MigrationRegistry,
    args: RollbackArgs,
) -> CliResult<()> {
    let mut runner = super::runner(config, registry).await?;

    // Release the connection even when the run fails partway.
    let outcome = runner.rollback(args.steps).await;
    let closed = runner.close().await;
    let report = outcome?;
    closed?;

    if report.rolled_back.is_empty() {
        output::warn(&report.summary());
        return Ok(());
    }
    for id in &report.rolled_back {
        output::success(&format!("rolled back {id}"));
    }
    output::info(&report.summary());
    Ok(())
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use strata_migrate::{Migration, MigrationBuilder, MigrationRegistry};

    use super::*;

    fn create_up(m: &mut MigrationBuilder<'_>) {
        m.create_table("users", |t| {
            t.string("name", ());
        });
    }

    fn create_down(m: &mut MigrationBuilder<'_>) {
        m.drop_table("users");
    }

    #[tokio::test]
    async fn test_rollback_on_a_fresh_schema_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database.path = dir.path().join("app.db");

        let mut registry = MigrationRegistry::new();
        registry
            .register(Migration::new("1_create_users", create_up, create_down))
            .unwrap();

        run(&config, registry, RollbackArgs { steps: 1 })
            .await
            .unwrap();
    }
}
