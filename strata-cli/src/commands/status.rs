//! `status` command - show applied and pending migrations.

use strata_migrate::MigrationRegistry;

use crate::config::Config;
use crate::error::CliResult;
use crate::output;

pub async fn run(config: &Config, registry: MigrationRegistry) -> CliResult<()> {
    let mut runner = super::runner(config, registry).await?;

    // Release the connection even when the query fails.
    let outcome = runner.status().await;
    let closed = runner.close().await;
    let report = outcome?;
    closed?;

    output::header("Migration status");
    match report.current {
        Some(version) => output::kv("current version", &version.to_string()),
        None => output::kv("current version", "none"),
    }
    output::newline();
    for id in &report.applied {
        output::list_item(&format!("{id} (applied)"));
    }
    for id in &report.pending {
        output::list_item(&format!("{id} (pending)"));
    }
    output::info(&report.summary());
    Ok(())
}
