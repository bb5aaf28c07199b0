//! The schema version ledger.
//!
//! Applied state is a single row in a bookkeeping table: the version of
//! the last migration applied. Recording a new version rewrites the whole
//! table, so the ledger never accumulates history.

use tracing::{debug, info};

use crate::error::MigrateResult;
use crate::gateway::DatabaseGateway;

/// Default name of the bookkeeping table.
pub const DEFAULT_LEDGER_TABLE: &str = "schema_migrations";

/// Reads and rewrites the single-row version table.
#[derive(Debug, Clone)]
pub struct Ledger {
    table: String,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// A ledger over the [`DEFAULT_LEDGER_TABLE`].
    pub fn new() -> Self {
        Self::with_table(DEFAULT_LEDGER_TABLE)
    }

    /// A ledger over a custom table name.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The bookkeeping table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Creates the bookkeeping table if it does not exist yet.
    pub async fn ensure<G: DatabaseGateway + ?Sized>(&self, gateway: &mut G) -> MigrateResult<()> {
        if gateway.table_exists(&self.table).await? {
            return Ok(());
        }
        info!(table = %self.table, "creating migration ledger table");
        gateway
            .execute(&format!("CREATE TABLE {} (version BIGINT)", self.table))
            .await
    }

    /// The currently recorded version, if any. A fresh schema has none;
    /// should the table ever hold more than one row, the first wins.
    pub async fn current<G: DatabaseGateway + ?Sized>(
        &self,
        gateway: &mut G,
    ) -> MigrateResult<Option<i64>> {
        let versions = gateway
            .query_versions(&format!("SELECT version FROM {}", self.table))
            .await?;
        Ok(versions.first().copied())
    }

    /// Rewrites the ledger to hold exactly `version`, or nothing when the
    /// schema has been rolled back past the first migration.
    pub async fn record<G: DatabaseGateway + ?Sized>(
        &self,
        gateway: &mut G,
        version: Option<i64>,
    ) -> MigrateResult<()> {
        gateway
            .execute(&format!("DELETE FROM {}", self.table))
            .await?;
        match version {
            Some(version) => {
                debug!(table = %self.table, version, "recording schema version");
                gateway
                    .execute(&format!(
                        "INSERT INTO {} (version) VALUES ({version})",
                        self.table
                    ))
                    .await
            }
            None => {
                debug!(table = %self.table, "clearing schema version");
                Ok(())
            }
        }
    }
}
