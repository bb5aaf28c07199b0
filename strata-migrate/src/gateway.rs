//! Database access seam for the runner.

use async_trait::async_trait;

use crate::error::MigrateResult;

/// The handful of database operations the migration runner needs.
///
/// Drivers implement this over their own connection type; see
/// [`crate::SqliteGateway`] and [`crate::MysqlGateway`].
#[async_trait]
pub trait DatabaseGateway: Send {
    /// Run a single statement, discarding any result set.
    async fn execute(&mut self, sql: &str) -> MigrateResult<()>;

    /// Run a query whose result set is a single `version` column.
    async fn query_versions(&mut self, sql: &str) -> MigrateResult<Vec<i64>>;

    /// Whether a table with the given name exists.
    async fn table_exists(&mut self, name: &str) -> MigrateResult<bool>;

    /// Release the connection. Drivers that disconnect lazily may leave
    /// this as the default no-op.
    async fn close(&mut self) -> MigrateResult<()> {
        Ok(())
    }
}

#[async_trait]
impl<G: DatabaseGateway + ?Sized> DatabaseGateway for Box<G> {
    async fn execute(&mut self, sql: &str) -> MigrateResult<()> {
        (**self).execute(sql).await
    }

    async fn query_versions(&mut self, sql: &str) -> MigrateResult<Vec<i64>> {
        (**self).query_versions(sql).await
    }

    async fn table_exists(&mut self, name: &str) -> MigrateResult<bool> {
        (**self).table_exists(name).await
    }

    async fn close(&mut self) -> MigrateResult<()> {
        (**self).close().await
    }
}
