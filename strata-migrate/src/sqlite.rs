//! SQLite gateway over `tokio-rusqlite`.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{MigrateError, MigrateResult};
use crate::gateway::DatabaseGateway;

/// A [`DatabaseGateway`] backed by a SQLite database file.
#[derive(Clone)]
pub struct SqliteGateway {
    conn: tokio_rusqlite::Connection,
}

impl SqliteGateway {
    /// Opens (creating if necessary) the database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> MigrateResult<Self> {
        let conn = tokio_rusqlite::Connection::open(path.as_ref())
            .await
            .map_err(|e| MigrateError::database(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    pub async fn open_in_memory() -> MigrateResult<Self> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(|e| MigrateError::database(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl DatabaseGateway for SqliteGateway {
    async fn execute(&mut self, sql: &str) -> MigrateResult<()> {
        debug!(sql = %sql, "executing statement");
        let sql = sql.to_owned();
        self.conn
            .call(move |conn| {
                conn.execute_batch(&sql)?;
                Ok(())
            })
            .await
            .map_err(|e| MigrateError::database(e.to_string()))
    }

    async fn query_versions(&mut self, sql: &str) -> MigrateResult<Vec<i64>> {
        debug!(sql = %sql, "executing query");
        let sql = sql.to_owned();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;
                let mut versions = Vec::new();
                for row in rows {
                    versions.push(row?);
                }
                Ok(versions)
            })
            .await
            .map_err(|e| MigrateError::database(e.to_string()))
    }

    async fn table_exists(&mut self, name: &str) -> MigrateResult<bool> {
        let name = name.to_owned();
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
                Ok(stmt.exists([name.as_str()])?)
            })
            .await
            .map_err(|e| MigrateError::database(e.to_string()))
    }

    async fn close(&mut self) -> MigrateResult<()> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(|e| MigrateError::database(e.to_string()))
    }
}
