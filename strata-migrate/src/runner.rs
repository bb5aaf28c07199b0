//! The sequential migration runner.
//!
//! The runner walks the migration list in version order, compares it
//! against the ledger, and applies or reverts migrations one statement at
//! a time. There is no transactional batching: the ledger is rewritten
//! after each migration completes, so a failure mid-migration leaves the
//! recorded version at the last fully applied one.

use strata_ddl::Dialect;
use tracing::{debug, info};

use crate::error::{MigrateError, MigrateResult};
use crate::gateway::DatabaseGateway;
use crate::ledger::Ledger;
use crate::migration::{Migration, parse_version};
use crate::registry::MigrationSource;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Outcome of a [`Runner::migrate`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrateReport {
    /// Identifiers applied during this run, oldest first.
    pub applied: Vec<String>,
}

impl MigrateReport {
    /// One-line human summary.
    pub fn summary(&self) -> String {
        if self.applied.is_empty() {
            "Schema up-to-date.".to_owned()
        } else {
            format!(
                "Applied {} migration(s); schema up-to-date.",
                self.applied.len()
            )
        }
    }
}

/// Outcome of a [`Runner::rollback`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RollbackReport {
    /// Identifiers reverted during this run, newest first.
    pub rolled_back: Vec<String>,
    /// Steps that were asked for, which may exceed what was applied.
    pub requested: usize,
}

impl RollbackReport {
    /// One-line human summary.
    pub fn summary(&self) -> String {
        if self.rolled_back.is_empty() {
            "No migrations to roll back.".to_owned()
        } else {
            format!(
                "Schema rolled back by {} migration(s).",
                self.rolled_back.len()
            )
        }
    }
}

/// Outcome of a [`Runner::status`] query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Version recorded in the ledger, if any.
    pub current: Option<i64>,
    /// Identifiers at or below the recorded version.
    pub applied: Vec<String>,
    /// Identifiers above the recorded version.
    pub pending: Vec<String>,
}

impl StatusReport {
    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!(
            "{} applied, {} pending.",
            self.applied.len(),
            self.pending.len()
        )
    }
}

/// Applies and reverts migrations from a source against a gateway.
pub struct Runner<S, G> {
    source: S,
    gateway: G,
    dialect: Box<dyn Dialect>,
    ledger: Ledger,
}

impl<S: MigrationSource, G: DatabaseGateway> Runner<S, G> {
    /// A runner with the default [`Ledger`].
    pub fn new(source: S, gateway: G, dialect: Box<dyn Dialect>) -> Self {
        Self {
            source,
            gateway,
            dialect,
            ledger: Ledger::new(),
        }
    }

    /// Replace the ledger, e.g. to use a custom bookkeeping table.
    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    /// Close the underlying connection.
    pub async fn close(mut self) -> MigrateResult<()> {
        self.gateway.close().await
    }

    /// Apply every migration newer than the recorded version, in order.
    pub async fn migrate(&mut self) -> MigrateResult<MigrateReport> {
        let ids = self.source.list().await?;
        if ids.is_empty() {
            return Ok(MigrateReport::default());
        }
        self.ledger.ensure(&mut self.gateway).await?;

        let start = match self.high_water_index(&ids).await? {
            Some(index) => index + 1,
            None => 0,
        };

        let mut applied = Vec::new();
        for id in &ids[start..] {
            let migration = self.source.get(id).await?;
            let version = migration.version().ok_or_else(|| {
                MigrateError::invalid_migration(format!("'{id}' has no numeric version prefix"))
            })?;
            self.run(&migration, Direction::Up).await?;
            self.ledger.record(&mut self.gateway, Some(version)).await?;
            applied.push(id.clone());
        }
        Ok(MigrateReport { applied })
    }

    /// Revert up to `steps` migrations, newest first.
    pub async fn rollback(&mut self, steps: usize) -> MigrateResult<RollbackReport> {
        let ids = self.source.list().await?;
        if ids.is_empty() {
            return Ok(RollbackReport {
                rolled_back: Vec::new(),
                requested: steps,
            });
        }
        self.ledger.ensure(&mut self.gateway).await?;

        let Some(position) = self.high_water_index(&ids).await? else {
            return Ok(RollbackReport {
                rolled_back: Vec::new(),
                requested: steps,
            });
        };

        let mut rolled_back = Vec::new();
        for index in (0..=position).rev().take(steps) {
            let migration = self.source.get(&ids[index]).await?;
            self.run(&migration, Direction::Down).await?;
            let previous = if index > 0 {
                parse_version(&ids[index - 1])
            } else {
                None
            };
            self.ledger.record(&mut self.gateway, previous).await?;
            rolled_back.push(ids[index].clone());
        }
        Ok(RollbackReport {
            rolled_back,
            requested: steps,
        })
    }

    /// Report the recorded version and which migrations sit on each side
    /// of it.
    pub async fn status(&mut self) -> MigrateResult<StatusReport> {
        let ids = self.source.list().await?;
        self.ledger.ensure(&mut self.gateway).await?;

        let current = self.ledger.current(&mut self.gateway).await?;
        let split = match self.high_water_index(&ids).await? {
            Some(index) => index + 1,
            None => 0,
        };
        let (applied, pending) = ids.split_at(split);
        Ok(StatusReport {
            current,
            applied: applied.to_vec(),
            pending: pending.to_vec(),
        })
    }

    /// Index of the migration matching the recorded version, or `None`
    /// for a fresh schema. A recorded version no migration carries is
    /// fatal: the list and the database no longer agree.
    async fn high_water_index(&mut self, ids: &[String]) -> MigrateResult<Option<usize>> {
        let Some(version) = self.ledger.current(&mut self.gateway).await? else {
            return Ok(None);
        };
        ids.iter()
            .position(|id| parse_version(id) == Some(version))
            .map(Some)
            .ok_or(MigrateError::VersionNotFound { version })
    }

    async fn run(&mut self, migration: &Migration, direction: Direction) -> MigrateResult<()> {
        let sql = match direction {
            Direction::Up => migration.up_sql(self.dialect.as_ref())?,
            Direction::Down => migration.down_sql(self.dialect.as_ref())?,
        };
        info!(id = %migration.id(), direction = direction.label(), "running migration");
        for statement in split_statements(&sql) {
            debug!(sql = %statement, "executing statement");
            self.gateway
                .execute(statement)
                .await
                .map_err(|error| MigrateError::MigrationFailed {
                    id: migration.id().to_owned(),
                    message: error.to_string(),
                })?;
        }
        Ok(())
    }
}

/// Split generated DDL into individual statements on `;`, dropping
/// whitespace-only fragments.
pub fn split_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

// ==== Tests ====
