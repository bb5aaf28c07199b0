//! Error types for the migration runtime.

use strata_ddl::DdlError;
use thiserror::Error;

/// Errors surfaced while building, tracking or applying migrations.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// DDL generation failed, usually because a dialect does not support
    /// the requested operation.
    #[error(transparent)]
    Ddl(#[from] DdlError),

    /// The underlying database driver reported a failure.
    #[error("database error: {0}")]
    Database(String),

    /// A statement belonging to a migration failed while being applied.
    #[error("migration '{id}' failed: {message}")]
    MigrationFailed { id: String, message: String },

    /// A migration could not be registered or built.
    #[error("invalid migration: {0}")]
    InvalidMigration(String),

    /// The source has no migration with the requested identifier.
    #[error("unknown migration '{0}'")]
    UnknownMigration(String),

    /// The ledger names a version that no known migration carries.
    #[error("could not locate last schema migration ({version})")]
    VersionNotFound { version: i64 },
}

impl MigrateError {
    /// Wraps a driver-level failure.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Flags a migration that cannot be accepted as written.
    pub fn invalid_migration(message: impl Into<String>) -> Self {
        Self::InvalidMigration(message.into())
    }
}

/// Result alias for migration operations.
pub type MigrateResult<T> = Result<T, MigrateError>;
