//! Migration definitions.

use std::fmt;

use strata_ddl::Dialect;

use crate::builder::MigrationBuilder;
use crate::error::MigrateResult;

/// A build function receives an empty builder and describes one direction
/// of a migration on it.
pub type BuildFn = fn(&mut MigrationBuilder<'_>);

/// A single reversible schema migration.
///
/// The identifier follows the `<version>_<name>` convention, where the
/// version is the numeric timestamp prefix (`20240101120000_create_users`).
/// SQL is generated lazily: each call to [`up_sql`](Migration::up_sql) or
/// [`down_sql`](Migration::down_sql) runs the build function against a
/// fresh builder for the given dialect.
#[derive(Clone)]
pub struct Migration {
    id: String,
    up: BuildFn,
    down: BuildFn,
}

impl Migration {
    pub fn new(id: impl Into<String>, up: BuildFn, down: BuildFn) -> Self {
        Self {
            id: id.into(),
            up,
            down,
        }
    }

    /// The full migration identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The numeric version prefix, if the identifier carries one.
    pub fn version(&self) -> Option<i64> {
        parse_version(&self.id)
    }

    /// Generates the forward DDL for the given dialect.
    pub fn up_sql(&self, dialect: &dyn Dialect) -> MigrateResult<String> {
        let mut builder = MigrationBuilder::new(dialect);
        (self.up)(&mut builder);
        Ok(builder.finish()?)
    }

    /// Generates the reverse DDL for the given dialect.
    pub fn down_sql(&self, dialect: &dyn Dialect) -> MigrateResult<String> {
        let mut builder = MigrationBuilder::new(dialect);
        (self.down)(&mut builder);
        Ok(builder.finish()?)
    }
}

impl fmt::Debug for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Migration").field("id", &self.id).finish()
    }
}

/// Splits `<version>_<name>` and parses the version prefix. Returns `None`
/// when the prefix is missing, empty, non-numeric, or the name is empty.
pub(crate) fn parse_version(id: &str) -> Option<i64> {
    let (version, name) = id.split_once('_')?;
    if version.is_empty() || name.is_empty() {
        return None;
    }
    if !version.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    version.parse().ok()
}

// ==== Tests ====
