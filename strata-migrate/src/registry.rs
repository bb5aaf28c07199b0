//! Migration discovery.

use async_trait::async_trait;

use crate::error::{MigrateError, MigrateResult};
use crate::migration::{Migration, parse_version};

/// Something that can enumerate and hand out migrations.
///
/// [`MigrationRegistry`] is the in-process implementation; the trait exists
/// so a runner can be pointed at other stores in tests.
#[async_trait]
pub trait MigrationSource: Send + Sync {
    /// All migration identifiers, oldest first.
    async fn list(&self) -> MigrateResult<Vec<String>>;

    /// The migration with the given identifier.
    async fn get(&self, id: &str) -> MigrateResult<Migration>;
}

/// An in-process collection of migrations, kept sorted by version.
///
/// Identifiers must carry a numeric version prefix
/// (`20240101120000_create_users`). Ties on the version are broken by the
/// full identifier so ordering is always deterministic.
#[derive(Debug, Default)]
pub struct MigrationRegistry {
    migrations: Vec<Migration>,
}

impl MigrationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a migration. Rejects identifiers without a version prefix
    /// and duplicate identifiers.
    pub fn register(&mut self, migration: Migration) -> MigrateResult<()> {
        let id = migration.id();
        let version = parse_version(id).ok_or_else(|| {
            MigrateError::invalid_migration(format!(
                "'{id}' has no numeric version prefix (expected '<version>_<name>')"
            ))
        })?;
        if self.migrations.iter().any(|m| m.id() == id) {
            return Err(MigrateError::invalid_migration(format!(
                "'{id}' is already registered"
            )));
        }
        let at = self
            .migrations
            .partition_point(|m| (m.version().unwrap_or(0), m.id()) <= (version, id));
        self.migrations.insert(at, migration);
        Ok(())
    }

    /// Number of registered migrations.
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }
}

#[async_trait]
impl MigrationSource for MigrationRegistry {
    async fn list(&self) -> MigrateResult<Vec<String>> {
        Ok(self.migrations.iter().map(|m| m.id().to_owned()).collect())
    }

    async fn get(&self, id: &str) -> MigrateResult<Migration> {
        self.migrations
            .iter()
            .find(|m| m.id() == id)
            .cloned()
            .ok_or_else(|| MigrateError::UnknownMigration(id.to_owned()))
    }
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::builder::MigrationBuilder;

    fn noop(_: &mut MigrationBuilder<'_>) {}

    fn migration(id: &str) -> Migration {
        Migration::new(id, noop, noop)
    }

    #[tokio::test]
    async fn test_listing_is_sorted_by_version_regardless_of_insertion_order() {
        let mut registry = MigrationRegistry::new();
        registry.register(migration("3_add_age")).unwrap();
        registry.register(migration("1_create_users")).unwrap();
        registry.register(migration("2_add_name")).unwrap();

        assert_eq!(
            registry.list().await.unwrap(),
            vec!["1_create_users", "2_add_name", "3_add_age"]
        );
    }

    #[tokio::test]
    async fn test_version_ties_break_on_the_full_identifier() {
        let mut registry = MigrationRegistry::new();
        registry.register(migration("5_beta")).unwrap();
        registry.register(migration("5_alpha")).unwrap();

        assert_eq!(registry.list().await.unwrap(), vec!["5_alpha", "5_beta"]);
    }

    #[test]
    fn test_rejects_missing_version_prefix_and_duplicates() {
        let mut registry = MigrationRegistry::new();
        assert!(registry.register(migration("create_users")).is_err());

        registry.register(migration("1_create_users")).unwrap();
        let err = registry.register(migration("1_create_users")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid migration: '1_create_users' is already registered"
        );
    }

    #[tokio::test]
    async fn test_get_unknown_migration() {
        let registry = MigrationRegistry::new();
        let err = registry.get("9_missing").await.unwrap_err();
        assert_eq!(err.to_string(), "unknown migration '9_missing'");
    }
}
