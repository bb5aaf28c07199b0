//! CLI configuration handling.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strata_migrate::DEFAULT_LEDGER_TABLE;

use crate::error::CliResult;

/// Default config file name (lives in project root)
pub const CONFIG_FILE_NAME: &str = "strata.toml";

/// Default migrations directory (relative to project root)
pub const MIGRATIONS_DIR: &str = "migrations";

/// strata CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Migration configuration
    pub migrations: MigrationsConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to the defaults when
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database dialect (sqlite, mysql)
    pub dialect: String,

    /// Database connection URL (mysql)
    pub url: Option<String>,

    /// Database file path (sqlite)
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dialect: "sqlite".to_string(),
            url: None,
            path: PathBuf::from("strata.db"),
        }
    }
}

/// Migration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationsConfig {
    /// Directory migration scaffolds are written to
    pub directory: PathBuf,

    /// Name of the version bookkeeping table
    pub ledger_table: String,
}

impl Default for MigrationsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(MIGRATIONS_DIR),
            ledger_table: DEFAULT_LEDGER_TABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database.dialect, "sqlite");
        assert_eq!(config.database.path, PathBuf::from("strata.db"));
        assert_eq!(config.migrations.directory, PathBuf::from("migrations"));
        assert_eq!(config.migrations.ledger_table, "schema_migrations");
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [database]
            dialect = "mysql"
            url = "mysql://root@localhost:3306/app"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.dialect, "mysql");
        assert_eq!(
            config.database.url.as_deref(),
            Some("mysql://root@localhost:3306/app")
        );
        assert_eq!(config.migrations.ledger_table, "schema_migrations");
    }

    #[test]
    fn test_load_or_default_on_a_missing_file() {
        let config = Config::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.database.dialect, "sqlite");
    }
}
