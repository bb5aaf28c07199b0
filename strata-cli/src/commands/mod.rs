//! Command implementations.

pub mod create;
pub mod migrate;
pub mod rollback;
pub mod status;

use strata_ddl::{Dialect, MysqlDialect, SqliteDialect};
use strata_migrate::{DatabaseGateway, Ledger, MigrationRegistry, Runner};

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// The dialect named in the configuration.
fn dialect_for(config: &Config) -> CliResult<Box<dyn Dialect>> {
    match config.database.dialect.as_str() {
        "sqlite" => Ok(Box::new(SqliteDialect)),
        "mysql" => Ok(Box::new(MysqlDialect)),
        other => Err(CliError::Config(format!("unknown dialect '{other}'"))),
    }
}

/// Open a gateway for the configured database.
async fn connect(config: &Config) -> CliResult<Box<dyn DatabaseGateway>> {
    match config.database.dialect.as_str() {
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let gateway = strata_migrate::SqliteGateway::open(&config.database.path).await?;
            Ok(Box::new(gateway))
        }
        #[cfg(feature = "mysql")]
        "mysql" => {
            let url = config.database.url.as_deref().ok_or_else(|| {
                CliError::Config("a mysql database needs a connection url".to_string())
            })?;
            let gateway = strata_migrate::MysqlGateway::connect(url).await?;
            Ok(Box::new(gateway))
        }
        other => Err(CliError::Config(format!(
            "support for dialect '{other}' is not enabled in this build"
        ))),
    }
}

/// A runner wired up from the configuration.
async fn runner(
    config: &Config,
    registry: MigrationRegistry,
) -> CliResult<Runner<MigrationRegistry, Box<dyn DatabaseGateway>>> {
    let gateway = connect(config).await?;
    let dialect = dialect_for(config)?;
    Ok(Runner::new(registry, gateway, dialect)
        .with_ledger(Ledger::with_table(config.migrations.ledger_table.as_str())))
}
