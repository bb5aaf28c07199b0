//! Migration runtime for strata.
//!
//! A [`Migration`] pairs an identifier such as `20240101120000_create_users`
//! with two build functions that describe the forward and reverse schema
//! changes through a [`MigrationBuilder`]. Migrations are collected in a
//! [`MigrationRegistry`] (or any other [`MigrationSource`]), applied over a
//! [`DatabaseGateway`], and tracked through a single-row version
//! [`Ledger`] so that the [`Runner`] always knows where the schema stands.

pub mod builder;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod migration;
pub mod registry;
pub mod runner;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "mysql")]
pub mod mysql;

pub use builder::MigrationBuilder;
pub use error::{MigrateError, MigrateResult};
pub use gateway::DatabaseGateway;
pub use ledger::{DEFAULT_LEDGER_TABLE, Ledger};
pub use migration::{BuildFn, Migration};
pub use registry::{MigrationRegistry, MigrationSource};
pub use runner::{MigrateReport, RollbackReport, Runner, StatusReport};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteGateway;

#[cfg(feature = "mysql")]
pub use mysql::MysqlGateway;
