//! # strata
//!
//! Rails-flavored schema migrations for Rust.
//!
//! strata provides:
//! - A closed operation model for schema changes (create, alter, drop,
//!   rename, index management)
//! - Per-dialect DDL generation for MySQL and SQLite
//! - A builder DSL for writing reversible migrations as plain Rust
//! - A sequential runner tracking applied state in a single-row ledger
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strata::prelude::*;
//!
//! fn up(m: &mut MigrationBuilder<'_>) {
//!     m.create_table("users", |t| {
//!         t.string("name", ());
//!         t.integer("age", ColumnOptions::new().limit(1));
//!         t.primary_key("name");
//!     });
//! }
//!
//! fn down(m: &mut MigrationBuilder<'_>) {
//!     m.drop_table("users");
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), strata::Error> {
//!     let mut registry = MigrationRegistry::new();
//!     registry.register(Migration::new("20240101120000_create_users", up, down))?;
//!
//!     let gateway = SqliteGateway::open("app.db").await?;
//!     let mut runner = Runner::new(registry, gateway, Box::new(SqliteDialect));
//!     println!("{}", runner.migrate().await?.summary());
//!     runner.close().await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Column, operation and dialect types.
pub mod ddl {
    pub use strata_ddl::*;
}

/// Migration definitions, the builder DSL, the ledger and the runner.
pub mod migrate {
    pub use strata_migrate::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ddl::{
        ColumnOptions, ColumnOutcome, ColumnType, Dialect, MysqlDialect, SqliteDialect,
    };
    pub use crate::migrate::{
        DatabaseGateway, Migration, MigrationBuilder, MigrationRegistry, Runner,
    };

    #[cfg(feature = "sqlite")]
    pub use crate::migrate::SqliteGateway;

    #[cfg(feature = "mysql")]
    pub use crate::migrate::MysqlGateway;
}

// Re-export key types at the crate root
pub use migrate::MigrateError as Error;
pub use migrate::{Migration, MigrationBuilder, MigrationRegistry, Runner};
