//! Schema change operations and their SQL renderings.
//!
//! This crate holds the database-agnostic half of the migration toolkit:
//! a closed set of column types, a loose options shape with Rails-style
//! merge semantics, the schema change operation model, and the dialect
//! encoders that turn operations into engine-specific DDL text.
//!
//! Nothing in here talks to a database. Operations are plain data built
//! by the migration DSL in `strata-migrate` and rendered to SQL by a
//! [`Dialect`].

pub mod column;
pub mod dialect;
pub mod error;
pub mod op;

pub use column::{Column, ColumnOptions, ColumnOutcome, ColumnType};
pub use dialect::{Dialect, MysqlDialect, SqliteDialect};
pub use error::{DdlError, DdlResult};
pub use op::{ChangeTable, CreateTable, Operation};
