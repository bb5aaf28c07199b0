//! Dialect encoders turning operations into DDL text.

mod mysql;
mod sqlite;

pub use mysql::MysqlDialect;
pub use sqlite::SqliteDialect;

use serde_json::Value;

use crate::column::{Column, ColumnType};
use crate::error::DdlResult;
use crate::op::Operation;

/// Renders operations into the SQL text of one database engine.
///
/// Implementations match [`Operation`] exhaustively; an engine that
/// cannot express an operation returns [`crate::DdlError::Unsupported`],
/// which fails the whole migration.
pub trait Dialect: Send + Sync {
    /// Engine name used in configuration and error messages.
    fn name(&self) -> &'static str;

    /// Render one operation as one or more `;`-terminated statements.
    fn encode(&self, op: &Operation) -> DdlResult<String>;
}

/// The concrete SQL type for a column.
///
/// Both shipped dialects share this mapping: integer width is selected
/// by `limit` (1/2/3/8 bytes), string and binary carry a length
/// defaulting to 255, and decimal renders `precision[,scale]` when a
/// precision is given.
pub(crate) fn type_keyword(column: &Column) -> String {
    match column.ty {
        ColumnType::Integer => match column.limit {
            Some(1) => "TINYINT".to_owned(),
            Some(2) => "SMALLINT".to_owned(),
            Some(3) => "MEDIUMINT".to_owned(),
            Some(8) => "BIGINT".to_owned(),
            _ => "INT".to_owned(),
        },
        ColumnType::String => format!("VARCHAR({})", column.limit.unwrap_or(255)),
        ColumnType::Binary => format!("VARBINARY({})", column.limit.unwrap_or(255)),
        ColumnType::Decimal => match (column.precision, column.scale) {
            (Some(precision), Some(scale)) => format!("DECIMAL({precision},{scale})"),
            (Some(precision), None) => format!("DECIMAL({precision})"),
            _ => "DECIMAL".to_owned(),
        },
        ColumnType::Text => "TEXT".to_owned(),
        ColumnType::Float => "FLOAT".to_owned(),
        ColumnType::DateTime => "DATETIME".to_owned(),
        ColumnType::Timestamp => "TIMESTAMP".to_owned(),
        ColumnType::Time => "TIME".to_owned(),
        ColumnType::Date => "DATE".to_owned(),
        ColumnType::Boolean => "TINYINT".to_owned(),
    }
}

/// The `DEFAULT` literal for a column, quoted for textual types.
pub(crate) fn default_literal(column: &Column) -> Option<String> {
    column.default.as_ref().map(|value| {
        let raw = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if column.ty.is_textual() {
            format!("'{raw}'")
        } else {
            raw
        }
    })
}
