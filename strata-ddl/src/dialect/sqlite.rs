//! SQLite DDL rendering.

use super::{Dialect, default_literal, type_keyword};
use crate::column::Column;
use crate::error::{DdlError, DdlResult};
use crate::op::{ChangeTable, CreateTable, Operation};

const DIALECT: &str = "sqlite";

/// The reduced SQLite encoder.
///
/// SQLite's `ALTER TABLE` only adds columns, so table changes are
/// restricted to additions; column renames, redefinitions and removals
/// are refused outright. Indices are standalone statements with
/// generated `ix_<table>_<column>` names, and `AUTO_INCREMENT` is never
/// emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn encode(&self, op: &Operation) -> DdlResult<String> {
        match op {
            Operation::CreateTable(table) => Ok(self.create_table(table)),
            Operation::ChangeTable(change) => self.change_table(change),
            Operation::DropTable { table } => Ok(format!("DROP TABLE {table};\n")),
            Operation::RenameTable { table, new_name } => {
                Ok(format!("ALTER TABLE {table} RENAME TO {new_name};\n"))
            }
            Operation::AddColumn { table, column } => Ok(format!(
                "ALTER TABLE {table} ADD COLUMN {};\n",
                self.column_definition(column)
            )),
            Operation::RenameColumn { .. }
            | Operation::ChangeColumn { .. }
            | Operation::RemoveColumn { .. } => Err(DdlError::unsupported(
                DIALECT,
                op.kind(),
                "columns can only be added, never renamed, redefined or removed",
            )),
            Operation::AddIndex { table, column } => Ok(format!(
                "CREATE INDEX IF NOT EXISTS {} ON {table}({column});",
                index_name(table, column)
            )),
            Operation::RemoveIndex { table, column } => Ok(format!(
                "DROP INDEX IF EXISTS {};",
                index_name(table, column)
            )),
        }
    }
}

impl SqliteDialect {
    /// `<name> <type>` plus `NOT NULL` / `DEFAULT`; no auto-increment.
    fn column_definition(&self, column: &Column) -> String {
        let mut def = format!("{} {}", column.name, type_keyword(column));
        if column.not_null {
            def.push_str(" NOT NULL");
        }
        if let Some(default) = default_literal(column) {
            def.push_str(" DEFAULT ");
            def.push_str(&default);
        }
        def
    }

    fn create_table(&self, table: &CreateTable) -> String {
        let mut defs: Vec<String> = table
            .columns
            .iter()
            .map(|column| format!("\t{}", self.column_definition(column)))
            .collect();
        if let Some(pk) = &table.primary_key {
            defs.push(format!("\tPRIMARY KEY ({pk})"));
        }

        let mut sql = format!("CREATE TABLE {}", table.name);
        if !defs.is_empty() {
            sql.push_str(&format!(" (\n{}\n)", defs.join(",\n")));
        }
        sql.push_str(";\n");

        for column in &table.indices {
            sql.push_str(&format!(
                "CREATE INDEX IF NOT EXISTS {} ON {}({column});\n",
                index_name(&table.name, column),
                table.name
            ));
        }
        sql
    }

    /// Additions only. Anything that removes, renames or redefines is
    /// refused before any SQL is produced.
    fn change_table(&self, change: &ChangeTable) -> DdlResult<String> {
        let restricted = change.additions.primary_key.is_some()
            || !change.removed_columns.is_empty()
            || !change.changed_columns.is_empty()
            || !change.renamed_columns.is_empty()
            || change.removes_primary_key;
        if restricted {
            return Err(DdlError::unsupported(
                DIALECT,
                "change_table",
                "only column and index additions are supported",
            ));
        }

        let table = change.table();
        let mut statements: Vec<String> = Vec::new();

        let defs: Vec<String> = change
            .additions
            .columns
            .iter()
            .map(|column| format!("\tADD COLUMN {}", self.column_definition(column)))
            .collect();
        if !defs.is_empty() {
            statements.push(format!("ALTER TABLE {table}\n{};", defs.join(",\n")));
        }

        for column in &change.additions.indices {
            statements.push(format!(
                "CREATE INDEX IF NOT EXISTS {} ON {table}({column});",
                index_name(table, column)
            ));
        }
        for column in &change.removed_indices {
            statements.push(format!(
                "DROP INDEX IF EXISTS {};",
                index_name(table, column)
            ));
        }

        Ok(statements.join("\n"))
    }
}

/// Generated name for a single-column index.
fn index_name(table: &str, column: &str) -> String {
    format!("ix_{table}_{column}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnOptions, ColumnType};
    use pretty_assertions::assert_eq;

    fn encode(op: &Operation) -> DdlResult<String> {
        SqliteDialect.encode(op)
    }

    #[test]
    fn test_create_table_matches_mysql_body() {
        let mut table = CreateTable::new("users");
        table.string("name", ());
        table.integer("age", ColumnOptions::new().limit(1));
        table.primary_key("name");

        assert_eq!(
            encode(&Operation::CreateTable(table)).unwrap(),
            "CREATE TABLE users (\n\tname VARCHAR(255),\n\tage TINYINT,\n\tPRIMARY KEY (name)\n);\n"
        );
    }

    #[test]
    fn test_create_table_indices_are_standalone_statements() {
        let mut table = CreateTable::new("users");
        table.string("email", ());
        table.index("email");

        let sql = encode(&Operation::CreateTable(table)).unwrap();
        assert!(sql.ends_with("CREATE INDEX IF NOT EXISTS ix_users_email ON users(email);\n"));
    }

    #[test]
    fn test_auto_increment_is_never_emitted() {
        let mut table = CreateTable::new("users");
        table.integer("id", ColumnOptions::new().not_null().auto_increment());

        let sql = encode(&Operation::CreateTable(table)).unwrap();
        assert_eq!(sql, "CREATE TABLE users (\n\tid INT NOT NULL\n);\n");
    }

    #[test]
    fn test_add_index_uses_generated_name() {
        assert_eq!(
            encode(&Operation::AddIndex {
                table: "users".into(),
                column: "age".into()
            })
            .unwrap(),
            "CREATE INDEX IF NOT EXISTS ix_users_age ON users(age);"
        );
    }

    #[test]
    fn test_remove_index_uses_generated_name() {
        assert_eq!(
            encode(&Operation::RemoveIndex {
                table: "users".into(),
                column: "age".into()
            })
            .unwrap(),
            "DROP INDEX IF EXISTS ix_users_age;"
        );
    }

    #[test]
    fn test_rename_table_uses_alter_syntax() {
        assert_eq!(
            encode(&Operation::RenameTable {
                table: "users".into(),
                new_name: "people".into()
            })
            .unwrap(),
            "ALTER TABLE users RENAME TO people;\n"
        );
    }

    #[test]
    fn test_change_table_additions_only() {
        let mut change = ChangeTable::new("users");
        change.string("nickname", ());
        change.integer("age", ColumnOptions::new().limit(1));
        change.index("age");
        change.remove_index("nickname");

        assert_eq!(
            encode(&Operation::ChangeTable(change)).unwrap(),
            "ALTER TABLE users\n\
             \tADD COLUMN nickname VARCHAR(255),\n\
             \tADD COLUMN age TINYINT;\n\
             CREATE INDEX IF NOT EXISTS ix_users_age ON users(age);\n\
             DROP INDEX IF EXISTS ix_users_nickname;"
        );
    }

    #[test]
    fn test_change_table_refuses_removals_and_renames() {
        let mut removal = ChangeTable::new("users");
        removal.remove("age");
        assert!(encode(&Operation::ChangeTable(removal)).is_err());

        let mut rename = ChangeTable::new("users");
        rename.rename("mail", "email", ColumnType::String, ());
        assert!(encode(&Operation::ChangeTable(rename)).is_err());

        let mut redefine = ChangeTable::new("users");
        redefine.change("name", ColumnType::Text, ());
        assert!(encode(&Operation::ChangeTable(redefine)).is_err());

        let mut pk = ChangeTable::new("users");
        pk.primary_key("id");
        assert!(encode(&Operation::ChangeTable(pk)).is_err());

        let mut drop_pk = ChangeTable::new("users");
        drop_pk.remove_primary_key();
        assert!(encode(&Operation::ChangeTable(drop_pk)).is_err());
    }

    #[test]
    fn test_column_level_rewrites_are_refused() {
        let column = Column::new("name", ColumnType::Text);
        let err = encode(&Operation::ChangeColumn {
            table: "users".into(),
            column,
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "the sqlite dialect does not support change_column: \
             columns can only be added, never renamed, redefined or removed"
        );

        assert!(
            encode(&Operation::RemoveColumn {
                table: "users".into(),
                column: "age".into()
            })
            .is_err()
        );
        assert!(
            encode(&Operation::RenameColumn {
                table: "users".into(),
                old_name: "mail".into(),
                column: Column::new("email", ColumnType::String),
            })
            .is_err()
        );
    }
}
