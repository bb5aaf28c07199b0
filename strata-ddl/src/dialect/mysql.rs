//! MySQL DDL rendering.

use super::{Dialect, default_literal, type_keyword};
use crate::column::Column;
use crate::error::DdlResult;
use crate::op::{ChangeTable, CreateTable, Operation};

/// The full-featured MySQL encoder.
///
/// Every operation in the model has a rendering; table alterations fold
/// into a single multi-clause `ALTER TABLE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn encode(&self, op: &Operation) -> DdlResult<String> {
        Ok(match op {
            Operation::CreateTable(table) => self.create_table(table),
            Operation::ChangeTable(change) => self.change_table(change),
            Operation::DropTable { table } => format!("DROP TABLE {table};\n"),
            Operation::RenameTable { table, new_name } => {
                format!("RENAME TABLE {table} TO {new_name};\n")
            }
            Operation::AddColumn { table, column } => format!(
                "ALTER TABLE {table} ADD COLUMN {};\n",
                self.column_definition(column)
            ),
            Operation::RenameColumn {
                table,
                old_name,
                column,
            } => format!(
                "ALTER TABLE {table} CHANGE COLUMN {old_name} {};\n",
                self.column_definition(column)
            ),
            Operation::ChangeColumn { table, column } => format!(
                "ALTER TABLE {table} MODIFY COLUMN {};\n",
                self.column_definition(column)
            ),
            Operation::RemoveColumn { table, column } => {
                format!("ALTER TABLE {table} DROP COLUMN {column};\n")
            }
            Operation::AddIndex { table, column } => {
                format!("ALTER TABLE {table} ADD INDEX ({column});\n")
            }
            Operation::RemoveIndex { table, column } => {
                format!("ALTER TABLE {table} DROP INDEX ({column});\n")
            }
        })
    }
}

impl MysqlDialect {
    /// `<name> <type>` plus `NOT NULL` / `AUTO_INCREMENT` / `DEFAULT`,
    /// in that order.
    fn column_definition(&self, column: &Column) -> String {
        let mut def = format!("{} {}", column.name, type_keyword(column));
        if column.not_null {
            def.push_str(" NOT NULL");
        }
        if column.auto_increment {
            def.push_str(" AUTO_INCREMENT");
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
                "ALTER TABLE {} ADD INDEX ({column});\n",
                table.name
            ));
        }
        sql
    }

    /// A single `ALTER TABLE` whose clauses keep a fixed order:
    /// additions first (columns, indices, primary key), then drops
    /// (columns, primary key, indices), then redefinitions, then renames.
    fn change_table(&self, change: &ChangeTable) -> String {
        let mut defs: Vec<String> = Vec::new();

        for column in &change.additions.columns {
            defs.push(format!("\tADD COLUMN {}", self.column_definition(column)));
        }
        for column in &change.additions.indices {
            defs.push(format!("\tADD INDEX({column})"));
        }
        if let Some(pk) = &change.additions.primary_key {
            defs.push(format!("\tADD PRIMARY KEY({pk})"));
        }
        for column in &change.removed_columns {
            defs.push(format!("\tDROP COLUMN {column}"));
        }
        if change.removes_primary_key {
            defs.push("\tDROP PRIMARY KEY".to_owned());
        }
        for column in &change.removed_indices {
            defs.push(format!("\tDROP INDEX {column}"));
        }
        for column in &change.changed_columns {
            defs.push(format!("\tMODIFY COLUMN {}", self.column_definition(column)));
        }
        for (old_name, column) in &change.renamed_columns {
            defs.push(format!(
                "\tCHANGE COLUMN {old_name} {}",
                self.column_definition(column)
            ));
        }

        let mut sql = format!("ALTER TABLE {}", change.table());
        if !defs.is_empty() {
            sql.push('\n');
            sql.push_str(&defs.join(",\n"));
        }
        sql.push_str(";\n");
        sql
    }
}
