//! The migration DSL.
//!
//! A [`MigrationBuilder`] accumulates the DDL for one direction of one
//! migration. Each call constructs an [`Operation`] and renders it through
//! the dialect immediately; the first encoding failure is held and every
//! later call becomes a no-op, so a build function never has to thread
//! `Result` through its table definitions.

use strata_ddl::{
    ChangeTable, ColumnOptions, ColumnOutcome, ColumnType, CreateTable, DdlError, Dialect,
    Operation,
};

/// Accumulates DDL statements for one direction of a migration.
pub struct MigrationBuilder<'a> {
    dialect: &'a dyn Dialect,
    sql: String,
    error: Option<DdlError>,
}

impl<'a> MigrationBuilder<'a> {
    /// An empty builder targeting the given dialect.
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            error: None,
        }
    }

    /// The SQL accumulated so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Consumes the builder, yielding the accumulated SQL or the first
    /// encoding error.
    pub fn finish(self) -> Result<String, DdlError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.sql),
        }
    }

    fn encode(&mut self, op: Operation) {
        if self.error.is_some() {
            return;
        }
        match self.dialect.encode(&op) {
            Ok(sql) => self.sql.push_str(&sql),
            Err(error) => self.error = Some(error),
        }
    }

    /// Create a table, describing its columns inside the closure.
    pub fn create_table(&mut self, name: &str, build: impl FnOnce(&mut CreateTable)) {
        let mut table = CreateTable::new(name);
        build(&mut table);
        self.encode(Operation::CreateTable(table));
    }

    /// Alter a table, describing the changes inside the closure.
    pub fn change_table(&mut self, name: &str, build: impl FnOnce(&mut ChangeTable)) {
        let mut table = ChangeTable::new(name);
        build(&mut table);
        self.encode(Operation::ChangeTable(table));
    }

    /// Drop a table.
    pub fn drop_table(&mut self, name: &str) {
        self.encode(Operation::DropTable {
            table: name.to_owned(),
        });
    }

    /// Rename a table.
    pub fn rename_table(&mut self, name: &str, new_name: &str) {
        self.encode(Operation::RenameTable {
            table: name.to_owned(),
            new_name: new_name.to_owned(),
        });
    }

    /// Add one column to an existing table.
    pub fn add_column(
        &mut self,
        table: &str,
        name: &str,
        ty: ColumnType,
        options: impl Into<ColumnOptions>,
    ) -> ColumnOutcome {
        match resolve(name, ty, options.into()) {
            Some(column) => {
                self.encode(Operation::AddColumn {
                    table: table.to_owned(),
                    column,
                });
                ColumnOutcome::Added
            }
            None => ColumnOutcome::Skipped,
        }
    }

    /// Rename one column, giving its full replacement definition.
    pub fn rename_column(
        &mut self,
        table: &str,
        old_name: &str,
        new_name: &str,
        ty: ColumnType,
        options: impl Into<ColumnOptions>,
    ) -> ColumnOutcome {
        match resolve(new_name, ty, options.into()) {
            Some(column) => {
                self.encode(Operation::RenameColumn {
                    table: table.to_owned(),
                    old_name: old_name.to_owned(),
                    column,
                });
                ColumnOutcome::Added
            }
            None => ColumnOutcome::Skipped,
        }
    }

    /// Redefine one column in place.
    pub fn change_column(
        &mut self,
        table: &str,
        name: &str,
        ty: ColumnType,
        options: impl Into<ColumnOptions>,
    ) -> ColumnOutcome {
        match resolve(name, ty, options.into()) {
            Some(column) => {
                self.encode(Operation::ChangeColumn {
                    table: table.to_owned(),
                    column,
                });
                ColumnOutcome::Added
            }
            None => ColumnOutcome::Skipped,
        }
    }

    /// Drop one column.
    pub fn remove_column(&mut self, table: &str, name: &str) {
        self.encode(Operation::RemoveColumn {
            table: table.to_owned(),
            column: name.to_owned(),
        });
    }

    /// Add a single-column index.
    pub fn add_index(&mut self, table: &str, column: &str) {
        self.encode(Operation::AddIndex {
            table: table.to_owned(),
            column: column.to_owned(),
        });
    }

    /// Drop a single-column index.
    pub fn remove_index(&mut self, table: &str, column: &str) {
        self.encode(Operation::RemoveIndex {
            table: table.to_owned(),
            column: column.to_owned(),
        });
    }

    /// Append raw SQL verbatim.
    pub fn execute(&mut self, sql: &str) {
        if self.error.is_some() {
            return;
        }
        self.sql.push_str(sql);
    }
}

/// The explicit name and type always win over the options map.
fn resolve(
    name: &str,
    ty: ColumnType,
    options: ColumnOptions,
) -> Option<strata_ddl::Column> {
    options
        .merged_with(&ColumnOptions::new().named(name).of_type(ty.name()))
        .resolve()
}

// ==== Tests ====
