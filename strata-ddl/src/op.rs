//! The schema change operation model.
//!
//! Operations are plain data records. The builder DSL in `strata-migrate`
//! constructs them; a [`crate::Dialect`] renders them. The enum is closed:
//! every encoder matches it exhaustively and there is no "unknown rule"
//! case to defend against.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnOptions, ColumnOutcome, ColumnType};

/// A `CREATE TABLE` request under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    /// Table name.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<Column>,
    /// Columns to index, one single-column index each.
    pub indices: Vec<String>,
    /// Primary key column, if any.
    pub primary_key: Option<String>,
}

impl CreateTable {
    /// An empty table definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a column from loose options.
    ///
    /// A request with no name or an unrecognized type keyword adds
    /// nothing and reports [`ColumnOutcome::Skipped`].
    pub fn column(&mut self, options: ColumnOptions) -> ColumnOutcome {
        match options.resolve() {
            Some(column) => {
                self.columns.push(column);
                ColumnOutcome::Added
            }
            None => ColumnOutcome::Skipped,
        }
    }

    /// Set the primary key column. An empty name is ignored.
    pub fn primary_key(&mut self, column: impl Into<String>) {
        let column = column.into();
        if !column.is_empty() {
            self.primary_key = Some(column);
        }
    }

    /// Request a single-column index. An empty name is ignored.
    pub fn index(&mut self, column: impl Into<String>) {
        let column = column.into();
        if !column.is_empty() {
            self.indices.push(column);
        }
    }

    fn typed(&mut self, name: &str, ty: ColumnType, options: ColumnOptions) -> ColumnOutcome {
        // The explicit name and type always win over the options map.
        self.column(options.merged_with(&ColumnOptions::new().named(name).of_type(ty.name())))
    }

    /// Add a `string` column.
    pub fn string(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::String, options.into())
    }

    /// Add a `text` column.
    pub fn text(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Text, options.into())
    }

    /// Add an `integer` column.
    pub fn integer(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Integer, options.into())
    }

    /// Add a `float` column.
    pub fn float(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Float, options.into())
    }

    /// Add a `decimal` column.
    pub fn decimal(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Decimal, options.into())
    }

    /// Add a `datetime` column.
    pub fn datetime(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::DateTime, options.into())
    }

    /// Add a `timestamp` column.
    pub fn timestamp(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Timestamp, options.into())
    }

    /// Add a `time` column.
    pub fn time(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Time, options.into())
    }

    /// Add a `date` column.
    pub fn date(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Date, options.into())
    }

    /// Add a `binary` column.
    pub fn binary(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Binary, options.into())
    }

    /// Add a `boolean` column.
    pub fn boolean(&mut self, name: &str, options: impl Into<ColumnOptions>) -> ColumnOutcome {
        self.typed(name, ColumnType::Boolean, options.into())
    }
}

/// An `ALTER TABLE` request: an additive payload plus removals, renames
/// and redefinitions.
///
/// Composes [`CreateTable`] for the additive half rather than extending
/// it; `Deref` exposes the column, index and primary-key helpers on the
/// payload directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeTable {
    /// Columns, indices and primary key to add.
    pub additions: CreateTable,
    /// Columns to drop.
    pub removed_columns: Vec<String>,
    /// Columns to redefine in place.
    pub changed_columns: Vec<Column>,
    /// Index columns to drop.
    pub removed_indices: Vec<String>,
    /// Old name to full replacement definition, in request order.
    pub renamed_columns: IndexMap<String, Column>,
    /// Drop the primary key.
    pub removes_primary_key: bool,
}

impl ChangeTable {
    /// An empty change request for the named table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            additions: CreateTable::new(name),
            ..Self::default()
        }
    }

    /// The table being altered.
    pub fn table(&self) -> &str {
        &self.additions.name
    }

    /// Redefine an existing column in place.
    pub fn change(
        &mut self,
        name: &str,
        ty: ColumnType,
        options: impl Into<ColumnOptions>,
    ) -> ColumnOutcome {
        let resolved = options
            .into()
            .merged_with(&ColumnOptions::new().named(name).of_type(ty.name()))
            .resolve();
        match resolved {
            Some(column) => {
                self.changed_columns.push(column);
                ColumnOutcome::Added
            }
            None => ColumnOutcome::Skipped,
        }
    }

    /// Rename a column, giving its full replacement definition.
    pub fn rename(
        &mut self,
        old_name: &str,
        new_name: &str,
        ty: ColumnType,
        options: impl Into<ColumnOptions>,
    ) -> ColumnOutcome {
        let resolved = options
            .into()
            .merged_with(&ColumnOptions::new().named(new_name).of_type(ty.name()))
            .resolve();
        match resolved {
            Some(column) => {
                self.renamed_columns.insert(old_name.to_owned(), column);
                ColumnOutcome::Added
            }
            None => ColumnOutcome::Skipped,
        }
    }

    /// Drop a column.
    pub fn remove(&mut self, column: impl Into<String>) {
        self.removed_columns.push(column.into());
    }

    /// Drop the index on a column.
    pub fn remove_index(&mut self, column: impl Into<String>) {
        self.removed_indices.push(column.into());
    }

    /// Drop the primary key.
    pub fn remove_primary_key(&mut self) {
        self.removes_primary_key = true;
    }
}

impl Deref for ChangeTable {
    type Target = CreateTable;

    fn deref(&self) -> &CreateTable {
        &self.additions
    }
}

impl DerefMut for ChangeTable {
    fn deref_mut(&mut self) -> &mut CreateTable {
        &mut self.additions
    }
}

/// A single schema change, ready to be rendered by a [`crate::Dialect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Create a table with its columns, indices and optional primary key.
    CreateTable(CreateTable),
    /// Alter a table: additions plus removals, renames and redefinitions.
    ChangeTable(ChangeTable),
    /// Drop a table.
    DropTable {
        /// Table to drop.
        table: String,
    },
    /// Rename a table.
    RenameTable {
        /// Current table name.
        table: String,
        /// New table name.
        new_name: String,
    },
    /// Add one column to an existing table.
    AddColumn {
        /// Table to alter.
        table: String,
        /// Column to add.
        column: Column,
    },
    /// Rename one column, giving its replacement definition.
    RenameColumn {
        /// Table to alter.
        table: String,
        /// Current column name.
        old_name: String,
        /// Replacement definition, carrying the new name.
        column: Column,
    },
    /// Redefine one column in place.
    ChangeColumn {
        /// Table to alter.
        table: String,
        /// Replacement definition.
        column: Column,
    },
    /// Drop one column.
    RemoveColumn {
        /// Table to alter.
        table: String,
        /// Column to drop.
        column: String,
    },
    /// Add a single-column index.
    AddIndex {
        /// Table to index.
        table: String,
        /// Column to index.
        column: String,
    },
    /// Drop a single-column index.
    RemoveIndex {
        /// Table to alter.
        table: String,
        /// Indexed column.
        column: String,
    },
}

impl Operation {
    /// Short snake-case name used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateTable(_) => "create_table",
            Self::ChangeTable(_) => "change_table",
            Self::DropTable { .. } => "drop_table",
            Self::RenameTable { .. } => "rename_table",
            Self::AddColumn { .. } => "add_column",
            Self::RenameColumn { .. } => "rename_column",
            Self::ChangeColumn { .. } => "change_column",
            Self::RemoveColumn { .. } => "remove_column",
            Self::AddIndex { .. } => "add_index",
            Self::RemoveIndex { .. } => "remove_index",
        }
    }
}
