//! Error types for DDL generation.

use thiserror::Error;

/// Errors produced while rendering operations into SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    /// The dialect cannot express the requested operation.
    #[error("the {dialect} dialect does not support {operation}: {detail}")]
    Unsupported {
        /// Name of the dialect that refused the operation.
        dialect: &'static str,
        /// Short name of the refused operation (e.g. `remove_column`).
        operation: String,
        /// What the dialect supports instead.
        detail: String,
    },
}

impl DdlError {
    /// Create an unsupported-operation error.
    pub fn unsupported(
        dialect: &'static str,
        operation: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            dialect,
            operation: operation.into(),
            detail: detail.into(),
        }
    }
}

/// Result alias for DDL generation.
pub type DdlResult<T> = Result<T, DdlError>;
