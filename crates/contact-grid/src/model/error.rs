//! Error types for table models.

use contact_grid_core::{CoercionError, ValueType};

/// Result type alias for table model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors returned by table model operations.
///
/// None of these are fatal: each one describes a single rejected operation,
/// and the row store is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A cell coordinate is outside the table.
    #[error("cell ({row}, {column}) is out of range for a {rows}x{columns} table")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A row index is outside the table.
    #[error("row {index} is out of range (row count {rows})")]
    RowOutOfRange { index: usize, rows: usize },

    /// A column index is outside the table.
    #[error("column {column} is out of range (column count {columns})")]
    ColumnOutOfRange { column: usize, columns: usize },

    /// A row's width does not match the column count.
    #[error("row has {actual} cells, expected {expected}")]
    RowShapeMismatch { expected: usize, actual: usize },

    /// A cell could not be converted to or from its record field.
    #[error("cannot convert row {row}, column {column} ('{field}'): {source}")]
    Conversion {
        row: usize,
        column: usize,
        field: &'static str,
        #[source]
        source: CoercionError,
    },
}

impl ModelError {
    /// Create a conversion error for a cell whose value does not match the
    /// column's declared type.
    pub(crate) fn unexpected_cell(
        row: usize,
        column: usize,
        field: &'static str,
        expected: ValueType,
        found: Option<contact_grid_core::ValueKind>,
    ) -> Self {
        let source = match found {
            Some(found) => CoercionError::TypeMismatch {
                expected: expected.kind,
                found,
            },
            None => CoercionError::Missing { expected },
        };
        Self::Conversion {
            row,
            column,
            field,
            source,
        }
    }
}
