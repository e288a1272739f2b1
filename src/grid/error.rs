//! Error types for the grid engine

use thiserror::Error;

use crate::matrix::FieldId;

/// Errors that can occur during grid layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The container has no usable columns
    #[error("invalid column count {columns}: a grid needs at least one column")]
    InvalidColumnCount { columns: i32 },

    /// The vertical row budget grew past its ceiling without fitting every field
    #[error("fields do not fit in {rows} rows (row limit {limit})")]
    RowLimitExceeded { rows: i32, limit: i32 },

    /// A single field asks for more rows than the layout may ever have
    #[error("field {field} spans {h} rows, more than the row limit {limit}")]
    SpanTooTall { field: FieldId, h: i32, limit: i32 },
}

impl GridError {
    /// Create an invalid column count error
    pub fn invalid_columns(columns: i32) -> Self {
        Self::InvalidColumnCount { columns }
    }

    /// Create a row limit error
    pub fn row_limit(rows: i32, limit: i32) -> Self {
        Self::RowLimitExceeded { rows, limit }
    }

    /// Create an oversized span error
    pub fn span_too_tall(field: FieldId, h: i32, limit: i32) -> Self {
        Self::SpanTooTall { field, h, limit }
    }
}
