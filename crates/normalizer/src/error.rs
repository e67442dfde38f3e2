//! Normalization Error Types

use thiserror::Error;

/// Errors during normalization
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Requested time axis does not exist in the series
    #[error("axis {axis} is out of range for a series with {ndim} dimensions")]
    AxisOutOfRange { axis: usize, ndim: usize },

    /// Table column length differs from the other columns
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Table already holds a column with this name
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),
}
