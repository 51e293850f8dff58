use thiserror::Error;

/// Ways a result table can fail validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("table has no values")]
    Empty,

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{axis} axis has {ticks} tick labels for {cells} cells")]
    TickMismatch {
        axis: &'static str,
        ticks: usize,
        cells: usize,
    },

    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("value at ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    #[error("value {index} is not finite")]
    NonFiniteValue { index: usize },
}
