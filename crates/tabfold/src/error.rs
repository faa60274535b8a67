//! Error types for table construction, planning, and rendering.

use std::io;

/// Errors that can occur while reading, planning, or rendering a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input contained no rows, or only empty rows.
    #[error("input table is empty")]
    EmptyInput,

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Escape decoding produced bytes that are not valid UTF-8.
    #[error("input is not valid UTF-8 after escape decoding: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A command-line argument was malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested total width cannot accommodate the fixed columns, the
    /// layout overhead, and the minimum width of every unspecified column.
    #[error("table width {0} is too small for the requested columns and layout")]
    TotalWidthTooSmall(usize),

    /// A wrapped line exceeds its column width. The coordinate is present
    /// when a specific cell is known, absent when the planner proved that no
    /// assignment of column widths can fit.
    #[error("{}", overflow_message(.cell))]
    ColumnOverflow {
        /// Zero-based `(row, column)` of the offending cell, if known.
        cell: Option<(usize, usize)>,
    },
}

fn overflow_message(cell: &Option<(usize, usize)>) -> String {
    match cell {
        Some((row, col)) => format!(
            "cell at row {} column {} does not fit its column width",
            row + 1,
            col + 1
        ),
        None => "no assignment of column widths fits the table width".to_string(),
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
