//! Error types for clfviz operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clfviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation that needs at least one record got an empty collection.
    #[error("Empty collection provided")]
    EmptyCollection,

    /// Confusion matrices in an aggregation group disagree in dimension.
    #[error("Confusion matrix shape mismatch: expected {expected}x{expected}, found {found_rows}x{found_cols}")]
    ConfMatrixShape {
        /// Class count of the first matrix in the group.
        expected: usize,
        /// Row count of the offending matrix.
        found_rows: usize,
        /// Column count of the offending matrix.
        found_cols: usize,
    },

    /// A confusion matrix is not square.
    #[error("Confusion matrix is not square: {rows}x{cols}")]
    ConfMatrixNotSquare {
        /// Row count.
        rows: usize,
        /// Column count of the first mismatching row.
        cols: usize,
    },

    /// Scale domain error (degenerate extent, empty stop list).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ConfMatrixShape {
            expected: 3,
            found_rows: 2,
            found_cols: 2,
        };
        assert!(err.to_string().contains("3x3"));
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn test_empty_collection_display() {
        assert!(Error::EmptyCollection.to_string().contains("Empty"));
    }
}
