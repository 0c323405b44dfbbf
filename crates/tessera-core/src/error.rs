//! Error types for sparse matrix operations.

use thiserror::Error;

/// Errors reported by matrix storage and kernels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SparseError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: lhs is {lhs:?}, rhs is {rhs:?}")]
    DimensionMismatch {
        /// Operation name (`add`, `subtract`, `multiply`)
        op: &'static str,
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },

    /// A row or column index lies outside the matrix.
    #[error("index ({row}, {col}) out of range for {nrows}x{ncols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl SparseError {
    #[inline]
    #[must_use]
    pub const fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

pub type Result<T, E = SparseError> = std::result::Result<T, E>;
