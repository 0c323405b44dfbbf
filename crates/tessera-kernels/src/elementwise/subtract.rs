//! Elementwise subtraction (`subtract`)

use super::merge_join;
use tessera_core::{Result, Scalar, SparseMatrix};

/// `A - B` for matrices of equal shape.
///
/// Columns only in `B` are negated. A shared column whose difference is zero is
/// skipped before it reaches the result.
///
/// # Errors
/// `DimensionMismatch` when the shapes differ.
pub fn subtract<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge_join(
        "subtract",
        a,
        b,
        |x, y| {
            let v = x - y;
            (!v.is_zero()).then_some(v)
        },
        |y| -y,
    )
}
