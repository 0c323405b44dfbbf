//! Elementwise addition (`add`)

use super::merge_join;
use tessera_core::{Result, Scalar, SparseMatrix};

/// `A + B` for matrices of equal shape.
///
/// Columns present in one operand are copied; shared columns are summed and a
/// zero sum is not stored.
///
/// # Errors
/// `DimensionMismatch` when the shapes differ.
pub fn add<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge_join("add", a, b, |x, y| Some(x + y), |y| y)
}
