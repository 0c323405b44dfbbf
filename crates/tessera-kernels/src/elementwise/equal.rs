//! Structural equality (`equal`)

use tessera_core::{Scalar, SparseMatrix};

/// True when both matrices have the same shape and the same stored `(col, value)`
/// sequence in every row.
#[must_use]
pub fn equal<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> bool {
    if a.shape() != b.shape() || a.nnz() != b.nnz() {
        return false;
    }
    a == b
}
