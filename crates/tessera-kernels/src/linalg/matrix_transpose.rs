//! Matrix transpose.
//!
//! The column index of `A` already holds every column ordered by row, which is
//! exactly the row index of `Aᵀ`; transposing swaps the two indices and each
//! entry's coordinates in O(nnz).

use tessera_core::{Scalar, SparseMatrix};

/// `Aᵀ`, shape `(ncols, nrows)`.
#[must_use]
pub fn transpose<T: Scalar>(a: &SparseMatrix<T>) -> SparseMatrix<T> {
    log::debug!("transpose: {}x{}, nnz {}", a.nrows(), a.ncols(), a.nnz());
    a.transposed()
}
