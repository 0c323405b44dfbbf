use crate::utility::util::{assemble, use_parallel, RowBuffers};
use rayon::prelude::*;
use tessera_core::{Result, Scalar, SparseMatrix};

/// `alpha * A`. Products that come out zero are dropped, so `alpha == 0` yields an
/// empty matrix of the same shape.
pub fn scale<T: Scalar>(a: &SparseMatrix<T>, alpha: T) -> Result<SparseMatrix<T>> {
    let (nrows, ncols) = a.shape();
    if alpha.is_zero() {
        return Ok(SparseMatrix::new(nrows, ncols));
    }
    let scale_row = |i: usize| -> Vec<(usize, T)> {
        a.row_entries(i)
            .map(|e| (e.col, e.value * alpha))
            .collect()
    };
    let rows: RowBuffers<T> = if use_parallel(nrows, a.nnz()) {
        (0..nrows).into_par_iter().map(scale_row).collect()
    } else {
        (0..nrows).map(scale_row).collect()
    };
    assemble(nrows, ncols, rows)
}
