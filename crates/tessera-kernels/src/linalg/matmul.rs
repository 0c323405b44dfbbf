//! Sparse matrix-matrix product: C = A @ B.
//!
//! Row `i` of `C` is the sum over stored `A[i, k]` of `A[i, k] * B[k, :]`, so each
//! output row needs row `i` of `A` and the rows of `B` it selects. Rows are
//! independent:
//! - small problems run sequentially with one accumulator,
//! - large problems fan rows out over rayon with one thread-local accumulator
//!   per worker.
//!
//! Accumulated zeros (cancellations) are never stored.

#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k for indices"
)]

use crate::utility::util::{assemble, use_parallel, RowAccumulator, RowBuffers};
use rayon::prelude::*;
use std::cell::RefCell;
use tessera_core::{Result, Scalar, SparseError, SparseMatrix};
use thread_local::ThreadLocal;

#[inline]
fn multiply_row<T: Scalar>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    i: usize,
    acc: &mut RowAccumulator<T>,
) -> Vec<(usize, T)> {
    for ea in a.row_entries(i) {
        for eb in b.row_entries(ea.col) {
            acc.add(eb.col, ea.value * eb.value);
        }
    }
    acc.drain_sorted()
}

/// `A @ B`, shape `(A.nrows, B.ncols)`.
///
/// # Errors
/// `DimensionMismatch` when `A.ncols != B.nrows`.
pub fn multiply<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.ncols() != b.nrows() {
        return Err(SparseError::DimensionMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    let m = a.nrows();
    let n = b.ncols();
    let parallel = use_parallel(m, a.nnz() + b.nnz());
    log::debug!(
        "multiply: {}x{} @ {}x{}, nnz {} and {}, parallel={parallel}",
        m,
        a.ncols(),
        b.nrows(),
        n,
        a.nnz(),
        b.nnz()
    );

    let rows: RowBuffers<T> = if parallel {
        let tls: ThreadLocal<RefCell<RowAccumulator<T>>> = ThreadLocal::new();
        (0..m)
            .into_par_iter()
            .map(|i| {
                let cell = tls.get_or(|| RefCell::new(RowAccumulator::with_width(n)));
                let mut acc = cell.borrow_mut();
                multiply_row(a, b, i, &mut acc)
            })
            .collect()
    } else {
        let mut acc = RowAccumulator::with_width(n);
        (0..m).map(|i| multiply_row(a, b, i, &mut acc)).collect()
    };
    assemble(m, n, rows)
}
