//! Elementwise kernels built on a per-row merge-join

pub mod add;
pub mod equal;
pub mod subtract;

use crate::utility::util::{assemble, ensure_same_shape, use_parallel, RowBuffers};
use rayon::prelude::*;
use std::cmp::Ordering;
use tessera_core::{Result, Scalar, SparseMatrix};

/// Merge-join row `i` of `a` and `b` (both increasing by column).
///
/// `both` combines a shared column and may return `None` to drop it;
/// `only_b` maps a column present only in `b`. Columns only in `a` are copied.
fn merge_row<T, F, G>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    i: usize,
    both: &F,
    only_b: &G,
) -> Vec<(usize, T)>
where
    T: Scalar,
    F: Fn(T, T) -> Option<T>,
    G: Fn(T) -> T,
{
    let mut out = Vec::with_capacity(a.row_nnz(i) + b.row_nnz(i));
    let mut pa = a.row_entries(i).peekable();
    let mut pb = b.row_entries(i).peekable();
    loop {
        let order = match (pa.peek(), pb.peek()) {
            (None, None) => break,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(ea), Some(eb)) => ea.col.cmp(&eb.col),
        };
        match order {
            Ordering::Less => {
                if let Some(ea) = pa.next() {
                    out.push((ea.col, ea.value));
                }
            }
            Ordering::Greater => {
                if let Some(eb) = pb.next() {
                    out.push((eb.col, only_b(eb.value)));
                }
            }
            Ordering::Equal => {
                if let (Some(ea), Some(eb)) = (pa.next(), pb.next()) {
                    if let Some(v) = both(ea.value, eb.value) {
                        out.push((ea.col, v));
                    }
                }
            }
        }
    }
    out
}

/// Shared driver for add/subtract: shape check, row fan-out, assembly.
pub(crate) fn merge_join<T, F, G>(
    op: &'static str,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    both: F,
    only_b: G,
) -> Result<SparseMatrix<T>>
where
    T: Scalar,
    F: Fn(T, T) -> Option<T> + Sync,
    G: Fn(T) -> T + Sync,
{
    ensure_same_shape(op, a, b)?;
    let (nrows, ncols) = a.shape();
    let parallel = use_parallel(nrows, a.nnz() + b.nnz());
    log::debug!(
        "{op}: {nrows}x{ncols}, nnz {} and {}, parallel={parallel}",
        a.nnz(),
        b.nnz()
    );
    let rows: RowBuffers<T> = if parallel {
        (0..nrows)
            .into_par_iter()
            .map(|i| merge_row(a, b, i, &both, &only_b))
            .collect()
    } else {
        (0..nrows)
            .map(|i| merge_row(a, b, i, &both, &only_b))
            .collect()
    };
    assemble(nrows, ncols, rows)
}
