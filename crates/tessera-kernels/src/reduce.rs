use crate::utility::util::use_parallel;
use rayon::prelude::*;
use tessera_core::{Scalar, SparseMatrix};

#[inline]
fn fold_sum<'a, T: Scalar + 'a>(values: impl Iterator<Item = &'a T>) -> T {
    values.fold(T::zero(), |acc, &v| acc + v)
}

/// sum of all stored values
#[must_use]
pub fn sum<T: Scalar>(a: &SparseMatrix<T>) -> T {
    row_sums(a).into_iter().fold(T::zero(), |acc, v| acc + v)
}

/// row sums
#[must_use]
pub fn row_sums<T: Scalar>(a: &SparseMatrix<T>) -> Vec<T> {
    let row_sum = |i: usize| fold_sum(a.row_entries(i).map(|e| &e.value));
    if use_parallel(a.nrows(), a.nnz()) {
        (0..a.nrows()).into_par_iter().map(row_sum).collect()
    } else {
        (0..a.nrows()).map(row_sum).collect()
    }
}

/// column sums, walking the column index
#[must_use]
pub fn col_sums<T: Scalar>(a: &SparseMatrix<T>) -> Vec<T> {
    let col_sum = |j: usize| fold_sum(a.col_entries(j).map(|e| &e.value));
    if use_parallel(a.ncols(), a.nnz()) {
        (0..a.ncols()).into_par_iter().map(col_sum).collect()
    } else {
        (0..a.ncols()).map(col_sum).collect()
    }
}
