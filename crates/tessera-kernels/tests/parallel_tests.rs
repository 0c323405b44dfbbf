//! Inputs above the parallel thresholds, checked against dense references.

use tessera_kernels::utility::util::use_parallel;
use tessera_kernels::{add, col_sums, multiply, row_sums, subtract, SparseMatrix};

const N: usize = 600;
const PER_ROW: usize = 30;

fn banded(seed: usize) -> SparseMatrix<i64> {
    let triplets = (0..N).flat_map(move |i| {
        (0..PER_ROW).map(move |t| {
            let j = (i * 7 + t * 37 + seed) % N;
            let v = ((i + t + seed) % 5) as i64 + 1;
            (i, j, v)
        })
    });
    SparseMatrix::from_triplets(N, N, triplets).unwrap()
}

fn to_dense(m: &SparseMatrix<i64>) -> Vec<i64> {
    let mut d = vec![0i64; m.nrows() * m.ncols()];
    for e in m.iter() {
        d[e.row * m.ncols() + e.col] = e.value;
    }
    d
}

fn assert_matches_dense(m: &SparseMatrix<i64>, dense: &[i64]) {
    assert_eq!(m.nnz(), dense.iter().filter(|v| **v != 0).count());
    for e in m.iter() {
        assert_eq!(dense[e.row * m.ncols() + e.col], e.value);
    }
}

#[test]
fn parallel_path_is_taken() {
    let a = banded(0);
    assert_eq!(a.nnz(), N * PER_ROW);
    assert!(use_parallel(a.nrows(), 2 * a.nnz()));
}

#[test]
fn parallel_add_and_subtract_match_dense() {
    let a = banded(0);
    let b = banded(3);
    let da = to_dense(&a);
    let db = to_dense(&b);

    let sum: Vec<i64> = da.iter().zip(&db).map(|(x, y)| x + y).collect();
    assert_matches_dense(&add(&a, &b).unwrap(), &sum);

    let diff: Vec<i64> = da.iter().zip(&db).map(|(x, y)| x - y).collect();
    assert_matches_dense(&subtract(&a, &b).unwrap(), &diff);

    assert_eq!(subtract(&add(&a, &b).unwrap(), &b).unwrap(), a);
}

#[test]
fn parallel_multiply_matches_reference() {
    let a = banded(1);
    let b = banded(2);
    let db = to_dense(&b);
    let mut expected = vec![0i64; N * N];
    for ea in a.iter() {
        for j in 0..N {
            expected[ea.row * N + j] += ea.value * db[ea.col * N + j];
        }
    }
    assert_matches_dense(&multiply(&a, &b).unwrap(), &expected);
}

#[test]
fn parallel_sums_match_dense() {
    let a = banded(4);
    let d = to_dense(&a);
    let rows: Vec<i64> = (0..N).map(|i| d[i * N..(i + 1) * N].iter().sum()).collect();
    let cols: Vec<i64> = (0..N).map(|j| (0..N).map(|i| d[i * N + j]).sum()).collect();
    assert_eq!(row_sums(&a), rows);
    assert_eq!(col_sums(&a), cols);
}
