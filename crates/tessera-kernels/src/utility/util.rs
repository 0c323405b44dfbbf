//! Utility constants, shape checks, and the dense row accumulator
//
// Thresholds decide when kernels fan rows out over rayon; the accumulator is the
// per-thread scratch row used by multiply.

use tessera_core::{Result, Scalar, SparseError, SparseMatrix};

/// Minimum row count before a kernel goes parallel
pub const PAR_ROWS_LIMIT: usize = 512;
/// Minimum combined nnz of the operands before a kernel goes parallel
pub const PAR_NNZ_LIMIT: usize = 16 * 1024;

/// Whether a row-wise kernel over `nrows` rows touching `nnz` entries runs in parallel.
#[inline]
#[must_use]
pub const fn use_parallel(nrows: usize, nnz: usize) -> bool {
    nrows >= PAR_ROWS_LIMIT && nnz >= PAR_NNZ_LIMIT
}

/// Fail with `DimensionMismatch` unless both operands have the same shape.
#[inline]
pub fn ensure_same_shape<T>(
    op: &'static str,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(SparseError::DimensionMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Merged output rows: `rows[i]` holds `(col, value)` pairs in increasing column order.
pub type RowBuffers<T> = Vec<Vec<(usize, T)>>;

/// Build a matrix from per-row buffers. Zeros are skipped by insert.
pub fn assemble<T: Scalar>(
    nrows: usize,
    ncols: usize,
    rows: RowBuffers<T>,
) -> Result<SparseMatrix<T>> {
    let mut out = SparseMatrix::new(nrows, ncols);
    for (i, row) in rows.into_iter().enumerate() {
        for (j, v) in row {
            out.insert(i, j, v)?;
        }
    }
    Ok(out)
}

/// Dense scratch row: (values, seen mask, touched indices).
///
/// Adding is O(1); draining visits only touched columns and leaves the
/// accumulator zeroed for the next row.
#[derive(Debug, Clone)]
pub struct RowAccumulator<T> {
    vals: Vec<T>,
    seen: Vec<bool>,
    touched: Vec<usize>,
}

impl<T: Scalar> RowAccumulator<T> {
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self {
            vals: vec![T::zero(); width],
            seen: vec![false; width],
            touched: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.vals.len()
    }

    /// `row[j] += v`
    #[inline]
    pub fn add(&mut self, j: usize, v: T) {
        if self.seen[j] {
            self.vals[j] = self.vals[j] + v;
        } else {
            self.seen[j] = true;
            self.touched.push(j);
            self.vals[j] = v;
        }
    }

    /// Non-zero accumulated values in increasing column order; resets the row.
    pub fn drain_sorted(&mut self) -> Vec<(usize, T)> {
        self.touched.sort_unstable();
        let mut out = Vec::with_capacity(self.touched.len());
        for &j in &self.touched {
            let v = std::mem::replace(&mut self.vals[j], T::zero());
            self.seen[j] = false;
            if !v.is_zero() {
                out.push((j, v));
            }
        }
        self.touched.clear();
        out
    }
}
