//! Dual-indexed sparse matrix: one ordered chain per row and one per column

use crate::entry::{Entry, EntryId, EntryPool};
use crate::error::{Result, SparseError};
use crate::scalar::Scalar;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

/// Ordered chain: key is the index along the other axis.
type Chain = BTreeMap<usize, EntryId>;

#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    rows: Vec<Chain>, // keyed by column, length nrows
    cols: Vec<Chain>, // keyed by row, length ncols
    pool: EntryPool<T>,
    zero: T,
}

impl<T> SparseMatrix<T> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pool.len() == 0
    }

    /// Ratio of stored entries to total cells; `0.0` when the matrix has no cells.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "density is an estimate")]
    pub fn density(&self) -> f64 {
        let cells = self.nrows.saturating_mul(self.ncols);
        if cells == 0 {
            return 0.0;
        }
        self.nnz() as f64 / cells as f64
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(SparseError::OutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Stored entry at `(row, col)`, if any. Out-of-range positions yield `None`.
    #[must_use]
    pub fn entry(&self, row: usize, col: usize) -> Option<&Entry<T>> {
        let id = self.rows.get(row)?.get(&col)?;
        self.pool.get(*id)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entry(row, col).is_some()
    }

    /// Entries of `row` in increasing column order.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = &Entry<T>> + '_ {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(BTreeMap::values)
            .filter_map(|id| self.pool.get(*id))
    }

    /// Entries of `col` in increasing row order.
    pub fn col_entries(&self, col: usize) -> impl Iterator<Item = &Entry<T>> + '_ {
        self.cols
            .get(col)
            .into_iter()
            .flat_map(BTreeMap::values)
            .filter_map(|id| self.pool.get(*id))
    }

    /// Number of stored entries in `row`.
    #[inline]
    #[must_use]
    pub fn row_nnz(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, BTreeMap::len)
    }

    /// Number of stored entries in `col`.
    #[inline]
    #[must_use]
    pub fn col_nnz(&self, col: usize) -> usize {
        self.cols.get(col).map_or(0, BTreeMap::len)
    }

    /// All entries, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> + '_ {
        (0..self.nrows).flat_map(move |r| self.row_entries(r))
    }

    /// Remove the entry at `(row, col)` from both chains and release it.
    ///
    /// Returns the removed value, or `None` when the cell was empty.
    pub fn delete(&mut self, row: usize, col: usize) -> Result<Option<T>> {
        self.check_bounds(row, col)?;
        let Some(id) = self.rows[row].remove(&col) else {
            return Ok(None);
        };
        let col_id = self.cols[col].remove(&row);
        debug_assert_eq!(col_id, Some(id), "row and column chains disagree");
        log::trace!("delete ({row}, {col})");
        Ok(self.pool.release(id).map(|entry| entry.value))
    }
}

impl<T: Scalar> SparseMatrix<T> {
    /// Empty `nrows x ncols` matrix. Zero-sized dimensions are allowed.
    #[must_use]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: vec![Chain::new(); nrows],
            cols: vec![Chain::new(); ncols],
            pool: EntryPool::new(),
            zero: T::zero(),
        }
    }

    /// Build from `(row, col, value)` triplets via repeated [`insert`](Self::insert).
    ///
    /// Later duplicates overwrite earlier ones and zeros are skipped.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut m = Self::new(nrows, ncols);
        for (row, col, value) in triplets {
            m.insert(row, col, value)?;
        }
        log::trace!("from_triplets: {nrows}x{ncols}, nnz {}", m.nnz());
        Ok(m)
    }

    /// Store `value` at `(row, col)`.
    ///
    /// A zero value is a no-op: nothing is created and an existing entry is left
    /// as is. An existing entry is overwritten in place.
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        if value.is_zero() {
            return Ok(());
        }
        match self.rows[row].entry(col) {
            btree_map::Entry::Occupied(slot) => {
                if let Some(entry) = self.pool.get_mut(*slot.get()) {
                    entry.value = value;
                }
            }
            btree_map::Entry::Vacant(slot) => {
                let id = self.pool.alloc(Entry::new(value, row, col));
                slot.insert(id);
                self.cols[col].insert(row, id);
                log::trace!("insert ({row}, {col}) -> slot {}", id.index());
            }
        }
        Ok(())
    }

    /// Value at `(row, col)`, zero when nothing is stored.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.entry(row, col).map_or(self.zero, |entry| entry.value))
    }

    /// Structural transpose: the row and column indices trade places.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut t = self.clone();
        std::mem::swap(&mut t.rows, &mut t.cols);
        std::mem::swap(&mut t.nrows, &mut t.ncols);
        for entry in t.pool.iter_mut() {
            std::mem::swap(&mut entry.row, &mut entry.col);
        }
        t
    }

    /// Remove every entry, keeping the shape.
    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(BTreeMap::clear);
        self.cols.iter_mut().for_each(BTreeMap::clear);
        self.pool = EntryPool::new();
    }
}

impl<T: PartialEq> PartialEq for SparseMatrix<T> {
    /// Same shape and, row by row, the same `(col, value)` sequence.
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        (0..self.nrows).all(|r| {
            let mut lhs = self.row_entries(r);
            let mut rhs = other.row_entries(r);
            loop {
                match (lhs.next(), rhs.next()) {
                    (None, None) => return true,
                    (Some(a), Some(b)) if a.col == b.col && a.value == b.value => {}
                    _ => return false,
                }
            }
        })
    }
}

impl<T> Index<(usize, usize)> for SparseMatrix<T> {
    type Output = T;

    /// # Panics
    /// If `row >= nrows` or `col >= ncols`.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        self.entry(row, col).map_or(&self.zero, |entry| &entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chains_consistent<T: Scalar>(m: &SparseMatrix<T>) -> bool {
        let from_rows: usize = m.rows.iter().map(BTreeMap::len).sum();
        let from_cols: usize = m.cols.iter().map(BTreeMap::len).sum();
        let same_handles = m.rows.iter().enumerate().all(|(r, chain)| {
            chain
                .iter()
                .all(|(c, id)| m.cols[*c].get(&r) == Some(id))
        });
        from_rows == m.nnz() && from_cols == m.nnz() && same_handles
    }

    #[test]
    fn both_chains_share_handles() {
        let mut m = SparseMatrix::new(4, 4);
        m.insert(3, 0, 1i32).unwrap();
        m.insert(0, 3, 2).unwrap();
        m.insert(2, 2, 3).unwrap();
        m.insert(2, 2, 4).unwrap();
        assert!(chains_consistent(&m));
        m.delete(0, 3).unwrap();
        assert!(chains_consistent(&m));
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn transposed_keeps_chains_consistent() {
        let m = SparseMatrix::from_triplets(2, 3, [(0, 2, 1.5f64), (1, 0, -2.0), (1, 2, 4.0)])
            .unwrap();
        let t = m.transposed();
        assert_eq!(t.shape(), (3, 2));
        assert!(chains_consistent(&t));
        assert_eq!(t.entry(2, 1).map(Entry::position), Some((2, 1)));
    }

    #[test]
    fn clear_resets_pool() {
        let mut m = SparseMatrix::from_triplets(2, 2, [(0, 0, 1i64), (1, 1, 2)]).unwrap();
        m.clear();
        assert!(m.is_empty());
        assert!(chains_consistent(&m));
        assert_eq!(m.shape(), (2, 2));
    }
}
