//! Method-call surface over the kernels

use crate::{add, equal, multiply, scale, subtract, transpose};
use tessera_core::{Result, Scalar, SparseMatrix};

/// Matrix algorithms as methods: `a.add(&b)?`, `a.transpose()`, ...
pub trait SparseOps<T: Scalar>: Sized {
    fn equals(&self, other: &Self) -> bool;
    fn add(&self, other: &Self) -> Result<Self>;
    fn subtract(&self, other: &Self) -> Result<Self>;
    fn transpose(&self) -> Self;
    fn multiply(&self, other: &Self) -> Result<Self>;
    fn scale(&self, alpha: T) -> Result<Self>;
}

impl<T: Scalar> SparseOps<T> for SparseMatrix<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        equal(self, other)
    }

    #[inline]
    fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    #[inline]
    fn transpose(&self) -> Self {
        transpose(self)
    }

    #[inline]
    fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }

    #[inline]
    fn scale(&self, alpha: T) -> Result<Self> {
        scale(self, alpha)
    }
}
