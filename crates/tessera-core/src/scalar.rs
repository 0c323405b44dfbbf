//! Numeric capability required of matrix values

use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Mul, Neg, Sub};

/// Value type storable in a [`SparseMatrix`](crate::SparseMatrix).
///
/// `Zero` supplies the additive identity (the "absent" sentinel) and addition;
/// the remaining bounds cover subtraction, negation and products. `Send + Sync`
/// lets kernels walk operands from several threads.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Zero
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialEq
        + Debug
        + Zero
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
        + Send
        + Sync
{
}
