//! Core data structures and traits for Tessera (pure Rust)
//!
//! A [`SparseMatrix`] keeps every non-zero [`Entry`] in a single owning pool and
//! indexes it twice: once per row (ordered by column) and once per column
//! (ordered by row). Algorithms built on both indices live in `tessera-kernels`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod entry;
pub mod error;
pub mod matrix;
pub mod scalar;

pub use entry::{Entry, EntryId};
pub use error::{Result, SparseError};
pub use matrix::SparseMatrix;
pub use scalar::Scalar;
