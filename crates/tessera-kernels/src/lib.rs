//! Kernels for Tessera (pure Rust, parallel ready)
//!
//! Every kernel reads its operands through the row and column indices of
//! [`tessera_core::SparseMatrix`] and returns a freshly allocated result.

pub mod arith;
pub mod elementwise;
pub mod linalg;
pub mod ops;
pub mod reduce;
pub mod utility;

pub use arith::scale;
pub use elementwise::{add::add, equal::equal, subtract::subtract};
pub use linalg::{matmul::multiply, matrix_transpose::transpose};
pub use ops::SparseOps;
pub use reduce::{col_sums, row_sums, sum};
pub use tessera_core::{Entry, Result, Scalar, SparseError, SparseMatrix};

/// Configure the global rayon pool used by the parallel kernel paths.
///
/// `None` keeps rayon's default (`RAYON_NUM_THREADS`, else one thread per core).
/// Must run before any kernel touches the global pool.
///
/// # Errors
/// If the global pool has already been initialised.
pub fn init_parallel(
    threads: Option<usize>,
) -> std::result::Result<(), rayon::ThreadPoolBuildError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build_global()?;
    log::debug!("rayon pool ready with {} threads", rayon::current_num_threads());
    Ok(())
}
