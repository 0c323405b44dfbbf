pub mod matmul;
pub mod matrix_transpose;
