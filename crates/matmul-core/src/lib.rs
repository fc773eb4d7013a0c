//! # matmul-core
//!
//! Core library for matmul-rs: an arbitrary-precision decimal integer kernel
//! and dense matrices multiplied by the naive, Strassen and Winograd
//! algorithms, generic over an exact (`BigInt`) or fixed-width (`i64`) scalar.

pub mod bigint;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod naive;
pub mod options;
pub mod registry;
pub mod scalar;
pub mod strassen;
pub mod winograd;

// Re-exports
pub use bigint::BigInt;
pub use constants::{
    exit_codes, DEFAULT_DIMENSION, DEFAULT_MAX_VALUE, DEFAULT_STRASSEN_CUTOFF, DISPLAY_CELL_LIMIT,
};
pub use error::MatMulError;
pub use matrix::{Matrix, Quadrants};
pub use multiplier::{CoreMultiplier, MatrixMultiplier, Multiplier};
pub use options::Options;
pub use registry::{DefaultFactory, MultiplierFactory, MULTIPLIER_NAMES};
pub use scalar::Scalar;
pub use winograd::WinogradFactors;

/// Multiply two matrices given in row form with the naive algorithm.
///
/// This is a convenience function for simple use cases. For algorithm
/// selection and digit ceilings, use a [`MultiplierFactory`] directly.
///
/// # Example
/// ```
/// let c = matmul_core::multiply_rows(&[vec![1, 2], vec![3, 4]], &[vec![5, 6], vec![7, 8]])
///     .unwrap();
/// assert_eq!(c.to_string(), "19\t22\n43\t50");
/// ```
pub fn multiply_rows(a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Matrix, MatMulError> {
    let a = Matrix::from_rows(a)?;
    let b = Matrix::from_rows(b)?;
    naive::multiply(&a, &b)
}
