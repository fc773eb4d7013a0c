//! Naive triple-loop multiplication.

use crate::error::MatMulError;
use crate::matrix::{check_multiply_shapes, Matrix};
use crate::multiplier::CoreMultiplier;
use crate::scalar::Scalar;

/// `result[i][j] = Σ_k a[i][k] * b[k][j]`.
///
/// Performs `a.rows * a.cols * b.cols` scalar multiplications.
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
    check_multiply_shapes("naive multiply", a, b)?;
    let mut result = Matrix::zeroed(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        let row = a.row(i);
        for j in 0..b.cols() {
            let mut sum = T::zero();
            for (k, lhs) in row.iter().enumerate() {
                let product = lhs.try_mul(&b[(k, j)])?;
                sum = sum.try_add(&product)?;
            }
            result[(i, j)] = sum;
        }
    }
    Ok(result)
}

/// Naive multiplication as a registry entry.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> CoreMultiplier<T> for NaiveMultiplier {
    fn multiply_core(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
        multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
