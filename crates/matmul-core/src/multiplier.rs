//! Multiplier traits and the `MatrixMultiplier` decorator.
//!
//! `Multiplier` is the public trait consumed by orchestration.
//! `CoreMultiplier` is the internal trait implemented by algorithms.
//! `MatrixMultiplier` is a decorator that adds shape validation, the empty
//! operand fast path and a timing event.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::error::MatMulError;
use crate::matrix::{check_multiply_shapes, Matrix};
use crate::scalar::Scalar;

/// Public trait for matrix multipliers, consumed by orchestration.
pub trait Multiplier<T: Scalar>: Send + Sync {
    /// Compute `a * b`.
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `MatrixMultiplier` which adds validation and the fast path.
pub trait CoreMultiplier<T: Scalar>: Send + Sync {
    /// Perform the product on shape-compatible operands.
    fn multiply_core(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreMultiplier`.
pub struct MatrixMultiplier<T: Scalar> {
    inner: Arc<dyn CoreMultiplier<T>>,
}

impl<T: Scalar> MatrixMultiplier<T> {
    /// Create a new `MatrixMultiplier` wrapping the given core multiplier.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreMultiplier<T>>) -> Self {
        Self { inner }
    }
}

impl<T: Scalar> Multiplier<T> for MatrixMultiplier<T> {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
        check_multiply_shapes("multiply", a, b)?;

        // Any zero dimension: the product is all zeros
        if a.is_empty() || b.is_empty() {
            return Matrix::zeroed(a.rows(), b.cols());
        }

        let start = Instant::now();
        let result = self.inner.multiply_core(a, b);
        debug!(
            algorithm = self.inner.name(),
            backend = T::BACKEND,
            left = ?a.dims(),
            right = ?b.dims(),
            elapsed_us = start.elapsed().as_micros(),
            ok = result.is_ok(),
            "multiplication finished"
        );
        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
