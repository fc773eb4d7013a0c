//! Orchestration interfaces.

use std::time::Duration;

use matmul_core::error::MatMulError;
use matmul_core::matrix::Matrix;
use matmul_core::scalar::Scalar;

/// Trait for presenting results to the user.
pub trait ResultPresenter<T: Scalar>: Send + Sync {
    /// Present the two operands before multiplication.
    fn present_operands(&self, a: &Matrix<T>, b: &Matrix<T>);

    /// Present a product.
    fn present_result(&self, algorithm: &str, result: &Matrix<T>, duration: Duration);

    /// Present a comparison of all runs.
    fn present_comparison(&self, results: &[MultiplicationResult<T>]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult<T: Scalar> {
    /// Algorithm name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix<T>, MatMulError>,
    /// Computation duration.
    pub duration: Duration,
}

impl<T: Scalar> MultiplicationResult<T> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl<T: Scalar> ResultPresenter<T> for NullPresenter {
    fn present_operands(&self, _a: &Matrix<T>, _b: &Matrix<T>) {}
    fn present_result(&self, _algorithm: &str, _result: &Matrix<T>, _duration: Duration) {}
    fn present_comparison(&self, _results: &[MultiplicationResult<T>]) {}
    fn present_error(&self, _error: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmul_core::bigint::BigInt;

    #[test]
    fn null_presenter() {
        let presenter = NullPresenter;
        let m: Matrix = Matrix::zeroed(1, 1).unwrap();
        ResultPresenter::<BigInt>::present_operands(&presenter, &m, &m);
        ResultPresenter::<BigInt>::present_error(&presenter, "ignored");
    }

    #[test]
    fn multiplication_result() {
        let result: MultiplicationResult<i64> = MultiplicationResult {
            algorithm: "Naive".into(),
            outcome: Matrix::from_rows(&[vec![19, 22], vec![43, 50]]),
            duration: Duration::from_millis(3),
        };
        assert_eq!(result.algorithm, "Naive");
        assert!(result.is_ok());
    }
}
