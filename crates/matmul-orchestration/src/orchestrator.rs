//! Core orchestration: sequential execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use matmul_core::error::MatMulError;
use matmul_core::matrix::Matrix;
use matmul_core::multiplier::Multiplier;
use matmul_core::scalar::Scalar;

use crate::interfaces::MultiplicationResult;

/// Multiply `a * b` with every given multiplier, one after another.
pub fn execute_multiplications<T: Scalar>(
    multipliers: &[Arc<dyn Multiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Vec<MultiplicationResult<T>> {
    multipliers
        .iter()
        .map(|multiplier| {
            let start = Instant::now();
            let outcome = multiplier.multiply(a, b);
            let duration = start.elapsed();
            if let Err(e) = &outcome {
                debug!(algorithm = multiplier.name(), error = %e, "multiplication failed");
            }
            MultiplicationResult {
                algorithm: multiplier.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Failed runs are ignored; every successful product must equal the first.
pub fn analyze_comparison_results<T: Scalar>(
    results: &[MultiplicationResult<T>],
) -> Result<(), MatMulError> {
    let mut products = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = products.next() else {
        return Err(MatMulError::Config("no valid results".into()));
    };

    // Compare all results to the first valid one
    if products.any(|product| product != first) {
        return Err(MatMulError::Mismatch);
    }

    Ok(())
}
