//! Machine-readable run reports.

use serde::{Deserialize, Serialize};

use matmul_core::matrix::Matrix;
use matmul_core::scalar::Scalar;
use matmul_orchestration::interfaces::MultiplicationResult;

/// One algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: String,
    pub ok: bool,
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of a whole invocation, serialised with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub backend: String,
    pub left: [usize; 2],
    pub right: [usize; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub runs: Vec<RunReport>,
    /// `true` when every successful run produced the same product.
    pub consistent: bool,
    /// Product of the first successful run, cells as decimal strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Vec<Vec<String>>>,
}

impl Report {
    /// Build a report from orchestration results.
    #[must_use]
    pub fn from_results<T: Scalar>(
        a: &Matrix<T>,
        b: &Matrix<T>,
        seed: Option<u64>,
        results: &[MultiplicationResult<T>],
    ) -> Self {
        let runs = results
            .iter()
            .map(|r| RunReport {
                algorithm: r.algorithm.clone(),
                ok: r.is_ok(),
                duration_us: u64::try_from(r.duration.as_micros()).unwrap_or(u64::MAX),
                error: r.outcome.as_ref().err().map(ToString::to_string),
            })
            .collect();

        let mut products = results.iter().filter_map(|r| r.outcome.as_ref().ok());
        let first = products.next();
        let consistent = first.is_some_and(|p| products.all(|q| q == p));

        Self {
            backend: T::BACKEND.to_string(),
            left: [a.rows(), a.cols()],
            right: [b.rows(), b.cols()],
            seed,
            runs,
            consistent,
            product: first.map(rows_as_strings),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn rows_as_strings<T: Scalar>(matrix: &Matrix<T>) -> Vec<Vec<String>> {
    matrix
        .iter_rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}
