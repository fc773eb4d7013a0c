//! CLI result presenter.

use std::fmt::Write as _;
use std::time::Duration;

use matmul_core::matrix::Matrix;
use matmul_core::scalar::Scalar;
use matmul_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_dims, format_duration, format_matrix};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Operand block, as printed before any product.
    #[must_use]
    pub fn render_operands<T: Scalar>(&self, a: &Matrix<T>, b: &Matrix<T>) -> String {
        format!(
            "A ({}):\n{}\n\nB ({}):\n{}\n",
            format_dims(a.rows(), a.cols()),
            format_matrix(a, self.verbose),
            format_dims(b.rows(), b.cols()),
            format_matrix(b, self.verbose),
        )
    }

    /// Result block for one algorithm. Quiet mode keeps only the matrix.
    #[must_use]
    pub fn render_result<T: Scalar>(
        &self,
        algorithm: &str,
        result: &Matrix<T>,
        duration: Duration,
    ) -> String {
        if self.quiet {
            return result.to_string();
        }
        format!(
            "Algorithm: {algorithm}\nBackend: {}\nShape: {}\nDuration: {}\n{}\n",
            T::BACKEND,
            format_dims(result.rows(), result.cols()),
            format_duration(duration),
            format_matrix(result, self.verbose),
        )
    }

    /// Comparison table, one line per run.
    #[must_use]
    pub fn render_comparison<T: Scalar>(&self, results: &[MultiplicationResult<T>]) -> String {
        let mut out = format!("Comparison Results:\n{:-<60}\n", "");
        for result in results {
            let status = if result.is_ok() { "OK" } else { "ERROR" };
            let _ = writeln!(
                out,
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
        out
    }
}

impl<T: Scalar> ResultPresenter<T> for CLIResultPresenter {
    fn present_operands(&self, a: &Matrix<T>, b: &Matrix<T>) {
        if self.quiet {
            return;
        }
        println!("{}", self.render_operands(a, b));
    }

    fn present_result(&self, algorithm: &str, result: &Matrix<T>, duration: Duration) {
        println!("{}", self.render_result(algorithm, result, duration));
    }

    fn present_comparison(&self, results: &[MultiplicationResult<T>]) {
        if self.quiet {
            return;
        }
        print!("{}", self.render_comparison(results));
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmul_core::bigint::BigInt;
    use matmul_core::error::MatMulError;

    fn product() -> Matrix {
        Matrix::from_rows(&[vec![19, 22], vec![43, 50]]).unwrap()
    }

    #[test]
    fn quiet_result_is_bare_matrix() {
        let presenter = CLIResultPresenter::new(false, true);
        let s = presenter.render_result("Naive", &product(), Duration::from_millis(5));
        assert_eq!(s, "19\t22\n43\t50");
    }

    #[test]
    fn normal_result_has_header() {
        let presenter = CLIResultPresenter::new(false, false);
        let s = presenter.render_result("Strassen", &product(), Duration::from_millis(5));
        assert!(s.starts_with("Algorithm: Strassen\nBackend: bigint\nShape: 2x2\n"));
        assert!(s.contains("Duration: 5.00ms"));
        assert!(s.ends_with("19\t22\n43\t50\n"));
    }

    #[test]
    fn native_backend_is_named() {
        let presenter = CLIResultPresenter::new(false, false);
        let m: Matrix<i64> = Matrix::from_rows(&[vec![1]]).unwrap();
        let s = presenter.render_result("Naive", &m, Duration::ZERO);
        assert!(s.contains("Backend: native"));
    }

    #[test]
    fn operands_block() {
        let presenter = CLIResultPresenter::new(false, false);
        let a: Matrix = Matrix::from_rows(&[vec![1, 2, 3]]).unwrap();
        let b: Matrix = Matrix::from_rows(&[vec![4], vec![5], vec![6]]).unwrap();
        let s = presenter.render_operands(&a, &b);
        assert_eq!(s, "A (1x3):\n1\t2\t3\n\nB (3x1):\n4\n5\n6\n");
    }

    #[test]
    fn comparison_table() {
        let presenter = CLIResultPresenter::new(false, false);
        let results: Vec<MultiplicationResult<BigInt>> = vec![
            MultiplicationResult {
                algorithm: "Naive".into(),
                outcome: Ok(product()),
                duration: Duration::from_millis(5),
            },
            MultiplicationResult {
                algorithm: "Winograd".into(),
                outcome: Err(MatMulError::CapacityExceeded {
                    required: 5,
                    capacity: 4,
                }),
                duration: Duration::from_millis(1),
            },
        ];
        let s = presenter.render_comparison(&results);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Naive") && lines[2].ends_with("[OK]"));
        assert!(lines[3].contains("Winograd") && lines[3].ends_with("[ERROR]"));
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CLIResultPresenter::new(true, false);
        let p = product();
        ResultPresenter::<BigInt>::present_operands(&presenter, &p, &p);
        ResultPresenter::<BigInt>::present_result(&presenter, "Naive", &p, Duration::ZERO);
        ResultPresenter::<BigInt>::present_comparison(&presenter, &[]);
        ResultPresenter::<BigInt>::present_error(&presenter, "test error message");
    }
}
