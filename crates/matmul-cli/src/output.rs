//! CLI output formatting.

use std::fmt::{Display, Write as _};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use matmul_core::constants::DISPLAY_CELL_LIMIT;
use matmul_core::matrix::Matrix;

/// Rows and columns shown when a matrix is abbreviated.
const PREVIEW_ROWS: usize = 4;
const PREVIEW_COLS: usize = 6;

/// Format a matrix for display, abbreviating large ones unless `verbose`.
#[must_use]
pub fn format_matrix<T: Display>(matrix: &Matrix<T>, verbose: bool) -> String {
    if verbose || matrix.cells().len() <= DISPLAY_CELL_LIMIT {
        return matrix.to_string();
    }

    let mut out = String::new();
    for row in matrix.iter_rows().take(PREVIEW_ROWS) {
        let shown: Vec<String> = row.iter().take(PREVIEW_COLS).map(ToString::to_string).collect();
        out.push_str(&shown.join("\t"));
        if row.len() > PREVIEW_COLS {
            out.push_str("\t...");
        }
        out.push('\n');
    }
    if matrix.rows() > PREVIEW_ROWS {
        out.push_str("...\n");
    }
    let _ = write!(
        out,
        "({}, {} cells)",
        format_dims(matrix.rows(), matrix.cols()),
        matrix.cells().len()
    );
    out
}

/// `rows x cols` as `RxC`.
#[must_use]
pub fn format_dims(rows: usize, cols: usize) -> String {
    format!("{rows}x{cols}")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write a matrix to a file in its rendered form, newline terminated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file<T: Display>(path: impl AsRef<Path>, matrix: &Matrix<T>) -> io::Result<()> {
    fs::write(path, format!("{matrix}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmul_core::bigint::BigInt;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert_eq!(s, "42.00ms");
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_small_matrix_in_full() {
        let m: Matrix = Matrix::from_rows(&[vec![19, 22], vec![43, 50]]).unwrap();
        assert_eq!(format_matrix(&m, false), "19\t22\n43\t50");
    }

    #[test]
    fn format_large_matrix_abbreviated() {
        let m: Matrix = Matrix::zeroed(30, 30).unwrap();
        let s = format_matrix(&m, false);
        assert!(s.ends_with("(30x30, 900 cells)"));
        assert_eq!(s.lines().count(), PREVIEW_ROWS + 2);
        assert!(s.lines().next().unwrap().ends_with("\t..."));

        let full = format_matrix(&m, true);
        assert_eq!(full.lines().count(), 30);
    }

    #[test]
    fn format_dims_value() {
        assert_eq!(format_dims(2, 3), "2x3");
    }

    #[test]
    fn write_matrix_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.tsv");
        let m: Matrix<BigInt> = Matrix::from_rows(&[vec![-1, 2]]).unwrap();
        write_to_file(&path, &m).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "-1\t2\n");
    }
}
