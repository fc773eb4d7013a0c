//! Winograd multiplication.
//!
//! Pairs of shared-dimension products are precomputed per row of `a` and per
//! column of `b`, which halves the multiplications in the inner loop:
//!
//! ```text
//! (a[i][2t] + b[2t+1][j]) * (a[i][2t+1] + b[2t][j])
//!     = a[i][2t]*b[2t][j] + a[i][2t+1]*b[2t+1][j] + a[i][2t]*a[i][2t+1] + b[2t][j]*b[2t+1][j]
//! ```
//!
//! The two cross terms are cancelled by seeding each cell with the negated
//! row and column factors. Factors are negated in place for the cell and
//! flipped back afterwards, so they always end with their original sign.

use tracing::debug;

use crate::error::MatMulError;
use crate::matrix::{check_multiply_shapes, Matrix};
use crate::multiplier::CoreMultiplier;
use crate::scalar::Scalar;

/// Per-row and per-column pair sums.
#[derive(Debug, Clone, PartialEq)]
pub struct WinogradFactors<T> {
    /// `row[i] = Σ_t a[i][2t] * a[i][2t+1]`.
    pub row: Vec<T>,
    /// `col[j] = Σ_t b[2t][j] * b[2t+1][j]`.
    pub col: Vec<T>,
}

impl<T: Scalar> WinogradFactors<T> {
    /// Compute the factors for `a * b`.
    pub fn precompute(a: &Matrix<T>, b: &Matrix<T>) -> Result<Self, MatMulError> {
        check_multiply_shapes("winograd multiply", a, b)?;
        let pairs = a.cols() / 2;

        let mut row = Vec::with_capacity(a.rows());
        for i in 0..a.rows() {
            let mut sum = T::zero();
            for t in 0..pairs {
                sum = sum.try_add(&a[(i, 2 * t)].try_mul(&a[(i, 2 * t + 1)])?)?;
            }
            row.push(sum);
        }

        let mut col = Vec::with_capacity(b.cols());
        for j in 0..b.cols() {
            let mut sum = T::zero();
            for t in 0..pairs {
                sum = sum.try_add(&b[(2 * t, j)].try_mul(&b[(2 * t + 1, j)])?)?;
            }
            col.push(sum);
        }

        debug!(rows = row.len(), cols = col.len(), pairs, "winograd factors");
        Ok(Self { row, col })
    }
}

/// Winograd product with freshly computed factors.
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
    let mut factors = WinogradFactors::precompute(a, b)?;
    multiply_with_factors(a, b, &mut factors)
}

/// Winograd product using caller-supplied factors.
///
/// The factors are borrowed mutably only to flip their sign around each cell;
/// on return, successful or not, they hold their original values.
pub fn multiply_with_factors<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    factors: &mut WinogradFactors<T>,
) -> Result<Matrix<T>, MatMulError> {
    check_multiply_shapes("winograd multiply", a, b)?;
    if factors.row.len() != a.rows() || factors.col.len() != b.cols() {
        return Err(MatMulError::dimensions(
            "winograd factors",
            (a.rows(), b.cols()),
            (factors.row.len(), factors.col.len()),
        ));
    }

    let shared = a.cols();
    let pairs = shared / 2;
    let mut result = Matrix::zeroed(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            factors.row[i].negate();
            factors.col[j].negate();
            let cell = pair_sum(a, b, i, j, pairs, &factors.row[i], &factors.col[j]);
            factors.row[i].negate();
            factors.col[j].negate();
            result[(i, j)] = cell?;
        }
    }

    if shared % 2 == 1 {
        let last = shared - 1;
        for i in 0..a.rows() {
            for j in 0..b.cols() {
                let term = a[(i, last)].try_mul(&b[(last, j)])?;
                result[(i, j)] = result[(i, j)].try_add(&term)?;
            }
        }
    }

    Ok(result)
}

/// One cell before the odd-dimension correction, seeded with the already
/// negated factors.
fn pair_sum<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    i: usize,
    j: usize,
    pairs: usize,
    neg_row: &T,
    neg_col: &T,
) -> Result<T, MatMulError> {
    let mut sum = neg_row.try_add(neg_col)?;
    for t in 0..pairs {
        let left = a[(i, 2 * t)].try_add(&b[(2 * t + 1, j)])?;
        let right = a[(i, 2 * t + 1)].try_add(&b[(2 * t, j)])?;
        sum = sum.try_add(&left.try_mul(&right)?)?;
    }
    Ok(sum)
}

/// Winograd multiplication as a registry entry.
pub struct WinogradMultiplier;

impl WinogradMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for WinogradMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> CoreMultiplier<T> for WinogradMultiplier {
    fn multiply_core(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
        multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Winograd"
    }
}
