//! Strassen multiplication.
//!
//! Rectangular operands are zero-padded into the top-left corner of a square
//! whose dimension is the next power of two of the largest input dimension.
//! Each level splits both squares into quadrants and combines seven
//! sub-products instead of eight. Every quadrant and temporary belongs to the
//! frame that built it and is dropped when that frame returns. The padded
//! product is stripped back to `a.rows x b.cols`.

use tracing::{debug, trace};

use crate::constants::DEFAULT_STRASSEN_CUTOFF;
use crate::error::MatMulError;
use crate::matrix::{check_multiply_shapes, Matrix, Quadrants};
use crate::multiplier::CoreMultiplier;
use crate::naive;
use crate::scalar::Scalar;

/// Strassen product with the pure base case (dimension 1).
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
    multiply_with_cutoff(a, b, DEFAULT_STRASSEN_CUTOFF)
}

/// Strassen product that hands blocks of dimension `<= cutoff` to the naive
/// kernel. A cutoff of 0 is treated as 1.
pub fn multiply_with_cutoff<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cutoff: usize,
) -> Result<Matrix<T>, MatMulError> {
    check_multiply_shapes("strassen multiply", a, b)?;
    if a.is_empty() || b.is_empty() {
        return Matrix::zeroed(a.rows(), b.cols());
    }

    let orig_dim = a.rows().max(a.cols()).max(b.cols());
    let dim = padded_dimension(orig_dim)?;
    debug!(
        left = ?a.dims(),
        right = ?b.dims(),
        padded = dim,
        cutoff,
        "strassen padding"
    );

    let product = strassen_square(&a.padded(dim)?, &b.padded(dim)?, cutoff.max(1))?;
    product.top_left(a.rows(), b.cols())
}

/// Smallest power of two `>= n`.
fn padded_dimension(n: usize) -> Result<usize, MatMulError> {
    n.checked_next_power_of_two()
        .ok_or(MatMulError::AllocationFailure { cells: usize::MAX })
}

/// Recursive kernel over two `n x n` squares, `n` a power of two.
fn strassen_square<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    cutoff: usize,
) -> Result<Matrix<T>, MatMulError> {
    let n = a.rows();
    if n == 1 {
        let mut out = Matrix::zeroed(1, 1)?;
        out[(0, 0)] = a[(0, 0)].try_mul(&b[(0, 0)])?;
        return Ok(out);
    }
    if n <= cutoff {
        return naive::multiply(a, b);
    }
    trace!(dim = n, "strassen level");

    let Quadrants {
        q11: a11,
        q12: a12,
        q21: a21,
        q22: a22,
    } = a.split_quadrants()?;
    let Quadrants {
        q11: b11,
        q12: b12,
        q21: b21,
        q22: b22,
    } = b.split_quadrants()?;

    let x1 = strassen_square(&a11.add(&a22)?, &b11.add(&b22)?, cutoff)?;
    let x2 = strassen_square(&a21.add(&a22)?, &b11, cutoff)?;
    let x3 = strassen_square(&a11, &b12.subtract(&b22)?, cutoff)?;
    let x4 = strassen_square(&a22, &b21.subtract(&b11)?, cutoff)?;
    let x5 = strassen_square(&a11.add(&a12)?, &b22, cutoff)?;
    let x6 = strassen_square(&a21.subtract(&a11)?, &b11.add(&b12)?, cutoff)?;
    let x7 = strassen_square(&a12.subtract(&a22)?, &b21.add(&b22)?, cutoff)?;

    Matrix::from_quadrants(&Quadrants {
        q11: x1.add(&x4)?.subtract(&x5)?.add(&x7)?,
        q12: x3.add(&x5)?,
        q21: x2.add(&x4)?,
        q22: x1.add(&x3)?.subtract(&x2)?.add(&x6)?,
    })
}

/// Strassen multiplication as a registry entry.
pub struct StrassenMultiplier {
    cutoff: usize,
}

impl StrassenMultiplier {
    /// Pure Strassen, recursing down to single cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cutoff: DEFAULT_STRASSEN_CUTOFF,
        }
    }

    /// Fall back to the naive kernel for blocks of dimension `<= cutoff`.
    #[must_use]
    pub fn with_cutoff(cutoff: usize) -> Self {
        Self {
            cutoff: cutoff.max(1),
        }
    }

    #[must_use]
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> CoreMultiplier<T> for StrassenMultiplier {
    fn multiply_core(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatMulError> {
        multiply_with_cutoff(a, b, self.cutoff)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
