//! Dense rectangular matrices of scalars.
//!
//! Cells are stored row-major in one owned vector of exactly `rows * cols`
//! entries. Storage is reserved fallibly so an oversized request surfaces as
//! [`MatMulError::AllocationFailure`] instead of aborting.

use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::bigint::BigInt;
use crate::error::MatMulError;
use crate::scalar::Scalar;

/// Dense `rows x cols` matrix. Defaults to exact `BigInt` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = BigInt> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Reserve room for `rows * cols` cells.
fn reserve_cells<T>(rows: usize, cols: usize) -> Result<Vec<T>, MatMulError> {
    let cells = rows
        .checked_mul(cols)
        .ok_or(MatMulError::AllocationFailure { cells: usize::MAX })?;
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(cells)
        .map_err(|_| MatMulError::AllocationFailure { cells })?;
    Ok(storage)
}

/// Fail unless `a * b` is defined.
pub(crate) fn check_multiply_shapes<T>(
    op: &'static str,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(), MatMulError> {
    if a.cols != b.rows {
        return Err(MatMulError::dimensions(op, a.dims(), b.dims()));
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// `rows x cols` matrix of zeros.
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self, MatMulError> {
        let mut cells = reserve_cells(rows, cols)?;
        cells.resize_with(rows * cols, T::zero);
        Ok(Self { rows, cols, cells })
    }

    /// `rows x cols` matrix with cells drawn uniformly from `[0, max_value)`.
    pub fn random_filled<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        max_value: i64,
        rng: &mut R,
    ) -> Result<Self, MatMulError> {
        if max_value <= 0 {
            return Err(MatMulError::Config(format!(
                "max value must be positive, got {max_value}"
            )));
        }
        let mut cells = reserve_cells(rows, cols)?;
        for _ in 0..rows * cols {
            cells.push(T::from_i64(rng.random_range(0..max_value))?);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build from nested rows of machine integers.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, MatMulError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = reserve_cells(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatMulError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            for &value in row {
                cells.push(T::from_i64(value)?);
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parse the rendered form: rows separated by newlines or `;`, cells by
    /// whitespace or `,`. Blank rows are skipped.
    pub fn parse(text: &str) -> Result<Self, MatMulError> {
        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::new();
        for line in text.split(['\n', ';']) {
            let row: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty())
                .collect();
            if row.is_empty() {
                continue;
            }
            if rows == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(MatMulError::RaggedRows {
                    row: rows,
                    expected: cols,
                    found: row.len(),
                });
            }
            for literal in row {
                cells.push(T::parse(literal)?);
            }
            rows += 1;
        }
        Ok(Self { rows, cols, cells })
    }

    /// Cell-wise sum. Both operands must have identical dimensions.
    pub fn add(&self, other: &Self) -> Result<Self, MatMulError> {
        self.zip_with("add", other, T::try_add)
    }

    /// Cell-wise difference, each cell computed as negate-then-add.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatMulError> {
        self.zip_with("subtract", other, T::try_sub)
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &Self,
        f: impl Fn(&T, &T) -> Result<T, MatMulError>,
    ) -> Result<Self, MatMulError> {
        if self.dims() != other.dims() {
            return Err(MatMulError::dimensions(op, self.dims(), other.dims()));
        }
        let mut cells = reserve_cells(self.rows, self.cols)?;
        for (a, b) in self.cells.iter().zip(&other.cells) {
            cells.push(f(a, b)?);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Copy into the top-left corner of a `dim x dim` zero matrix.
    pub fn padded(&self, dim: usize) -> Result<Self, MatMulError> {
        if dim < self.rows || dim < self.cols {
            return Err(MatMulError::dimensions("pad", self.dims(), (dim, dim)));
        }
        let mut out = Self::zeroed(dim, dim)?;
        for (i, row) in self.iter_rows().enumerate() {
            out.row_mut(i)[..self.cols].clone_from_slice(row);
        }
        Ok(out)
    }

    /// Copy of the top-left `rows x cols` block.
    pub fn top_left(&self, rows: usize, cols: usize) -> Result<Self, MatMulError> {
        self.block(0, 0, rows, cols)
    }

    /// Copy of the `rows x cols` block starting at `(row0, col0)`.
    pub fn block(
        &self,
        row0: usize,
        col0: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, MatMulError> {
        let (row_end, col_end) = match (row0.checked_add(rows), col0.checked_add(cols)) {
            (Some(r), Some(c)) if r <= self.rows && c <= self.cols => (r, c),
            _ => {
                return Err(MatMulError::dimensions(
                    "block",
                    self.dims(),
                    (row0.saturating_add(rows), col0.saturating_add(cols)),
                ))
            }
        };
        let mut cells = reserve_cells(rows, cols)?;
        for i in row0..row_end {
            cells.extend_from_slice(&self.row(i)[col0..col_end]);
        }
        Ok(Self { rows, cols, cells })
    }

    /// Split a square matrix of even dimension into its four quadrants.
    pub fn split_quadrants(&self) -> Result<Quadrants<T>, MatMulError> {
        if !self.is_square() || self.rows % 2 != 0 {
            return Err(MatMulError::dimensions("split", self.dims(), self.dims()));
        }
        let n = self.rows / 2;
        Ok(Quadrants {
            q11: self.block(0, 0, n, n)?,
            q12: self.block(0, n, n, n)?,
            q21: self.block(n, 0, n, n)?,
            q22: self.block(n, n, n, n)?,
        })
    }

    /// Assemble four equally sized square quadrants into one matrix.
    pub fn from_quadrants(q: &Quadrants<T>) -> Result<Self, MatMulError> {
        let n = q.q11.rows;
        for part in [&q.q11, &q.q12, &q.q21, &q.q22] {
            if part.dims() != (n, n) {
                return Err(MatMulError::dimensions("assemble", (n, n), part.dims()));
            }
        }
        let mut cells = reserve_cells(2 * n, 2 * n)?;
        for (left, right) in [(&q.q11, &q.q12), (&q.q21, &q.q22)] {
            for i in 0..n {
                cells.extend_from_slice(left.row(i));
                cells.extend_from_slice(right.row(i));
            }
        }
        Ok(Self {
            rows: 2 * n,
            cols: 2 * n,
            cells,
        })
    }

    /// Re-express every cell in another backend.
    pub fn convert<U: Scalar>(&self) -> Result<Matrix<U>, MatMulError> {
        let mut cells = reserve_cells(self.rows, self.cols)?;
        for cell in &self.cells {
            let value = cell
                .to_i64()
                .ok_or(MatMulError::Overflow { op: "convert" })?;
            cells.push(U::from_i64(value)?);
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }
}

impl<T> Matrix<T> {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// `true` when either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Replace the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatMulError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatMulError::dimensions(
                "set",
                self.dims(),
                (row.saturating_add(1), col.saturating_add(1)),
            ));
        }
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Cells of row `i`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl Matrix<BigInt> {
    /// Attach a digit ceiling to every cell.
    pub fn with_digit_capacity(self, capacity: usize) -> Result<Self, MatMulError> {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.with_capacity(capacity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

/// One row per line, cells separated by a tab.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// The four `n x n` quadrants of a `2n x 2n` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T = BigInt> {
    pub q11: Matrix<T>,
    pub q12: Matrix<T>,
    pub q21: Matrix<T>,
    pub q22: Matrix<T>,
}
