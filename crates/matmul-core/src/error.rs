//! Error type shared by the arithmetic kernel and the multiplication algorithms.

/// Error type for big-integer arithmetic and matrix multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatMulError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A big integer would need more digits than its ceiling allows.
    #[error("capacity exceeded: {required} digits required, ceiling is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Cell storage could not be reserved.
    #[error("allocation failure: could not reserve {cells} cells")]
    AllocationFailure { cells: usize },

    /// The native backend left its representable range.
    #[error("native integer overflow in {op}")]
    Overflow { op: &'static str },

    /// Row-wise input is not rectangular.
    #[error("ragged rows: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Malformed scalar or matrix text.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

impl MatMulError {
    /// Shorthand for a [`MatMulError::DimensionMismatch`].
    pub(crate) fn dimensions(
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch { op, left, right }
    }
}
