//! Constants for matrix generation, digit ceilings, and exit codes.

/// Numeric base of `BigInt` digits.
pub const DECIMAL_BASE: u8 = 10;

/// Exclusive upper bound for randomly filled cells.
pub const DEFAULT_MAX_VALUE: i64 = 10_000;

/// Default edge length of demo matrices.
pub const DEFAULT_DIMENSION: usize = 10;

/// Block dimension at or below which Strassen stops recursing.
/// A cutoff of 1 runs the pure algorithm down to scalar products.
pub const DEFAULT_STRASSEN_CUTOFF: usize = 1;

/// Matrices with more cells than this are abbreviated in CLI output.
pub const DISPLAY_CELL_LIMIT: usize = 400;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Operand shapes are incompatible.
    pub const ERROR_DIMENSION: i32 = 5;
    /// A scalar exceeded its digit ceiling or native range.
    pub const ERROR_CAPACITY: i32 = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_DIMENSION,
            exit_codes::ERROR_CAPACITY,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn strassen_cutoff_is_pure_by_default() {
        assert_eq!(DEFAULT_STRASSEN_CUTOFF, 1);
    }
}
