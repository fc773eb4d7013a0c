//! Error handling and exit codes.

use matmul_core::constants::exit_codes;
use matmul_core::error::MatMulError;

/// Map a library error to the process exit code.
#[must_use]
pub fn handle_error(err: &MatMulError) -> i32 {
    match err {
        MatMulError::DimensionMismatch { .. } => exit_codes::ERROR_DIMENSION,
        MatMulError::CapacityExceeded { .. } | MatMulError::Overflow { .. } => {
            exit_codes::ERROR_CAPACITY
        }
        MatMulError::Config(_) | MatMulError::Parse(_) | MatMulError::RaggedRows { .. } => {
            exit_codes::ERROR_CONFIG
        }
        MatMulError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatMulError::AllocationFailure { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MatMulError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&MatMulError::Mismatch), 3);
        assert_eq!(handle_error(&MatMulError::Config("bad".into())), 4);
        assert_eq!(
            handle_error(&MatMulError::DimensionMismatch {
                op: "multiply",
                left: (2, 3),
                right: (4, 2)
            }),
            5
        );
        assert_eq!(
            handle_error(&MatMulError::CapacityExceeded {
                required: 101,
                capacity: 100
            }),
            6
        );
        assert_eq!(handle_error(&MatMulError::Overflow { op: "add" }), 6);
        assert_eq!(handle_error(&MatMulError::AllocationFailure { cells: 1 }), 1);
    }

    #[test]
    fn anyhow_errors() {
        let err = anyhow::Error::from(MatMulError::Mismatch);
        assert_eq!(exit_code(&err), 3);
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), 1);
    }
}
