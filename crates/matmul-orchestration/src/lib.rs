//! # matmul-orchestration
//!
//! Multiplier selection, sequential execution, and result analysis.

pub mod interfaces;
pub mod multiplier_selection;
pub mod orchestrator;

pub use interfaces::{MultiplicationResult, NullPresenter, ResultPresenter};
pub use multiplier_selection::get_multipliers_to_run;
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
