//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use matmul_core::constants::{DEFAULT_DIMENSION, DEFAULT_MAX_VALUE};
use matmul_core::options::Options;

/// Scalar backend selected with `--backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Exact decimal big integers.
    Bigint,
    /// Checked 64-bit integers.
    Native,
}

/// Compare naive, Strassen and Winograd matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "matmul", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Rows of the left operand.
    #[arg(long, default_value_t = DEFAULT_DIMENSION, env = "MATMUL_ROWS")]
    pub rows: usize,

    /// Columns of the left operand and rows of the right operand.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub shared: usize,

    /// Columns of the right operand.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub cols: usize,

    /// Literal left operand, e.g. "1 2; 3 4". Requires --right.
    #[arg(long, requires = "right", allow_hyphen_values = true)]
    pub left: Option<String>,

    /// Literal right operand. Requires --left.
    #[arg(long, requires = "left", allow_hyphen_values = true)]
    pub right: Option<String>,

    /// Algorithm to use: naive, strassen, winograd, or all.
    #[arg(long, default_value = "all", env = "MATMUL_ALGO")]
    pub algo: String,

    /// Scalar backend.
    #[arg(long, value_enum, default_value_t = Backend::Bigint)]
    pub backend: Backend,

    /// Exclusive upper bound for random cells (must be positive).
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: i64,

    /// Seed for random operands.
    #[arg(long, env = "MATMUL_SEED")]
    pub seed: Option<u64>,

    /// Digit ceiling for every big integer (bigint backend only).
    #[arg(long)]
    pub digit_capacity: Option<usize>,

    /// Block dimension at or below which Strassen uses the naive kernel.
    #[arg(long, default_value = "0")]
    pub strassen_cutoff: usize,

    /// Print both operands before the products.
    #[arg(long)]
    pub print_operands: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output: full matrices and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON report instead of the text output.
    #[arg(long)]
    pub json: bool,

    /// Write the product to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Core options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            digit_capacity: self.digit_capacity,
            max_value: self.max_value,
            strassen_cutoff: self.strassen_cutoff,
        }
        .normalize()
    }
}
