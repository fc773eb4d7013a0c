//! Application entry point and dispatch.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use matmul_cli::output::write_to_file;
use matmul_cli::presenter::CLIResultPresenter;
use matmul_cli::report::Report;
use matmul_core::bigint::BigInt;
use matmul_core::error::MatMulError;
use matmul_core::matrix::Matrix;
use matmul_core::options::Options;
use matmul_core::registry::DefaultFactory;
use matmul_core::scalar::Scalar;
use matmul_orchestration::interfaces::{MultiplicationResult, ResultPresenter};
use matmul_orchestration::multiplier_selection::get_multipliers_to_run;
use matmul_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};

use crate::config::{AppConfig, Backend};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        matmul_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = config.options();
    match config.backend {
        Backend::Bigint => {
            let (mut a, mut b, seed) = build_operands::<BigInt>(config, &opts)?;
            if let Some(capacity) = opts.digit_capacity {
                a = a.with_digit_capacity(capacity)?;
                b = b.with_digit_capacity(capacity)?;
            }
            run_cli(config, &opts, &a, &b, seed)
        }
        Backend::Native => {
            if opts.digit_capacity.is_some() {
                return Err(MatMulError::Config(
                    "--digit-capacity requires the bigint backend".into(),
                )
                .into());
            }
            let (a, b, seed) = build_operands::<i64>(config, &opts)?;
            run_cli(config, &opts, &a, &b, seed)
        }
    }
}

/// Literal operands when given, otherwise seeded random ones.
fn build_operands<T: Scalar>(
    config: &AppConfig,
    opts: &Options,
) -> Result<(Matrix<T>, Matrix<T>, Option<u64>), MatMulError> {
    if let (Some(left), Some(right)) = (&config.left, &config.right) {
        return Ok((Matrix::parse(left)?, Matrix::parse(right)?, None));
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!(seed, rows = config.rows, shared = config.shared, cols = config.cols, "random operands");
    let mut rng = StdRng::seed_from_u64(seed);
    let a = Matrix::random_filled(config.rows, config.shared, opts.max_value, &mut rng)?;
    let b = Matrix::random_filled(config.shared, config.cols, opts.max_value, &mut rng)?;
    Ok((a, b, Some(seed)))
}

fn run_cli<T: Scalar>(
    config: &AppConfig,
    opts: &Options,
    a: &Matrix<T>,
    b: &Matrix<T>,
    seed: Option<u64>,
) -> Result<()> {
    let factory = DefaultFactory::<T>::with_options(opts);
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    let results = execute_multiplications(&multipliers, a, b);
    let first_failure = results.iter().find_map(|r| r.outcome.as_ref().err());

    // Nothing succeeded: surface the first failure as the exit status
    if !results.iter().any(MultiplicationResult::is_ok) {
        if let Some(err) = first_failure {
            return Err(err.clone().into());
        }
    }

    if config.json {
        println!("{}", Report::from_results(a, b, seed, &results).to_json()?);
    } else {
        present(config, a, b, &results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(product) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, product)?;
        }
    }

    if results.len() > 1 {
        analyze_comparison_results(&results)?;
    }

    // A partial failure still fails the run
    if let Some(err) = first_failure {
        return Err(err.clone().into());
    }
    Ok(())
}

fn present<T: Scalar>(
    config: &AppConfig,
    a: &Matrix<T>,
    b: &Matrix<T>,
    results: &[MultiplicationResult<T>],
) {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    if config.print_operands {
        ResultPresenter::<T>::present_operands(&presenter, a, b);
    }

    let mut printed = false;
    for result in results {
        match &result.outcome {
            // Quiet mode prints one product only
            Ok(product) if !(config.quiet && printed) => {
                presenter.present_result(&result.algorithm, product, result.duration);
                printed = true;
            }
            Ok(_) => {}
            Err(e) => ResultPresenter::<T>::present_error(
                &presenter,
                &format!("{}: {e}", result.algorithm),
            ),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(results);
    }
}
