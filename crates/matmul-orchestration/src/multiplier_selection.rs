//! Multiplier selection logic.

use std::sync::Arc;

use matmul_core::error::MatMulError;
use matmul_core::multiplier::Multiplier;
use matmul_core::registry::MultiplierFactory;
use matmul_core::scalar::Scalar;

/// Get multipliers to run based on algorithm selection.
pub fn get_multipliers_to_run<T: Scalar>(
    algo: &str,
    factory: &dyn MultiplierFactory<T>,
) -> Result<Vec<Arc<dyn Multiplier<T>>>, MatMulError> {
    match algo {
        "all" => {
            let names = factory.available();
            let mut multipliers = Vec::new();
            for name in names {
                multipliers.push(factory.get(name)?);
            }
            Ok(multipliers)
        }
        name => {
            let multiplier = factory.get(name)?;
            Ok(vec![multiplier])
        }
    }
}
