//! Multiplier factory and registry.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatMulError;
use crate::multiplier::{CoreMultiplier, MatrixMultiplier, Multiplier};
use crate::naive::NaiveMultiplier;
use crate::options::Options;
use crate::scalar::Scalar;
use crate::strassen::StrassenMultiplier;
use crate::winograd::WinogradMultiplier;

/// Names accepted by [`DefaultFactory`], in execution order.
pub const MULTIPLIER_NAMES: [&str; 3] = ["naive", "strassen", "winograd"];

/// Factory trait for creating multipliers.
pub trait MultiplierFactory<T: Scalar>: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatMulError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory<T: Scalar> {
    cache: RwLock<HashMap<String, Arc<dyn Multiplier<T>>>>,
    strassen_cutoff: usize,
    _scalar: PhantomData<fn() -> T>,
}

impl<T: Scalar> DefaultFactory<T> {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create a factory whose multipliers honour `opts`.
    #[must_use]
    pub fn with_options(opts: &Options) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            strassen_cutoff: opts.clone().normalize().strassen_cutoff,
            _scalar: PhantomData,
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatMulError> {
        match name {
            "naive" => Ok(Self::wrap(Arc::new(NaiveMultiplier::new()))),
            "strassen" => Ok(Self::wrap(Arc::new(StrassenMultiplier::with_cutoff(
                self.strassen_cutoff,
            )))),
            "winograd" => Ok(Self::wrap(Arc::new(WinogradMultiplier::new()))),
            _ => Err(MatMulError::Config(format!("unknown algorithm: {name}"))),
        }
    }

    fn wrap(core: Arc<dyn CoreMultiplier<T>>) -> Arc<dyn Multiplier<T>> {
        Arc::new(MatrixMultiplier::new(core))
    }
}

impl<T: Scalar> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> MultiplierFactory<T> for DefaultFactory<T> {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatMulError> {
        // Check cache first
        if let Some(multiplier) = self.cache.read().get(name) {
            return Ok(Arc::clone(multiplier));
        }

        // Create and cache
        let multiplier = self.create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&multiplier));
        Ok(multiplier)
    }

    fn available(&self) -> Vec<&str> {
        MULTIPLIER_NAMES.to_vec()
    }
}
