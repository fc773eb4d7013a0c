//! Multiplication options and configuration.

use crate::constants::{DEFAULT_MAX_VALUE, DEFAULT_STRASSEN_CUTOFF};

/// Options for operand generation and multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Digit ceiling attached to every `BigInt` cell (`None` = unbounded).
    pub digit_capacity: Option<usize>,
    /// Exclusive upper bound for randomly filled cells.
    pub max_value: i64,
    /// Block dimension at or below which Strassen hands off to the naive kernel.
    pub strassen_cutoff: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            digit_capacity: None,
            max_value: DEFAULT_MAX_VALUE,
            strassen_cutoff: DEFAULT_STRASSEN_CUTOFF,
        }
    }
}

impl Options {
    /// Normalize options: a zero ceiling means unbounded, a zero cutoff the default.
    ///
    /// `max_value` is left as given; non-positive bounds are rejected when
    /// operands are generated.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.digit_capacity == Some(0) {
            self.digit_capacity = None;
        }
        if self.strassen_cutoff == 0 {
            self.strassen_cutoff = DEFAULT_STRASSEN_CUTOFF;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.digit_capacity, None);
        assert_eq!(opts.max_value, DEFAULT_MAX_VALUE);
        assert_eq!(opts.strassen_cutoff, DEFAULT_STRASSEN_CUTOFF);
    }

    #[test]
    fn normalize_zero_values() {
        let opts = Options {
            digit_capacity: Some(0),
            max_value: DEFAULT_MAX_VALUE,
            strassen_cutoff: 0,
        };
        assert_eq!(opts.normalize(), Options::default());
    }

    #[test]
    fn normalize_keeps_zero_max_value() {
        let opts = Options {
            max_value: 0,
            ..Options::default()
        };
        assert_eq!(opts.normalize().max_value, 0);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = Options {
            digit_capacity: Some(100),
            max_value: 7,
            strassen_cutoff: 16,
        };
        assert_eq!(opts.clone().normalize(), opts);
    }
}
