//! Scalar backends the matrix algorithms are generic over.
//!
//! `BigInt` is the exact backend. `i64` is the fixed-width backend used to
//! cross-check small cases; it uses checked arithmetic and treats leaving the
//! symmetric range `[-i64::MAX, i64::MAX]` as [`MatMulError::Overflow`], so
//! negation is always total.

use std::fmt;

use crate::bigint::BigInt;
use crate::error::MatMulError;

/// Narrow arithmetic interface used by the multiplication algorithms.
pub trait Scalar: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Backend name, as accepted by `--backend`.
    const BACKEND: &'static str;

    /// Additive identity.
    fn zero() -> Self;

    /// Convert from a machine integer.
    fn from_i64(n: i64) -> Result<Self, MatMulError>;

    /// Parse a decimal literal.
    fn parse(s: &str) -> Result<Self, MatMulError>;

    /// Convert back to a machine integer if the value fits.
    fn to_i64(&self) -> Option<i64>;

    fn try_add(&self, rhs: &Self) -> Result<Self, MatMulError>;

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatMulError>;

    /// Flip the sign in place; zero stays zero.
    fn negate(&mut self);

    fn is_zero(&self) -> bool;

    /// `self - rhs` as negate-then-add on a copy of `rhs`.
    fn try_sub(&self, rhs: &Self) -> Result<Self, MatMulError> {
        let mut negated = rhs.clone();
        negated.negate();
        self.try_add(&negated)
    }
}

impl Scalar for BigInt {
    const BACKEND: &'static str = "bigint";

    fn zero() -> Self {
        BigInt::zero()
    }

    fn from_i64(n: i64) -> Result<Self, MatMulError> {
        Ok(BigInt::from_i64(n))
    }

    fn parse(s: &str) -> Result<Self, MatMulError> {
        s.parse()
    }

    fn to_i64(&self) -> Option<i64> {
        BigInt::to_i64(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, MatMulError> {
        self.add(rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatMulError> {
        self.multiply(rhs)
    }

    fn negate(&mut self) {
        BigInt::negate(self);
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

/// Reject `None` and `i64::MIN` alike.
fn in_native_range(value: Option<i64>, op: &'static str) -> Result<i64, MatMulError> {
    match value {
        Some(v) if v != i64::MIN => Ok(v),
        _ => Err(MatMulError::Overflow { op }),
    }
}

impl Scalar for i64 {
    const BACKEND: &'static str = "native";

    fn zero() -> Self {
        0
    }

    fn from_i64(n: i64) -> Result<Self, MatMulError> {
        in_native_range(Some(n), "from_i64")
    }

    fn parse(s: &str) -> Result<Self, MatMulError> {
        let value = s
            .parse::<i64>()
            .map_err(|e| MatMulError::Parse(format!("invalid integer literal {s:?}: {e}")))?;
        in_native_range(Some(value), "parse")
    }

    fn to_i64(&self) -> Option<i64> {
        Some(*self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, MatMulError> {
        in_native_range(self.checked_add(*rhs), "add")
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatMulError> {
        in_native_range(self.checked_mul(*rhs), "multiply")
    }

    fn negate(&mut self) {
        *self = -*self;
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}
