//! Signed arbitrary-precision decimal integers.
//!
//! Magnitudes are stored as base-10 digits, least significant first, with no
//! superfluous most-significant zeros: zero is exactly `[0]` and is never
//! negative. A value may carry a digit ceiling; arithmetic that would need
//! more digits fails with [`MatMulError::CapacityExceeded`] instead of growing.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::constants::DECIMAL_BASE;
use crate::error::MatMulError;

/// Arbitrary-precision signed decimal integer.
#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
    capacity: Option<usize>,
}

impl BigInt {
    /// Non-negative zero without a digit ceiling.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: vec![0],
            capacity: None,
        }
    }

    /// Decimal expansion of `n`, without a digit ceiling.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_i64(n: i64) -> Self {
        let base = u64::from(DECIMAL_BASE);
        let mut magnitude = n.unsigned_abs();
        let mut digits = Vec::with_capacity(20);
        while magnitude > 0 {
            digits.push((magnitude % base) as u8);
            magnitude /= base;
        }
        if digits.is_empty() {
            digits.push(0);
        }
        Self {
            negative: n < 0,
            digits,
            capacity: None,
        }
    }

    /// Decimal expansion of `n` bounded by a ceiling of `capacity` digits.
    pub fn from_i64_bounded(n: i64, capacity: usize) -> Result<Self, MatMulError> {
        Self::from_i64(n).with_capacity(capacity)
    }

    /// Attach a digit ceiling, failing if the current value already exceeds it.
    pub fn with_capacity(mut self, capacity: usize) -> Result<Self, MatMulError> {
        check_capacity(self.digits.len(), Some(capacity))?;
        self.capacity = Some(capacity);
        Ok(self)
    }

    /// The digit ceiling, if any.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Index of the most significant digit (0 for zero).
    #[must_use]
    pub fn highest_index(&self) -> usize {
        self.digits.len() - 1
    }

    /// Magnitude digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Sum of `self` and `rhs`.
    ///
    /// Equal signs add magnitudes with carry propagation. Opposite signs
    /// subtract the smaller magnitude from the larger one and take the sign
    /// of the larger; equal magnitudes cancel to non-negative zero.
    pub fn add(&self, rhs: &Self) -> Result<Self, MatMulError> {
        let capacity = combined_capacity(self.capacity, rhs.capacity);
        if self.negative == rhs.negative {
            return Self::from_parts(
                self.negative,
                add_magnitudes(&self.digits, &rhs.digits),
                capacity,
            );
        }
        match compare_magnitudes(&self.digits, &rhs.digits) {
            Ordering::Equal => Self::from_parts(false, vec![0], capacity),
            Ordering::Greater => Self::from_parts(
                self.negative,
                sub_magnitudes(&self.digits, &rhs.digits),
                capacity,
            ),
            Ordering::Less => Self::from_parts(
                rhs.negative,
                sub_magnitudes(&rhs.digits, &self.digits),
                capacity,
            ),
        }
    }

    /// Difference `self - rhs`, computed as `self + (-rhs)`.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, MatMulError> {
        let mut negated = rhs.clone();
        negated.negate();
        self.add(&negated)
    }

    /// Product of `self` and `rhs` (schoolbook digit pairs).
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MatMulError> {
        let capacity = combined_capacity(self.capacity, rhs.capacity);
        if self.is_zero() || rhs.is_zero() {
            return Self::from_parts(false, vec![0], capacity);
        }
        Self::from_parts(
            self.negative != rhs.negative,
            mul_magnitudes(&self.digits, &rhs.digits),
            capacity,
        )
    }

    /// Multiply by `10^places`.
    pub fn shift_decimal(&self, places: usize) -> Result<Self, MatMulError> {
        if self.is_zero() || places == 0 {
            return Ok(self.clone());
        }
        let mut digits = vec![0; places];
        digits.extend_from_slice(&self.digits);
        Self::from_parts(self.negative, digits, self.capacity)
    }

    /// Flip the sign in place. Zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Compare absolute values: digit count first, then digits from the most
    /// significant downward.
    #[must_use]
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        compare_magnitudes(&self.digits, &other.digits)
    }

    /// Convert back to `i64` if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let base = u64::from(DECIMAL_BASE);
        let mut magnitude: u64 = 0;
        for &d in self.digits.iter().rev() {
            magnitude = magnitude.checked_mul(base)?.checked_add(u64::from(d))?;
        }
        if !self.negative {
            return i64::try_from(magnitude).ok();
        }
        if magnitude == i64::MIN.unsigned_abs() {
            return Some(i64::MIN);
        }
        i64::try_from(magnitude).ok().map(|m| -m)
    }

    fn from_parts(
        negative: bool,
        mut digits: Vec<u8>,
        capacity: Option<usize>,
    ) -> Result<Self, MatMulError> {
        trim(&mut digits);
        check_capacity(digits.len(), capacity)?;
        let negative = negative && digits != [0];
        Ok(Self {
            negative,
            digits,
            capacity,
        })
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.digits == other.digits
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_magnitude(other),
            (true, true) => other.compare_magnitude(self),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            s.push('-');
        }
        s.extend(self.digits.iter().rev().map(|&d| char::from(b'0' + d)));
        f.pad(&s)
    }
}

impl FromStr for BigInt {
    type Err = MatMulError;

    /// Parse `[+-]?[0-9]+`. Leading zeros are trimmed and `-0` is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MatMulError::Parse(format!("invalid integer literal {s:?}")));
        }
        let digits = body.bytes().rev().map(|b| b - b'0').collect();
        Self::from_parts(negative, digits, None)
    }
}

/// The larger ceiling wins; an unbounded operand does not lift a bound.
fn combined_capacity(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) | (None, x) => x,
    }
}

fn check_capacity(required: usize, capacity: Option<usize>) -> Result<(), MatMulError> {
    match capacity {
        Some(capacity) if required > capacity => {
            Err(MatMulError::CapacityExceeded { required, capacity })
        }
        _ => Ok(()),
    }
}

/// Drop most-significant zeros, keeping a single digit for zero.
fn trim(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

fn compare_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(sum % DECIMAL_BASE);
        carry = sum / DECIMAL_BASE;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// `minuend - subtrahend` for `|minuend| >= |subtrahend|`.
///
/// The borrow is cleared whenever a column resolves without borrowing.
fn sub_magnitudes(minuend: &[u8], subtrahend: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(minuend.len());
    let mut borrow = 0u8;
    for (i, &m) in minuend.iter().enumerate() {
        let s = subtrahend.get(i).copied().unwrap_or(0) + borrow;
        if m >= s {
            out.push(m - s);
            borrow = 0;
        } else {
            out.push(m + DECIMAL_BASE - s);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "minuend smaller than subtrahend");
    out
}

#[allow(clippy::cast_possible_truncation)]
fn mul_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let base = u64::from(DECIMAL_BASE);
    let mut columns = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            columns[i + j] += u64::from(x) * u64::from(y);
        }
    }
    let mut out = Vec::with_capacity(columns.len());
    let mut carry = 0u64;
    for column in columns {
        let value = column + carry;
        out.push((value % base) as u8);
        carry = value / base;
    }
    debug_assert_eq!(carry, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from_i64(n)
    }

    /// Repeated shifted addition: for each digit `d` of `b`, add `d` copies of
    /// `a * 10^i`. Used to confirm the schoolbook product matches it.
    fn multiply_by_shifted_addition(a: &BigInt, b: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        let mut shifted = a.clone();
        shifted.negative = false;
        for &d in b.digits() {
            for _ in 0..d {
                acc = acc.add(&shifted).unwrap();
            }
            shifted = shifted.shift_decimal(1).unwrap();
        }
        if a.is_negative() != b.is_negative() {
            acc.negate();
        }
        acc
    }

    #[test]
    fn from_i64_layout() {
        let n = big(1207);
        assert_eq!(n.digits(), &[7, 0, 2, 1]);
        assert_eq!(n.highest_index(), 3);
        assert!(!n.is_negative());

        let z = big(0);
        assert_eq!(z.digits(), &[0]);
        assert_eq!(z.highest_index(), 0);
        assert!(!z.is_negative());

        assert!(big(-5).is_negative());
    }

    #[test]
    fn from_i64_extremes() {
        assert_eq!(big(i64::MAX).to_string(), i64::MAX.to_string());
        assert_eq!(big(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(big(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(big(i64::MAX).to_i64(), Some(i64::MAX));
    }

    #[test]
    fn to_i64_out_of_range() {
        let too_big = big(i64::MAX).add(&big(1)).unwrap();
        assert_eq!(too_big.to_i64(), None);
        let too_small = big(i64::MIN).add(&big(-1)).unwrap();
        assert_eq!(too_small.to_i64(), None);
    }

    #[test]
    fn scenario_negative_plus_positive() {
        let sum = big(-1500).add(&big(100)).unwrap();
        assert_eq!(sum, big(-1400));
        assert_eq!(sum.to_string(), "-1400");
    }

    #[test]
    fn scenario_negative_times_positive() {
        let product = big(-1_540_780).multiply(&big(265)).unwrap();
        assert_eq!(product, big(-408_306_700));
        assert_eq!(product.to_string(), "-408306700");
    }

    #[test]
    fn equal_magnitudes_cancel_to_positive_zero() {
        let sum = big(-42).add(&big(42)).unwrap();
        assert!(sum.is_zero());
        assert!(!sum.is_negative());
        assert_eq!(sum.to_string(), "0");

        let sum = big(42).add(&big(-42)).unwrap();
        assert!(!sum.is_negative());
    }

    #[test]
    fn borrow_chains_across_zero_digits() {
        assert_eq!(big(1000).add(&big(-1)).unwrap(), big(999));
        assert_eq!(big(-1000).add(&big(1)).unwrap(), big(-999));
        assert_eq!(big(10_001).subtract(&big(2)).unwrap(), big(9_999));
        assert_eq!(big(2_010).subtract(&big(1_911)).unwrap(), big(99));
    }

    #[test]
    fn add_and_subtract_exhaustive_small() {
        for x in -200i64..=200 {
            for y in -200i64..=200 {
                let (a, b) = (big(x), big(y));
                assert_eq!(a.add(&b).unwrap().to_i64(), Some(x + y), "{x} + {y}");
                assert_eq!(a.subtract(&b).unwrap().to_i64(), Some(x - y), "{x} - {y}");
            }
        }
    }

    #[test]
    fn multiply_exhaustive_small() {
        for x in -60i64..=60 {
            for y in -60i64..=60 {
                let product = big(x).multiply(&big(y)).unwrap();
                assert_eq!(product.to_i64(), Some(x * y), "{x} * {y}");
                assert_eq!(product.is_negative(), x * y < 0);
            }
        }
    }

    #[test]
    fn multiply_matches_shifted_addition() {
        let cases = [(0, 5), (7, 0), (12, 34), (-999, 101), (4_096, -3), (-77, -77)];
        for (x, y) in cases {
            let (a, b) = (big(x), big(y));
            assert_eq!(a.multiply(&b).unwrap(), multiply_by_shifted_addition(&a, &b));
        }
    }

    #[test]
    fn multiply_by_zero_is_positive_zero() {
        let product = big(-12_345).multiply(&big(0)).unwrap();
        assert!(product.is_zero());
        assert!(!product.is_negative());
        let product = big(0).multiply(&big(-1)).unwrap();
        assert!(!product.is_negative());
    }

    #[test]
    fn operations_commute() {
        let values = [big(-98_765), big(0), big(3), big(1_000_000_007), big(-1)];
        for a in &values {
            for b in &values {
                assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
                assert_eq!(a.multiply(b).unwrap(), b.multiply(a).unwrap());
            }
        }
    }

    #[test]
    fn large_product() {
        let a: BigInt = "123456789012345678901234567890".parse().unwrap();
        let b: BigInt = "-987654321098765432109876543210".parse().unwrap();
        let expected = "-121932631137021795226185032733622923332237463801111263526900";
        assert_eq!(a.multiply(&b).unwrap().to_string(), expected);
    }

    #[test]
    fn negate_zero_stays_positive() {
        let mut z = BigInt::zero();
        z.negate();
        assert!(!z.is_negative());
        assert_eq!(z.to_string(), "0");

        let mut n = big(9);
        n.negate();
        assert_eq!(n, big(-9));
        n.negate();
        assert_eq!(n, big(9));
        assert_eq!(-big(3), big(-3));
    }

    #[test]
    fn compare_magnitude_ignores_sign() {
        assert_eq!(big(-500).compare_magnitude(&big(499)), Ordering::Greater);
        assert_eq!(big(12).compare_magnitude(&big(-12)), Ordering::Equal);
        assert_eq!(big(19).compare_magnitude(&big(91)), Ordering::Less);
    }

    #[test]
    fn ordering_is_signed() {
        let mut values = vec![big(5), big(-100), big(0), big(-3), big(42)];
        values.sort();
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["-100", "-3", "0", "5", "42"]);
    }

    #[test]
    fn shift_decimal_multiplies_by_powers_of_ten() {
        assert_eq!(big(37).shift_decimal(3).unwrap(), big(37_000));
        assert_eq!(big(-4).shift_decimal(1).unwrap(), big(-40));
        assert_eq!(big(0).shift_decimal(5).unwrap(), big(0));
    }

    #[test]
    fn parse_and_render() {
        assert_eq!("0042".parse::<BigInt>().unwrap(), big(42));
        assert_eq!("-0".parse::<BigInt>().unwrap(), big(0));
        assert!(!"-0".parse::<BigInt>().unwrap().is_negative());
        assert_eq!("+17".parse::<BigInt>().unwrap(), big(17));
        assert!("".parse::<BigInt>().is_err());
        assert!("-".parse::<BigInt>().is_err());
        assert!("12a".parse::<BigInt>().is_err());
        assert_eq!(format!("{:>5}", big(-7)), "   -7");
    }

    #[test]
    fn capacity_bounds_results() {
        let a = BigInt::from_i64_bounded(999, 3).unwrap();
        let b = BigInt::from_i64_bounded(1, 3).unwrap();
        assert_eq!(
            a.add(&b),
            Err(MatMulError::CapacityExceeded {
                required: 4,
                capacity: 3
            })
        );
        assert_eq!(a.add(&big(-9)).unwrap(), big(990));
        assert!(a.multiply(&big(2)).is_err());
        assert!(a.shift_decimal(1).is_err());
    }

    #[test]
    fn capacity_rejects_oversized_construction() {
        assert!(BigInt::from_i64_bounded(12_345, 4).is_err());
        assert!(BigInt::from_i64_bounded(1_234, 4).is_ok());
    }

    #[test]
    fn capacity_propagates() {
        let bounded = BigInt::from_i64_bounded(5, 10).unwrap();
        let sum = bounded.add(&big(5)).unwrap();
        assert_eq!(sum.capacity(), Some(10));
        let wider = BigInt::from_i64_bounded(5, 20).unwrap();
        assert_eq!(bounded.multiply(&wider).unwrap().capacity(), Some(20));
        assert_eq!(big(1).add(&big(2)).unwrap().capacity(), None);
    }

    #[test]
    fn equality_ignores_capacity() {
        assert_eq!(BigInt::from_i64_bounded(7, 3).unwrap(), big(7));
    }
}
