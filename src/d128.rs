use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};
use tracing::debug;

use crate::codec::{self, Accumulator, Decoded};
use crate::pow10::pow10_128;
use crate::{DoubleWidth, Params};

const MAX_PRECISION: u8 = <DoubleWidth as Accumulator>::MAX_PRECISION;

/// Decodes decimal text into an `i128` scaled by `10^scale`.
///
/// Digits are accumulated in [`DoubleWidth`] arithmetic; `precision` may not
/// exceed 38.
///
/// ```rust
/// use fixconv::decode128;
///
/// let raw = decode128(38, 2, b"295147905179352825855.25").unwrap();
/// assert_eq!(raw, 29_514_790_517_935_282_585_525);
/// ```
pub fn decode128(precision: u8, scale: u8, input: &[u8]) -> crate::Result<i128> {
    decode128_words(precision, scale, input).map(DoubleWidth::to_i128)
}

/// Like [`decode128`], returning the two's-complement result as two words.
pub fn decode128_words(precision: u8, scale: u8, input: &[u8]) -> crate::Result<DoubleWidth> {
    Params::with_max(precision, scale, MAX_PRECISION)
        .and_then(|params| codec::decode::<DoubleWidth>(params, input))
        .map(|Decoded { magnitude, negative }| {
            if negative {
                magnitude.negate()
            } else {
                magnitude
            }
        })
        .inspect_err(|err| debug!(width = 128, precision, scale, %err, "decimal decode failed"))
}

/// Renders an `i128` scaled by `10^scale` as canonical decimal text.
#[cfg(feature = "alloc")]
pub fn encode128(scale: u8, value: i128) -> String {
    Encoded128::new(scale, value).to_string()
}

/// Renders a two's-complement [`DoubleWidth`] scaled by `10^scale`.
#[cfg(feature = "alloc")]
pub fn encode128_words(scale: u8, value: DoubleWidth) -> String {
    Encoded128::from_words(scale, value).to_string()
}

/// Canonical decimal text of a raw 128-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded128 {
    scale: u8,
    value: DoubleWidth,
}

impl Encoded128 {
    #[inline(always)]
    pub const fn new(scale: u8, value: i128) -> Self {
        Self::from_words(scale, DoubleWidth::from_i128(value))
    }

    /// `value` is read as two's complement.
    #[inline(always)]
    pub const fn from_words(scale: u8, value: DoubleWidth) -> Self {
        Self { scale, value }
    }
}

impl fmt::Display for Encoded128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.value.is_negative();
        let magnitude = if negative {
            self.value.negate()
        } else {
            self.value
        };
        codec::encode(f, negative, magnitude, self.scale)
    }
}

/// `|value| < 10^precision`.
fn fits128(value: i128, precision: u8) -> bool {
    pow10_128(usize::from(precision)).is_none_or(|limit| DoubleWidth::from_u128(value.unsigned_abs()) < limit)
}

fixed_type!(
    /// 128-bit fixed-point decimal with `P` significant digits, `S` of them
    /// after the point.
    ///
    /// ```rust
    /// use fixconv::Fixed128;
    ///
    /// type Wei = Fixed128<38, 18>;
    ///
    /// let eth = Wei::from_str_exact("2500.123456789012").unwrap();
    /// assert_eq!(eth.to_raw(), 2_500_123_456_789_012_000_000);
    /// ```
    Fixed128, i128, MAX_PRECISION, decode128, Encoded128, fits128
);


#[cfg(test)]
mod fixed_tests {
    use std::string::ToString;

    use super::*;

    type Wei = Fixed128<38, 18>;

    #[test]
    fn test_from_str() {
        let eth = Wei::from_str_exact("2500.123456789012").unwrap();
        assert_eq!(eth.to_raw(), 2_500_123_456_789_012_000_000);
        assert_eq!(eth.to_string(), "2500.123456789012");

        let wei = Wei::from_str_exact("0.000000000000000001").unwrap();
        assert_eq!(wei.to_raw(), 1);
    }

    #[test]
    fn test_from_str_errors() {
        assert!(Wei::from_str_exact("0.0000000000000000001").is_err());
        assert!(Wei::from_str_exact("1e5").is_err());
        assert!(Wei::from_str_exact("").is_err());
    }

    #[test]
    fn test_try_from_raw_checks_precision() {
        let max = 10i128.pow(38) - 1;
        assert_eq!(Wei::try_from_raw(-max), Ok(Wei::from_raw(-max)));
        assert_eq!(
            Wei::try_from_raw(max + 1),
            Err(crate::DecimalError::IntegralOverflow {
                position: 21,
                limit: 20
            })
        );
        assert!(Wei::try_from_raw(i128::MAX).is_err());
    }
}
