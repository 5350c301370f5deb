use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};
use tracing::debug;

use crate::Params;
use crate::codec::{self, Accumulator, Decoded};
use crate::pow10::pow10_32;

const MAX_PRECISION: u8 = <u32 as Accumulator>::MAX_PRECISION;

/// Decodes decimal text into an `i32` scaled by `10^scale`.
///
/// `precision` may not exceed 9, the widest digit count every value of which
/// fits an `i32`.
///
/// ```rust
/// use fixconv::{DecimalError, decode32};
///
/// assert_eq!(decode32(9, 5, b"-3015.07654"), Ok(-301_507_654));
/// assert_eq!(
///     decode32(9, 6, b"1234.12"),
///     Err(DecimalError::IntegralOverflow { position: 4, limit: 3 })
/// );
/// ```
pub fn decode32(precision: u8, scale: u8, input: &[u8]) -> crate::Result<i32> {
    Params::with_max(precision, scale, MAX_PRECISION)
        .and_then(|params| codec::decode::<u32>(params, input))
        .map(|Decoded { magnitude, negative }| {
            let value = magnitude as i32;
            if negative { value.wrapping_neg() } else { value }
        })
        .inspect_err(|err| debug!(width = 32, precision, scale, %err, "decimal decode failed"))
}

/// Renders an `i32` scaled by `10^scale` as canonical decimal text.
#[cfg(feature = "alloc")]
pub fn encode32(scale: u8, value: i32) -> String {
    Encoded32::new(scale, value).to_string()
}

/// Canonical decimal text of a raw `i32`, rendered on demand without
/// allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded32 {
    scale: u8,
    value: i32,
}

impl Encoded32 {
    #[inline(always)]
    pub const fn new(scale: u8, value: i32) -> Self {
        Self { scale, value }
    }
}

impl fmt::Display for Encoded32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::encode(f, self.value < 0, self.value.unsigned_abs(), self.scale)
    }
}

/// `|value| < 10^precision`.
fn fits32(value: i32, precision: u8) -> bool {
    pow10_32(usize::from(precision)).is_none_or(|limit| value.unsigned_abs() < limit)
}

fixed_type!(
    /// 32-bit fixed-point decimal with `P` significant digits, `S` of them
    /// after the point.
    ///
    /// ```rust
    /// use fixconv::Fixed32;
    ///
    /// type Percent = Fixed32<5, 2>;
    ///
    /// let p: Percent = "12.50".parse().unwrap();
    /// assert_eq!(p.to_raw(), 1250);
    /// assert_eq!(p.to_string(), "12.5");
    /// ```
    Fixed32, i32, MAX_PRECISION, decode32, Encoded32, fits32
);


#[cfg(test)]
mod fixed_tests {
    use std::format;
    use std::string::ToString;

    use super::*;
    use crate::DecimalError;

    type Percent = Fixed32<5, 2>;

    #[test]
    fn test_from_str() {
        let p: Percent = "12.50".parse().unwrap();
        assert_eq!(p.to_raw(), 1250);
        assert_eq!(Percent::from_utf8_bytes(b"-0.01").unwrap().to_raw(), -1);
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            Percent::from_str_exact("1234"),
            Err(DecimalError::IntegralOverflow {
                position: 4,
                limit: 3
            })
        );
        assert!(Percent::from_str_exact(" 1").is_err());
    }

    #[test]
    fn test_display_and_debug() {
        let p = Percent::from_raw(-1250);
        assert_eq!(p.to_string(), "-12.5");
        assert_eq!(format!("{p:?}"), "Fixed32(-12.5)");
        assert_eq!(format!("{p:#?}"), "Fixed32 {\n    value: -1250,\n}");
    }

    #[test]
    fn test_constants() {
        assert_eq!(Percent::PRECISION, 5);
        assert_eq!(Percent::SCALE, 2);
        assert!(Percent::ZERO.is_zero());
        assert!(Percent::from_raw(-1).is_negative());
        assert_eq!(Percent::params(), Params::new(5, 2).unwrap());
    }

    #[test]
    fn test_try_from_raw_checks_precision() {
        assert_eq!(Percent::try_from_raw(-99_999), Ok(Percent::from_raw(-99_999)));
        assert_eq!(
            Percent::try_from_raw(100_000),
            Err(DecimalError::IntegralOverflow {
                position: 4,
                limit: 3
            })
        );
        assert!(Percent::try_from_raw(i32::MIN).is_err());
    }

    #[test]
    fn test_ordering_follows_raw() {
        let a = Percent::from_str_exact("1.5").unwrap();
        let b = Percent::from_str_exact("1.49").unwrap();
        assert!(a > b);
    }
}


#[cfg(all(test, feature = "alloc"))]
mod property_tests {
    use std::format;
    use std::string::String;

    use proptest::prelude::*;

    use super::*;

    /// Puts `zeros` leading zeros after the sign.
    fn pad_leading(text: &str, zeros: usize) -> String {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text),
        };
        format!("{sign}{}{digits}", "0".repeat(zeros))
    }

    proptest! {
        #[test]
        fn prop_roundtrip(value in -999_999_999i32..=999_999_999, scale in 0u8..=9) {
            let text = encode32(scale, value);
            prop_assert_eq!(decode32(9, scale, text.as_bytes()), Ok(value));
        }

        #[test]
        fn prop_leading_zeros_ignored(
            value in -999_999_999i32..=999_999_999,
            scale in 0u8..=9,
            zeros in 0usize..12,
        ) {
            let text = pad_leading(&encode32(scale, value), zeros);
            prop_assert_eq!(decode32(9, scale, text.as_bytes()), Ok(value));
        }

        #[test]
        fn prop_trailing_zeros_ignored(
            value in -999_999_999i32..=999_999_999,
            scale in 0u8..=9,
            zeros in 1usize..20,
        ) {
            let mut text = encode32(scale, value);
            if !text.contains('.') {
                text.push('.');
            }
            text.push_str(&"0".repeat(zeros));
            prop_assert_eq!(decode32(9, scale, text.as_bytes()), Ok(value));
        }
    }
}
