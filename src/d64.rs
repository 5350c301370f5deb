use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};
use tracing::debug;

use crate::Params;
use crate::codec::{self, Accumulator, Decoded};
use crate::pow10::pow10_64;

const MAX_PRECISION: u8 = <u64 as Accumulator>::MAX_PRECISION;

/// Decodes decimal text into an `i64` scaled by `10^scale`.
///
/// `precision` may not exceed 18.
pub fn decode64(precision: u8, scale: u8, input: &[u8]) -> crate::Result<i64> {
    Params::with_max(precision, scale, MAX_PRECISION)
        .and_then(|params| codec::decode::<u64>(params, input))
        .map(|Decoded { magnitude, negative }| {
            let value = magnitude as i64;
            if negative { value.wrapping_neg() } else { value }
        })
        .inspect_err(|err| debug!(width = 64, precision, scale, %err, "decimal decode failed"))
}

/// Renders an `i64` scaled by `10^scale` as canonical decimal text.
#[cfg(feature = "alloc")]
pub fn encode64(scale: u8, value: i64) -> String {
    Encoded64::new(scale, value).to_string()
}

/// Canonical decimal text of a raw `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded64 {
    scale: u8,
    value: i64,
}

impl Encoded64 {
    #[inline(always)]
    pub const fn new(scale: u8, value: i64) -> Self {
        Self { scale, value }
    }
}

impl fmt::Display for Encoded64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::encode(f, self.value < 0, self.value.unsigned_abs(), self.scale)
    }
}

/// `|value| < 10^precision`.
fn fits64(value: i64, precision: u8) -> bool {
    pow10_64(usize::from(precision)).is_none_or(|limit| value.unsigned_abs() < limit)
}

fixed_type!(
    /// 64-bit fixed-point decimal with `P` significant digits, `S` of them
    /// after the point.
    ///
    /// ```rust
    /// use fixconv::Fixed64;
    ///
    /// type Price = Fixed64<18, 8>;
    ///
    /// let p = Price::from_str_exact("1234.56").unwrap();
    /// assert_eq!(p.to_raw(), 123_456_000_000);
    /// assert_eq!(p.to_string(), "1234.56");
    /// ```
    Fixed64, i64, MAX_PRECISION, decode64, Encoded64, fits64
);
