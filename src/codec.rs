//! Width-independent decoder and encoder.
//!
//! Both directions work on unsigned magnitudes. The width front-ends own the
//! sign: they negate the decoded magnitude and split signed values back into
//! `(negative, magnitude)` before encoding.

use core::fmt::{self, Write};
use core::num::NonZeroU64;

use crate::pow10::{pow10_32, pow10_64, pow10_128};
use crate::{DecimalError, DoubleWidth, Params};

/// Unsigned word the decoder accumulates digits into.
///
/// Multiplication and addition wrap; the decoder's precision checks keep
/// every intermediate inside the width.
pub(crate) trait Accumulator: Copy {
    const ZERO: Self;
    const TEN: Self;

    /// Largest precision whose every value fits the signed width.
    const MAX_PRECISION: u8;

    /// `10^exp` from the width's power table.
    fn pow10(exp: usize) -> Option<Self>;

    fn from_digit(digit: u8) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn is_zero(self) -> bool;

    /// `(self / divisor, self % divisor)`. Divisors come from the power
    /// table and are never zero.
    fn div_rem(self, divisor: Self) -> (Self, Self);

    /// Splits off the least significant decimal digit.
    fn div_rem_ten(self) -> (Self, u8);
}

macro_rules! native_accumulator {
    ($t:ty, $pow:path, $max:expr) => {
        impl Accumulator for $t {
            const ZERO: Self = 0;
            const TEN: Self = 10;
            const MAX_PRECISION: u8 = $max;

            #[inline(always)]
            fn pow10(exp: usize) -> Option<Self> {
                $pow(exp)
            }

            #[inline(always)]
            fn from_digit(digit: u8) -> Self {
                Self::from(digit)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline(always)]
            fn div_rem(self, divisor: Self) -> (Self, Self) {
                (self / divisor, self % divisor)
            }

            #[inline(always)]
            fn div_rem_ten(self) -> (Self, u8) {
                (self / 10, (self % 10) as u8)
            }
        }
    };
}

native_accumulator!(u32, pow10_32, 9);
native_accumulator!(u64, pow10_64, 18);

const TEN_WORD: NonZeroU64 = match NonZeroU64::new(10) {
    Some(ten) => ten,
    None => unreachable!(),
};

impl Accumulator for DoubleWidth {
    const ZERO: Self = DoubleWidth::ZERO;
    const TEN: Self = DoubleWidth::from_u64(10);
    const MAX_PRECISION: u8 = 38;

    #[inline(always)]
    fn pow10(exp: usize) -> Option<Self> {
        pow10_128(exp)
    }

    #[inline(always)]
    fn from_digit(digit: u8) -> Self {
        DoubleWidth::from_u64(u64::from(digit))
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self.mul(rhs)
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.add(rhs)
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        DoubleWidth::is_zero(self)
    }

    #[inline]
    fn div_rem(self, divisor: Self) -> (Self, Self) {
        self.checked_div_rem(divisor).unwrap_or((Self::ZERO, self))
    }

    #[inline]
    fn div_rem_ten(self) -> (Self, u8) {
        let (q, r) = self.div_rem_small(TEN_WORD);
        (q, r as u8)
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decoded magnitude and sign, before the front-end applies the sign.
pub(crate) struct Decoded<A> {
    pub magnitude: A,
    pub negative: bool,
}

#[inline(always)]
fn digit(byte: u8) -> Option<u8> {
    let d = byte.wrapping_sub(b'0');
    (d <= 9).then_some(d)
}

fn power<A: Accumulator>(exp: usize, params: Params) -> crate::Result<A> {
    A::pow10(exp).ok_or(DecimalError::InvalidParams {
        precision: params.precision(),
        scale: params.scale(),
        max: A::MAX_PRECISION,
    })
}

/// Parses `['-'] digit* ['.' digit*]` into `magnitude * 10^scale`.
pub(crate) fn decode<A: Accumulator>(params: Params, input: &[u8]) -> crate::Result<Decoded<A>> {
    let params = params.check(A::MAX_PRECISION)?;

    let (negative, start) = match input.first() {
        None => return Err(DecimalError::EmptyInput),
        Some(b'-') => (true, 1),
        Some(_) => (false, 0),
    };

    let integral_limit = usize::from(params.integral_digits());
    let scale = usize::from(params.scale());

    // Integral part. Leading zeros are skipped without counting.
    let mut integral = A::ZERO;
    let mut integral_count = 0;
    let mut fraction_start = input.len();
    let mut leading = true;

    for (offset, &byte) in input.iter().enumerate().skip(start) {
        if leading && byte == b'0' {
            continue;
        }
        if byte == b'.' {
            fraction_start = offset + 1;
            break;
        }

        let d = digit(byte).ok_or(DecimalError::InvalidCharacter { byte, offset })?;
        leading = false;

        integral_count += 1;
        if integral_count > integral_limit {
            return Err(DecimalError::IntegralOverflow {
                position: integral_count,
                limit: integral_limit,
            });
        }

        integral = integral.wrapping_mul(A::TEN).wrapping_add(A::from_digit(d));
    }

    // Fraction part. Zeros are deferred: `meaningful` counts the pending
    // zeros plus the digit that would end them, and only a non-zero digit
    // charges them against the scale budget. Trailing zeros are free.
    let mut frac = A::ZERO;
    let mut scale_count = 0;
    let mut meaningful = 1;

    for (offset, &byte) in input.iter().enumerate().skip(fraction_start) {
        let d = digit(byte).ok_or(DecimalError::InvalidCharacter { byte, offset })?;
        if d == 0 {
            meaningful += 1;
            continue;
        }

        let position = scale_count + meaningful;
        if position > scale {
            return Err(DecimalError::FractionOverflow {
                position,
                limit: scale,
            });
        }

        frac = frac
            .wrapping_mul(power(meaningful, params)?)
            .wrapping_add(A::from_digit(d));
        scale_count = position;
        meaningful = 1;
    }

    // Right-pad the fraction so its last parsed digit lands on the scale.
    let magnitude = integral
        .wrapping_mul(power(scale, params)?)
        .wrapping_add(frac.wrapping_mul(power(scale - scale_count, params)?));

    Ok(Decoded {
        magnitude,
        negative,
    })
}

// ============================================================================
// Encoding
// ============================================================================

/// Enough for the 39 digits of `u128::MAX`.
const DIGITS_MAX: usize = 39;

/// Writes `value` in decimal, left-padded with zeros to `width` digits.
fn write_padded<A: Accumulator, W: Write>(out: &mut W, value: A, width: usize) -> fmt::Result {
    let mut buffer = [0u8; DIGITS_MAX];
    let mut pos = DIGITS_MAX;
    let mut n = value;

    loop {
        let (q, d) = n.div_rem_ten();
        pos -= 1;
        buffer[pos] = b'0' + d;
        n = q;
        if n.is_zero() {
            break;
        }
    }

    for _ in (DIGITS_MAX - pos)..width {
        out.write_char('0')?;
    }
    for &byte in &buffer[pos..] {
        out.write_char(char::from(byte))?;
    }
    Ok(())
}

/// Writes the canonical text of `magnitude / 10^scale`.
///
/// Zero never carries a sign. When `10^scale` exceeds the width the whole
/// magnitude is fraction.
pub(crate) fn encode<A: Accumulator, W: Write>(
    out: &mut W,
    negative: bool,
    magnitude: A,
    scale: u8,
) -> fmt::Result {
    let scale = usize::from(scale);
    let (integral, fraction) = match A::pow10(scale) {
        Some(divisor) => magnitude.div_rem(divisor),
        None => (A::ZERO, magnitude),
    };

    if negative && !magnitude.is_zero() {
        out.write_char('-')?;
    }
    write_padded(out, integral, 1)?;

    if scale == 0 || fraction.is_zero() {
        return Ok(());
    }

    // Strip trailing zeros; the fraction is non-zero so this terminates.
    let mut fraction = fraction;
    let mut width = scale;
    loop {
        let (q, d) = fraction.div_rem_ten();
        if d != 0 {
            break;
        }
        fraction = q;
        width -= 1;
    }

    out.write_char('.')?;
    write_padded(out, fraction, width)
}
