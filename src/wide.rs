use core::cmp::Ordering;
use core::fmt;
use core::num::NonZeroU64;

/// Unsigned 128-bit integer held as two 64-bit words: `hi * 2^64 + lo`.
///
/// Every operation wraps modulo 2^128 and never panics. Callers are
/// responsible for knowing that results fit, which the power table and the
/// precision checks in the decoder guarantee.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct DoubleWidth {
    lo: u64,
    hi: u64,
}

// ============================================================================
// Constants and Raw Access
// ============================================================================

impl DoubleWidth {
    /// Zero
    pub const ZERO: Self = Self { lo: 0, hi: 0 };

    /// One
    pub const ONE: Self = Self { lo: 1, hi: 0 };

    /// 2^128 - 1
    pub const MAX: Self = Self {
        lo: u64::MAX,
        hi: u64::MAX,
    };

    /// Builds a value from its low and high words.
    #[inline(always)]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self { lo: value, hi: 0 }
    }

    /// The low 64 bits.
    #[inline(always)]
    pub const fn lo(self) -> u64 {
        self.lo
    }

    /// The high 64 bits.
    #[inline(always)]
    pub const fn hi(self) -> u64 {
        self.hi
    }

    #[inline(always)]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            lo: value as u64,
            hi: (value >> 64) as u64,
        }
    }

    #[inline(always)]
    pub const fn to_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Reinterprets a two's-complement `i128` bit for bit.
    #[inline(always)]
    pub const fn from_i128(value: i128) -> Self {
        Self::from_u128(value as u128)
    }

    /// Reinterprets the bits as a two's-complement `i128`.
    #[inline(always)]
    pub const fn to_i128(self) -> i128 {
        self.to_u128() as i128
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    /// True when the top bit is set, i.e. the value is negative when read as
    /// two's complement.
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        (self.hi as i64) < 0
    }

    const fn equals(self, other: Self) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }

    const fn less_than(self, other: Self) -> bool {
        self.hi < other.hi || (self.hi == other.hi && self.lo < other.lo)
    }

    const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            self.hi.leading_zeros()
        } else {
            64 + self.lo.leading_zeros()
        }
    }
}

// ============================================================================
// Multiplication and Addition
// ============================================================================

impl DoubleWidth {
    /// Multiplies by a single-word constant, keeping the low 128 bits.
    #[inline]
    pub const fn mul_small(self, k: u64) -> Self {
        let low = self.lo as u128 * k as u128;
        let high = self.hi.wrapping_mul(k);

        Self {
            lo: low as u64,
            hi: ((low >> 64) as u64).wrapping_add(high),
        }
    }

    /// Full double-width multiplication, keeping the low 128 bits of the
    /// product.
    #[inline]
    pub const fn mul(self, rhs: Self) -> Self {
        let p0 = self.lo as u128 * rhs.lo as u128;

        // hi * hi lands entirely above bit 128
        let cross = self
            .lo
            .wrapping_mul(rhs.hi)
            .wrapping_add(self.hi.wrapping_mul(rhs.lo));

        Self {
            lo: p0 as u64,
            hi: ((p0 >> 64) as u64).wrapping_add(cross),
        }
    }

    /// Addition with carry from the low word into the high word.
    #[inline]
    pub const fn add(self, rhs: Self) -> Self {
        let (lo, carry) = self.lo.overflowing_add(rhs.lo);
        let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u64);

        Self { lo, hi }
    }

    /// Subtraction with borrow from the high word.
    #[inline]
    pub const fn sub(self, rhs: Self) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(rhs.lo);
        let hi = self.hi.wrapping_sub(rhs.hi).wrapping_sub(borrow as u64);

        Self { lo, hi }
    }

    /// Two's-complement negation: `!self + 1`.
    #[inline]
    pub const fn negate(self) -> Self {
        let (lo, carry) = (!self.lo).overflowing_add(1);
        let hi = (!self.hi).wrapping_add(carry as u64);

        Self { lo, hi }
    }

    const fn shl(self, bits: u32) -> Self {
        match bits {
            0 => self,
            1..=63 => Self {
                lo: self.lo << bits,
                hi: (self.hi << bits) | (self.lo >> (64 - bits)),
            },
            64..=127 => Self {
                lo: 0,
                hi: self.lo << (bits - 64),
            },
            _ => Self::ZERO,
        }
    }

    const fn shr(self, bits: u32) -> Self {
        match bits {
            0 => self,
            1..=63 => Self {
                lo: (self.lo >> bits) | (self.hi << (64 - bits)),
                hi: self.hi >> bits,
            },
            64..=127 => Self {
                lo: self.hi >> (bits - 64),
                hi: 0,
            },
            _ => Self::ZERO,
        }
    }
}

// ============================================================================
// Division
// ============================================================================

impl DoubleWidth {
    /// Divides by a single word, returning quotient and remainder.
    #[inline]
    pub const fn div_rem_small(self, divisor: NonZeroU64) -> (Self, u64) {
        self.div_rem_word(divisor.get())
    }

    /// Word division. `divisor` must not be zero.
    pub(crate) const fn div_rem_word(self, divisor: u64) -> (Self, u64) {
        let d = divisor as u128;

        let q_hi = self.hi / divisor;
        let r_hi = self.hi % divisor;

        let dividend = ((r_hi as u128) << 64) | self.lo as u128;
        let q_lo = (dividend / d) as u64;
        let r_lo = (dividend % d) as u64;

        (Self { lo: q_lo, hi: q_hi }, r_lo)
    }

    /// Exact double-width division, returning quotient and remainder.
    ///
    /// Returns `None` if `divisor` is zero.
    pub const fn checked_div_rem(self, divisor: Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if self.less_than(divisor) {
            return Some((Self::ZERO, self));
        }
        if divisor.hi == 0 {
            let (q, r) = self.div_rem_word(divisor.lo);
            return Some((q, Self::from_u64(r)));
        }

        // Binary long division: align the divisor's top bit with ours, then
        // subtract it back down one bit at a time.
        let shift = divisor.leading_zeros() - self.leading_zeros();
        let mut d = divisor.shl(shift);
        let mut rem = self;
        let mut quot = Self::ZERO;

        let mut i = 0;
        while i <= shift {
            quot = quot.shl(1);
            if !rem.less_than(d) {
                rem = rem.sub(d);
                quot.lo |= 1;
            }
            d = d.shr(1);
            i += 1;
        }

        Some((quot, rem))
    }

    /// True when `self * 10` fits in 128 bits.
    pub(crate) const fn times_ten_fits(self) -> bool {
        let (back, _) = self.mul_small(10).div_rem_word(10);
        back.equals(self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for DoubleWidth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DoubleWidth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl From<u64> for DoubleWidth {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for DoubleWidth {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<DoubleWidth> for u128 {
    fn from(value: DoubleWidth) -> Self {
        value.to_u128()
    }
}

impl fmt::Debug for DoubleWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleWidth")
            .field("lo", &self.lo)
            .field("hi", &self.hi)
            .finish()
    }
}
