//! Powers of ten for each supported width.
//!
//! Each table holds `10^0, 10^1, ...` up to the largest power that still fits
//! the width as an unsigned integer. The tables are evaluated at compile time
//! and are immutable for the life of the process.

use crate::wide::DoubleWidth;

macro_rules! native_table {
    ($len_fn:ident, $build_fn:ident, $len:ident, $t:ty) => {
        const fn $len_fn() -> usize {
            let mut len = 1;
            let mut cur: $t = 1;
            while let Some(next) = cur.checked_mul(10) {
                cur = next;
                len += 1;
            }
            len
        }

        const fn $build_fn() -> [$t; $len] {
            let mut table = [0; $len];
            let mut cur: $t = 1;
            let mut i = 0;
            while i < $len {
                table[i] = cur;
                cur = cur.wrapping_mul(10);
                i += 1;
            }
            table
        }
    };
}

native_table!(pow32_len, build_pow32, POW32_LEN, u32);
native_table!(pow64_len, build_pow64, POW64_LEN, u64);

/// Number of entries in [`POW32`].
pub const POW32_LEN: usize = pow32_len();

/// Number of entries in [`POW64`].
pub const POW64_LEN: usize = pow64_len();

/// Number of entries in [`POW128`].
pub const POW128_LEN: usize = pow128_len();

/// `10^0..=10^9`
pub static POW32: [u32; POW32_LEN] = build_pow32();

/// `10^0..=10^19`
pub static POW64: [u64; POW64_LEN] = build_pow64();

/// `10^0..=10^38`
pub static POW128: [DoubleWidth; POW128_LEN] = build_pow128();

const fn pow128_len() -> usize {
    let mut len = 1;
    let mut cur = DoubleWidth::ONE;
    while cur.times_ten_fits() {
        cur = cur.mul_small(10);
        len += 1;
    }
    len
}

const fn build_pow128() -> [DoubleWidth; POW128_LEN] {
    let mut table = [DoubleWidth::ZERO; POW128_LEN];
    let mut cur = DoubleWidth::ONE;
    let mut i = 0;
    while i < POW128_LEN {
        table[i] = cur;
        cur = cur.mul_small(10);
        i += 1;
    }
    table
}

/// `10^exp` as a `u32`, or `None` if it does not fit.
#[inline]
pub fn pow10_32(exp: usize) -> Option<u32> {
    POW32.get(exp).copied()
}

/// `10^exp` as a `u64`, or `None` if it does not fit.
#[inline]
pub fn pow10_64(exp: usize) -> Option<u64> {
    POW64.get(exp).copied()
}

/// `10^exp` as a [`DoubleWidth`], or `None` if it does not fit.
#[inline]
pub fn pow10_128(exp: usize) -> Option<DoubleWidth> {
    POW128.get(exp).copied()
}
