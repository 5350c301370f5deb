//! Text codec for fixed-point decimals stored as plain signed integers
//!
//! A fixed-point decimal is an integer equal to the decimal number times
//! `10^scale`. Two parameters describe it:
//!
//! - **precision**: total count of significant digits, before and after the point
//! - **scale**: count of digits reserved for the fraction
//!
//! The same raw integer means different numbers under different
//! `(precision, scale)` pairs, so both are passed to every call rather than
//! stored with the value.
//!
//! Supported widths:
//!
//! - **32-bit** (`i32`): precision up to 9
//! - **64-bit** (`i64`): precision up to 18
//! - **128-bit** (`i128`, carried internally as two 64-bit words): precision up to 38
//!
//! ## Features
//!
//! - **Integer only**: no floating point and no bignum at runtime
//! - **Canonical output**: no leading zeros, no trailing fractional zeros
//! - **no_std compatible**: `alloc` only for the `String` helpers
//! - **Serde support**: typed wrappers serialize as strings or raw integers
//!
//! ## Example
//!
//! ```rust
//! use fixconv::{decode32, decode128, encode32, encode128};
//!
//! let raw = decode32(9, 2, b"0000123.2500").unwrap();
//! assert_eq!(raw, 12325);
//! assert_eq!(encode32(2, raw), "123.25");
//!
//! let raw = decode128(38, 2, b"295147905179352825855.25").unwrap();
//! assert_eq!(raw, 29_514_790_517_935_282_585_525);
//! assert_eq!(encode128(2, raw), "295147905179352825855.25");
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

mod codec;
mod d128;
mod d32;
mod d64;
mod params;
pub mod pow10;
mod wide;

pub use d32::{Encoded32, Fixed32, decode32};
pub use d64::{Encoded64, Fixed64, decode64};
pub use d128::{Encoded128, Fixed128, decode128, decode128_words};
pub use params::Params;
pub use wide::DoubleWidth;

#[cfg(feature = "alloc")]
pub use d32::encode32;
#[cfg(feature = "alloc")]
pub use d64::encode64;
#[cfg(feature = "alloc")]
pub use d128::{encode128, encode128_words};

use core::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("non-empty decimal number expected, got no data")]
    EmptyInput,

    #[error("not a decimal number: unexpected `{}` at offset {offset}", escaped(.byte))]
    InvalidCharacter { byte: u8, offset: usize },

    #[error(
        "integral part overflow: got {} digit while only {limit} are allowed",
        ordinal(.position)
    )]
    IntegralOverflow { position: usize, limit: usize },

    #[error(
        "fraction part overflow: got {} digit while only {limit} are allowed",
        ordinal(.position)
    )]
    FractionOverflow { position: usize, limit: usize },

    #[error(
        "invalid parameters: precision {precision} with scale {scale} (scale must not exceed precision, precision must not exceed {max})"
    )]
    InvalidParams { precision: u8, scale: u8, max: u8 },
}

pub type Result<T> = core::result::Result<T, DecimalError>;

fn escaped(byte: &u8) -> core::ascii::EscapeDefault {
    core::ascii::escape_default(*byte)
}

fn ordinal(n: &usize) -> Ordinal {
    Ordinal(*n)
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st.
struct Ordinal(usize);

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        write!(f, "{n}{suffix}")
    }
}
