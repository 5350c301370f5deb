/// Defines a fixed-point newtype over a signed raw integer with precision
/// and scale as const generics.
///
/// Invalid parameters (`S > P`, or `P` beyond the width) fail to compile as
/// soon as the type is used. `$fits` reports whether a raw value has at most
/// `P` digits.
macro_rules! fixed_type {
    (
        $(#[$meta:meta])*
        $name:ident, $raw:ty, $max:expr, $decode:ident, $encoded:ident, $fits:ident
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name<const P: u8, const S: u8> {
            value: $raw,
        }

        impl<const P: u8, const S: u8> $name<P, S> {
            const VALID: () = assert!(
                S <= P && P <= $max,
                "scale must not exceed precision, and precision must fit the width"
            );

            /// Total significant digits.
            pub const PRECISION: u8 = P;

            /// Digits after the point.
            pub const SCALE: u8 = S;

            /// Zero
            pub const ZERO: Self = Self { value: 0 };

            /// Wraps a raw value already scaled by `10^S`.
            #[inline(always)]
            pub const fn from_raw(value: $raw) -> Self {
                let () = Self::VALID;
                Self { value }
            }

            /// Like [`Self::from_raw`], but rejects values with more than `P`
            /// digits, which no decimal text accepted by this type produces.
            pub fn try_from_raw(value: $raw) -> $crate::Result<Self> {
                let () = Self::VALID;
                if $fits(value, P) {
                    Ok(Self { value })
                } else {
                    // the excess digits always land in the integral part
                    Err($crate::DecimalError::IntegralOverflow {
                        position: usize::from(P - S) + 1,
                        limit: usize::from(P - S),
                    })
                }
            }

            /// Returns the raw value (scaled by `10^S`).
            #[inline(always)]
            pub const fn to_raw(self) -> $raw {
                self.value
            }

            /// The `(precision, scale)` pair of this type.
            pub const fn params() -> $crate::Params {
                let () = Self::VALID;
                match $crate::Params::with_max(P, S, $max) {
                    Ok(params) => params,
                    Err(_) => unreachable!(),
                }
            }

            #[inline(always)]
            pub const fn is_negative(self) -> bool {
                self.value < 0
            }

            #[inline(always)]
            pub const fn is_zero(self) -> bool {
                self.value == 0
            }

            /// Parses a decimal string such as `"-123.45"`.
            ///
            /// No whitespace, `+` sign or exponent is accepted.
            pub fn from_str_exact(s: &str) -> $crate::Result<Self> {
                Self::from_utf8_bytes(s.as_bytes())
            }

            /// Parses decimal text straight from bytes.
            pub fn from_utf8_bytes(bytes: &[u8]) -> $crate::Result<Self> {
                let () = Self::VALID;
                $decode(P, S, bytes).map(|value| Self { value })
            }
        }

        impl<const P: u8, const S: u8> core::str::FromStr for $name<P, S> {
            type Err = $crate::DecimalError;

            fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                Self::from_str_exact(s)
            }
        }

        impl<const P: u8, const S: u8> core::fmt::Display for $name<P, S> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&$encoded::new(S, self.value), f)
            }
        }

        impl<const P: u8, const S: u8> core::fmt::Debug for $name<P, S> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                if f.alternate() {
                    f.debug_struct(stringify!($name))
                        .field("value", &self.value)
                        .finish()
                } else {
                    write!(f, concat!(stringify!($name), "({})"), self)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<const P: u8, const S: u8> serde::Serialize for $name<P, S> {
            fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
            where
                Ser: serde::Serializer,
            {
                if serializer.is_human_readable() {
                    // JSON, TOML, etc. - canonical decimal text
                    serializer.collect_str(self)
                } else {
                    // Bincode, MessagePack, etc. - raw integer
                    serde::Serialize::serialize(&self.value, serializer)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, const P: u8, const S: u8> serde::Deserialize<'de> for $name<P, S> {
            fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
            where
                De: serde::Deserializer<'de>,
            {
                if deserializer.is_human_readable() {
                    let s = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
                    Self::from_str_exact(&s).map_err(serde::de::Error::custom)
                } else {
                    let value = <$raw as serde::Deserialize>::deserialize(deserializer)?;
                    Self::try_from_raw(value).map_err(serde::de::Error::custom)
                }
            }
        }
    };
}
