#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DecimalError;

/// Validated `(precision, scale)` pair describing a fixed-point layout.
///
/// Construction checks `scale <= precision <= max`, where `max` is the
/// largest precision whose every value fits the target width. Within that
/// budget no accumulation in the decoder can overflow.
///
/// With the `serde` feature this deserializes from
/// `{ "precision": 18, "scale": 6 }` and is validated against the widest
/// supported width (38 digits). Width front-ends re-check their own limit,
/// so a pair too wide for them fails there with `InvalidParams` whose `max`
/// is that width's limit (9 or 18). Call [`Params::check`] right after
/// loading to fail early for a known width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParams"))]
pub struct Params {
    precision: u8,
    scale: u8,
}

impl Params {
    /// Largest precision of any supported width.
    pub const MAX_PRECISION: u8 = 38;

    pub const fn new(precision: u8, scale: u8) -> crate::Result<Self> {
        Self::with_max(precision, scale, Self::MAX_PRECISION)
    }

    /// Validates against an explicit precision ceiling.
    pub const fn with_max(precision: u8, scale: u8, max: u8) -> crate::Result<Self> {
        if scale > precision || precision > max {
            return Err(DecimalError::InvalidParams {
                precision,
                scale,
                max,
            });
        }
        Ok(Self { precision, scale })
    }

    /// Re-validates against a narrower width.
    pub const fn check(self, max: u8) -> crate::Result<Self> {
        Self::with_max(self.precision, self.scale, max)
    }

    #[inline(always)]
    pub const fn precision(self) -> u8 {
        self.precision
    }

    #[inline(always)]
    pub const fn scale(self) -> u8 {
        self.scale
    }

    /// Digits available before the point: `precision - scale`.
    #[inline(always)]
    pub const fn integral_digits(self) -> u8 {
        self.precision - self.scale
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawParams {
    precision: u8,
    #[serde(default)]
    scale: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for Params {
    type Error = DecimalError;

    fn try_from(raw: RawParams) -> crate::Result<Self> {
        Self::new(raw.precision, raw.scale)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn test_deserialize_json() {
        let params: Params = serde_json::from_str(r#"{"precision": 18, "scale": 6}"#).unwrap();
        assert_eq!(params, Params::new(18, 6).unwrap());
    }

    #[test]
    fn test_deserialize_default_scale() {
        let params: Params = serde_json::from_str(r#"{"precision": 9}"#).unwrap();
        assert_eq!(params.scale(), 0);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let err = serde_json::from_str::<Params>(r#"{"precision": 4, "scale": 6}"#).unwrap_err();
        assert!(err.to_string().contains("invalid parameters"));
    }

    #[test]
    fn test_narrow_width_reports_its_own_limit() {
        let params: Params = serde_json::from_str(r#"{"precision": 18, "scale": 6}"#).unwrap();
        assert_eq!(
            params.check(9),
            Err(DecimalError::InvalidParams {
                precision: 18,
                scale: 6,
                max: 9
            })
        );
        assert_eq!(
            crate::decode32(params.precision(), params.scale(), b"1"),
            Err(DecimalError::InvalidParams {
                precision: 18,
                scale: 6,
                max: 9
            })
        );
    }

    #[test]
    fn test_serialize_roundtrip() {
        let params = Params::new(38, 2).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"precision":38,"scale":2}"#);
        assert_eq!(serde_json::from_str::<Params>(&json).unwrap(), params);
    }
}
