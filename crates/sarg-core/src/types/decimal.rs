use derive_more::{Deref, Display, FromStr};
use num_traits::ToPrimitive as NumToPrimitive;
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Deserialize, Serialize};

///
/// Decimal
///
/// Exact decimal literal. Non-integral decimals are the values a discrete
/// domain has to round before they can bound an interval.
///

#[derive(Clone, Copy, Debug, Default, Deref, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);

    #[must_use]
    /// Construct a decimal from mantissa and scale.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    /// Returns true if the decimal has no fractional component.
    ///
    /// Trailing zeros do not count: `9.0` is integral.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.0.fract().is_zero()
    }

    #[must_use]
    /// Smallest integral decimal greater than or equal to this one.
    pub fn ceil(&self) -> Self {
        Self(self.0.ceil())
    }

    /// Checked conversion of an integral decimal into `i64`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integral() {
            return None;
        }

        self.0.to_i64()
    }

    /// Checked conversion of an integral decimal into `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if !self.is_integral() {
            return None;
        }

        self.0.to_u64()
    }
}

// Serde: decimals travel as strings so JSON reports stay exact.
impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        s.parse::<WrappedDecimal>()
            .map(Decimal)
            .map_err(serde::de::Error::custom)
    }
}

impl From<WrappedDecimal> for Decimal {
    fn from(d: WrappedDecimal) -> Self {
        Self(d)
    }
}

macro_rules! impl_decimal_from_int {
    ( $( $type:ty ),* ) => {
        $(
            impl From<$type> for Decimal {
                fn from(n: $type) -> Self {
                    Self(WrappedDecimal::from(n))
                }
            }
        )*
    };
}

impl_decimal_from_int!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn integral_ignores_trailing_zeros() {
        assert!(Decimal::new(90, 1).is_integral());
        assert!(!Decimal::new(85, 1).is_integral());
        assert_eq!(Decimal::new(90, 1).to_i64(), Some(9));
        assert_eq!(Decimal::new(85, 1).to_i64(), None);
    }

    #[test]
    fn ceil_rounds_toward_positive_infinity() {
        assert_eq!(Decimal::new(85, 1).ceil().to_i64(), Some(9));
        assert_eq!(Decimal::new(-85, 1).ceil().to_i64(), Some(-8));
        assert_eq!(Decimal::from(7i64).ceil(), Decimal::from(7i64));
    }

    #[test]
    fn parse_and_serialize_as_text() {
        let value = Decimal::from_str("8.5").expect("decimal literal should parse");
        let json = serde_json::to_string(&value).expect("decimal should serialize");

        assert_eq!(json, "\"8.5\"");
        let back: Decimal = serde_json::from_str(&json).expect("decimal should deserialize");
        assert_eq!(back, value);
    }
}
