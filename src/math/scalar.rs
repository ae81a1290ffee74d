use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{NumericError, Result};

/// A high-precision decimal scalar.
///
/// Wraps [`Decimal`], which keeps 28 significant digits, so chained
/// multiply/divide/sqrt operations stay well inside the `1e-10`
/// tolerance used by the geometric predicates.
///
/// Division is only available through [`Scalar::checked_div`]; there is
/// no `/` operator. The `+`, `-` and `*` operators panic when the result
/// leaves the representable range (about `7.9e28`); library code uses the
/// `checked_*` forms, which report [`NumericError::Overflow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(Decimal);

impl Scalar {
    /// `0`.
    pub const ZERO: Self = Self(Decimal::ZERO);
    /// `1`.
    pub const ONE: Self = Self(Decimal::ONE);
    /// `2`.
    pub const TWO: Self = Self(Decimal::TWO);
    /// Archimedes' constant to 28 decimal places.
    pub const PI: Self = Self(Decimal::PI);

    /// Creates `mantissa * 10^-scale`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if `scale` exceeds the 28 digits
    /// the representation can hold.
    pub fn try_new(mantissa: i64, scale: u32) -> Result<Self> {
        Decimal::try_new(mantissa, scale)
            .map(Self)
            .map_err(|_| NumericError::Overflow.into())
    }

    /// Wraps a decimal.
    #[must_use]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the wrapped decimal.
    #[must_use]
    pub fn into_inner(self) -> Decimal {
        self.0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` iff `|self| < eps`.
    #[must_use]
    pub fn is_near_zero(self, eps: Self) -> bool {
        self.abs() < eps
    }

    /// Rounds to `dp` decimal places, ties to even.
    #[must_use]
    pub fn round(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }

    /// Returns `true` if the value has no fractional part.
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.0.fract().is_zero()
    }

    /// Adds, reporting overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if the sum is out of range.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::Overflow.into())
    }

    /// Subtracts, reporting overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if the difference is out of range.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::Overflow.into())
    }

    /// Multiplies, reporting overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if the product is out of range.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::Overflow.into())
    }

    /// Divides, failing instead of panicking on a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] if `rhs` is zero, or
    /// [`NumericError::Overflow`] if the quotient is out of range.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero.into());
        }
        self.0
            .checked_div(rhs.0)
            .map(Self)
            .ok_or_else(|| NumericError::Overflow.into())
    }

    /// Raises to an integer power.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if the result is out of range.
    pub fn checked_powi(self, exp: i64) -> Result<Self> {
        self.0
            .checked_powi(exp)
            .map(Self)
            .ok_or_else(|| NumericError::Overflow.into())
    }

    /// Square root in full decimal precision. `None` for negative values.
    #[must_use]
    pub fn sqrt(self) -> Option<Self> {
        self.0.sqrt().map(Self)
    }

    /// Arc cosine in radians.
    ///
    /// Evaluated in `f64`, so the result carries double precision.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Domain`] if the value lies outside `[-1, 1]`.
    pub fn acos(self) -> Result<Self> {
        if self.abs() > Self::ONE {
            return Err(NumericError::Domain {
                operation: "acos",
                value: self.to_string(),
            }
            .into());
        }
        let x = self.to_f64().ok_or(NumericError::Overflow)?;
        Self::try_from(x.acos())
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Converts an angle in radians to degrees.
    #[must_use]
    pub fn to_degrees(self) -> Self {
        Self(self.0 * Decimal::from(180) / Decimal::PI)
    }

    /// Converts an angle in degrees to radians.
    #[must_use]
    pub fn to_radians(self) -> Self {
        Self(self.0 * Decimal::PI / Decimal::from(180))
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Scalar {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Self(Decimal::from(value))
                }
            }
        )*
    };
}

scalar_from_int!(i32, i64, u32, u64, usize);

impl TryFrom<f64> for Scalar {
    type Error = crate::error::GeodecError;

    /// Converts to the shortest decimal that round-trips, so `0.1` becomes
    /// exactly `0.1`.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite(value.to_string()).into());
        }
        Decimal::from_f64(value)
            .map(Self)
            .ok_or_else(|| NumericError::Overflow.into())
    }
}

impl FromStr for Scalar {
    type Err = crate::error::GeodecError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str(s)
        };
        parsed
            .map(Self)
            .map_err(|_| NumericError::Parse(s.to_owned()).into())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Scalar {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        super::TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Scalar, epsilon: Scalar) -> bool {
        (*self - *other).abs() <= epsilon
    }
}
