use std::fmt;
use std::ops::{Index, Mul};

use crate::error::{GeometryError, Result};

use super::{Scalar, TOLERANCE};

/// An immutable, dimension-generic vector of [`Scalar`] components.
///
/// Binary operations require both operands to have the same number of
/// components and report [`GeometryError::DimensionMismatch`] otherwise.
/// Equality is exact component-wise equality; use the tolerance-based
/// predicates for geometric comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    coords: Vec<Scalar>,
}

impl Vector {
    /// Creates a vector from anything convertible to [`Scalar`].
    pub fn new<I, T>(coords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self {
            coords: coords.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the zero vector with `dims` components.
    #[must_use]
    pub fn zeros(dims: usize) -> Self {
        Self {
            coords: vec![Scalar::ZERO; dims],
        }
    }

    /// Creates a vector from floating-point literals.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is NaN or infinite.
    pub fn from_f64s(values: &[f64]) -> Result<Self> {
        values.iter().map(|&v| Scalar::try_from(v)).collect()
    }

    /// Creates a vector from decimal literals such as `"4.046"`.
    ///
    /// # Errors
    ///
    /// Returns an error if any literal is not a valid decimal.
    pub fn parse(values: &[&str]) -> Result<Self> {
        values.iter().map(|v| v.parse::<Scalar>()).collect()
    }

    /// Number of components.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn coords(&self) -> &[Scalar] {
        &self.coords
    }

    /// Returns the component at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.coords.get(index).copied()
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl Iterator<Item = &Scalar> {
        self.coords.iter()
    }

    fn check_dims(&self, other: &Self) -> Result<()> {
        if self.dims() == other.dims() {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                expected: self.dims(),
                found: other.dims(),
            }
            .into())
        }
    }

    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(Scalar, Scalar) -> Result<Scalar>,
    ) -> Result<Self> {
        self.check_dims(other)?;
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or a component overflows.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Scalar::checked_add)
    }

    /// Component-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or a component overflows.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Scalar::checked_sub)
    }

    /// Multiplies every component by `k`.
    ///
    /// # Errors
    ///
    /// Returns an error if a component overflows.
    pub fn scale(&self, k: Scalar) -> Result<Self> {
        self.coords.iter().map(|&x| x.checked_mul(k)).collect()
    }

    /// Divides every component by `k`.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is zero.
    pub fn divide(&self, k: Scalar) -> Result<Self> {
        self.coords.iter().map(|&x| x.checked_div(k)).collect()
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the sum overflows.
    pub fn dot(&self, other: &Self) -> Result<Scalar> {
        self.check_dims(other)?;
        self.coords
            .iter()
            .zip(&other.coords)
            .try_fold(Scalar::ZERO, |acc, (&a, &b)| acc.checked_add(a.checked_mul(b)?))
    }

    /// Euclidean length, computed with the decimal square root.
    ///
    /// # Errors
    ///
    /// Returns an error if the sum of squares overflows, which happens once
    /// a component reaches roughly `2.8e14`.
    pub fn magnitude(&self) -> Result<Scalar> {
        let squared = self.dot(self)?;
        // A sum of squares is never negative.
        Ok(squared.sqrt().unwrap_or(Scalar::ZERO))
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector normalizes to the zero vector of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude overflows.
    pub fn normalize(&self) -> Result<Self> {
        let magnitude = self.magnitude()?;
        if magnitude.is_zero() {
            return Ok(Self::zeros(self.dims()));
        }
        self.divide(magnitude)
    }

    /// Angle between two vectors in radians, `None` if either is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the arithmetic overflows.
    pub fn angle(&self, other: &Self) -> Result<Option<Scalar>> {
        self.angle_within(other, TOLERANCE)
    }

    /// Like [`angle`](Self::angle), clamping a normalized dot product that
    /// overshoots `±1` by less than `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ, the arithmetic overflows,
    /// or the normalized dot product leaves `[-1, 1]` by more than
    /// `tolerance`.
    pub fn angle_within(&self, other: &Self, tolerance: Scalar) -> Result<Option<Scalar>> {
        self.check_dims(other)?;
        if self.is_zero()? || other.is_zero()? {
            return Ok(None);
        }

        let dot = self.normalize()?.dot(&other.normalize()?)?;
        clamp_unit(dot, tolerance).acos().map(Some)
    }

    /// Returns `true` if the magnitude is below the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude overflows.
    pub fn is_zero(&self) -> Result<bool> {
        self.is_zero_within(TOLERANCE)
    }

    /// Returns `true` if the magnitude is below `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude overflows.
    pub fn is_zero_within(&self, tolerance: Scalar) -> Result<bool> {
        Ok(self.magnitude()? < tolerance)
    }

    /// Returns `true` if `|self · other|` is below the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the dot product overflows.
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool> {
        self.is_orthogonal_to_within(other, TOLERANCE)
    }

    /// Returns `true` if `|self · other| < tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the dot product overflows.
    pub fn is_orthogonal_to_within(&self, other: &Self, tolerance: Scalar) -> Result<bool> {
        Ok(self.dot(other)?.is_near_zero(tolerance))
    }

    /// Returns `true` if the vectors point along the same or opposite
    /// directions. The zero vector is parallel to every vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the arithmetic overflows.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.is_parallel_to_within(other, TOLERANCE)
    }

    /// Returns `true` if the angle between the vectors is within
    /// `tolerance` of `0` or `π`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the arithmetic overflows.
    pub fn is_parallel_to_within(&self, other: &Self, tolerance: Scalar) -> Result<bool> {
        match self.angle_within(other, tolerance)? {
            None => Ok(true),
            Some(angle) => {
                Ok(angle.is_near_zero(tolerance) || (angle - Scalar::PI).is_near_zero(tolerance))
            }
        }
    }

    /// Projection of `self` onto the direction of `basis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the arithmetic overflows.
    pub fn component_parallel_to(&self, basis: &Self) -> Result<Self> {
        let unit = basis.normalize()?;
        unit.scale(self.dot(&unit)?)
    }

    /// Component of `self` orthogonal to `basis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ or the arithmetic overflows.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        self.sub(&self.component_parallel_to(basis)?)
    }

    /// 3D cross product.
    ///
    /// # Errors
    ///
    /// Returns an error unless both vectors have exactly 3 components, or if
    /// a component overflows.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let (a, b) = match (self.coords.as_slice(), other.coords.as_slice()) {
            ([a0, a1, a2], [b0, b1, b2]) => ([*a0, *a1, *a2], [*b0, *b1, *b2]),
            ([_, _, _], _) => {
                return Err(GeometryError::DimensionMismatch {
                    expected: 3,
                    found: other.dims(),
                }
                .into())
            }
            _ => {
                return Err(GeometryError::DimensionMismatch {
                    expected: 3,
                    found: self.dims(),
                }
                .into())
            }
        };

        Ok(Self::new([
            det2(a[1], b[2], b[1], a[2])?,
            -det2(a[0], b[2], b[0], a[2])?,
            det2(a[0], b[1], b[0], a[1])?,
        ]))
    }

    /// Area of the parallelogram spanned by two 3D vectors.
    ///
    /// # Errors
    ///
    /// Returns an error unless both vectors have exactly 3 components, or if
    /// the arithmetic overflows.
    pub fn area_of_parallelogram(&self, other: &Self) -> Result<Scalar> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3D vectors.
    ///
    /// # Errors
    ///
    /// Returns an error unless both vectors have exactly 3 components, or if
    /// the arithmetic overflows.
    pub fn area_of_triangle(&self, other: &Self) -> Result<Scalar> {
        self.area_of_parallelogram(other)?.checked_div(Scalar::TWO)
    }

    /// Index of the first component that is not near zero.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.coords.iter().position(|x| !x.is_near_zero(TOLERANCE))
    }
}

/// `a * b - c * d`, reporting overflow.
pub(crate) fn det2(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Result<Scalar> {
    a.checked_mul(b)?.checked_sub(c.checked_mul(d)?)
}

/// Snaps a normalized dot product that overshoots `±1` by less than
/// `tolerance` back onto `±1`, so rounding noise stays inside the domain of
/// `acos`. Larger overshoots are returned unchanged.
fn clamp_unit(dot: Scalar, tolerance: Scalar) -> Scalar {
    let overshoot = dot.abs() - Scalar::ONE;
    if overshoot > Scalar::ZERO && overshoot < tolerance {
        if dot < Scalar::ZERO {
            -Scalar::ONE
        } else {
            Scalar::ONE
        }
    } else {
        dot
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.coords[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl Mul<Scalar> for &Vector {
    type Output = Result<Vector>;

    fn mul(self, k: Scalar) -> Result<Vector> {
        self.scale(k)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Result<Vector>;

    fn mul(self, k: Scalar) -> Result<Vector> {
        self.scale(k)
    }
}

impl Mul<&Vector> for Scalar {
    type Output = Result<Vector>;

    fn mul(self, v: &Vector) -> Result<Vector> {
        v.scale(self)
    }
}

impl Mul<Vector> for Scalar {
    type Output = Result<Vector>;

    fn mul(self, v: Vector) -> Result<Vector> {
        v.scale(self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
