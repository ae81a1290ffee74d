use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Scalar, Vector, TOLERANCE};

/// Decimal places shown when rendering an equation.
const DISPLAY_DECIMAL_PLACES: u32 = 3;

/// An affine hyperplane `n · x = k` in `N`-dimensional space.
///
/// With `N = 2` this is a line ([`Line`](super::Line)), with `N = 3` a
/// plane ([`Plane`](super::Plane)). A basepoint on the hyperplane is derived
/// once at construction and is `None` exactly when every coefficient of the
/// normal vector is near zero.
///
/// Equality is geometric coincidence: `2x + 4y = 6` equals `x + 2y = 3`.
/// `==` reports `false` when the comparison itself overflows; call
/// [`coincides_with`](Self::coincides_with) to see that error.
#[derive(Debug, Clone)]
pub struct Hyperplane<const N: usize> {
    normal_vector: Vector,
    constant_term: Scalar,
    basepoint: Option<Vector>,
}

impl<const N: usize> Hyperplane<N> {
    /// Creates a hyperplane from its normal vector and constant term.
    ///
    /// # Errors
    ///
    /// Returns an error if `normal_vector` does not have `N` components, or
    /// if the basepoint coordinate overflows.
    pub fn new(normal_vector: Vector, constant_term: Scalar) -> Result<Self> {
        if normal_vector.dims() != N {
            return Err(GeometryError::DimensionMismatch {
                expected: N,
                found: normal_vector.dims(),
            }
            .into());
        }
        Self::with_normal(normal_vector, constant_term)
    }

    /// Creates a hyperplane from `N` coefficients and a constant term.
    ///
    /// # Errors
    ///
    /// Returns an error if the basepoint coordinate overflows.
    pub fn from_coefficients(coefficients: [Scalar; N], constant_term: Scalar) -> Result<Self> {
        Self::with_normal(Vector::new(coefficients), constant_term)
    }

    /// Creates a hyperplane from decimal literals, e.g.
    /// `Line::parse(&["4.046", "2.836"], "1.21")`.
    ///
    /// # Errors
    ///
    /// Returns an error if a literal is not a valid decimal, or if the
    /// basepoint coordinate overflows.
    pub fn parse(coefficients: &[&str; N], constant_term: &str) -> Result<Self> {
        Self::with_normal(Vector::parse(coefficients)?, constant_term.parse()?)
    }

    fn with_normal(normal_vector: Vector, constant_term: Scalar) -> Result<Self> {
        let basepoint = Self::derive_basepoint(&normal_vector, constant_term)?;
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
        })
    }

    /// Solves for the point whose only nonzero coordinate sits at the first
    /// non-negligible coefficient.
    fn derive_basepoint(normal_vector: &Vector, constant_term: Scalar) -> Result<Option<Vector>> {
        let Some(index) = normal_vector.first_nonzero_index() else {
            tracing::trace!(%normal_vector, "no nonzero coefficient, hyperplane has no basepoint");
            return Ok(None);
        };
        // A tiny coefficient under a large constant can overflow.
        let coordinate = constant_term.checked_div(normal_vector[index])?;
        let mut coords = [Scalar::ZERO; N];
        coords[index] = coordinate;
        Ok(Some(Vector::new(coords)))
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> Scalar {
        self.constant_term
    }

    /// Returns a point on the hyperplane, if the normal vector is nonzero.
    #[must_use]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns `true` if the normal vectors are parallel.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector arithmetic overflows.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.is_parallel_to_within(other, TOLERANCE)
    }

    /// Returns `true` if the normal vectors are parallel within `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector arithmetic overflows.
    pub fn is_parallel_to_within(&self, other: &Self, tolerance: Scalar) -> Result<bool> {
        self.normal_vector
            .is_parallel_to_within(&other.normal_vector, tolerance)
    }

    /// Returns `true` if both hyperplanes describe the same point set.
    ///
    /// Two degenerate hyperplanes (zero normal) coincide when their constant
    /// terms agree. Otherwise the hyperplanes must be parallel and the
    /// vector between their basepoints must lie within them.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying vector arithmetic overflows.
    pub fn coincides_with(&self, other: &Self) -> Result<bool> {
        match (self.normal_vector.is_zero()?, other.normal_vector.is_zero()?) {
            (true, true) => {
                Ok(self
                .constant_term
                .checked_sub(other.constant_term)?
                .is_near_zero(TOLERANCE))
            }
            (true, false) | (false, true) => Ok(false),
            (false, false) => {
                if !self.is_parallel_to(other)? {
                    return Ok(false);
                }
                match (&self.basepoint, &other.basepoint) {
                    (Some(a), Some(b)) => self.normal_vector.is_orthogonal_to(&a.sub(b)?),
                    _ => {
                        tracing::debug!(
                            lhs = %self,
                            rhs = %other,
                            "normal below zero tolerance in every coefficient, treating as distinct"
                        );
                        Ok(false)
                    }
                }
            }
        }
    }
}

impl<const N: usize> Default for Hyperplane<N> {
    /// The degenerate hyperplane `0 = 0`.
    fn default() -> Self {
        Self {
            normal_vector: Vector::zeros(N),
            constant_term: Scalar::ZERO,
            basepoint: None,
        }
    }
}

impl<const N: usize> PartialEq for Hyperplane<N> {
    /// Coincidence test. An overflow while comparing counts as "not equal";
    /// [`Hyperplane::coincides_with`] reports it instead.
    fn eq(&self, other: &Self) -> bool {
        self.coincides_with(other).unwrap_or(false)
    }
}

/// Writes one `c x_i` term of an equation. Terms after the first carry an
/// explicit sign, and a unit coefficient is left implicit.
fn write_term(
    f: &mut fmt::Formatter<'_>,
    coefficient: Scalar,
    index: usize,
    is_initial: bool,
    separate: bool,
) -> fmt::Result {
    if separate {
        write!(f, " ")?;
    }
    let negative = coefficient < Scalar::ZERO;
    match (is_initial, negative) {
        (true, true) => write!(f, "-")?,
        (true, false) => {}
        (false, true) => write!(f, "- ")?,
        (false, false) => write!(f, "+ ")?,
    }
    let magnitude = coefficient.abs();
    if magnitude != Scalar::ONE {
        write!(f, "{}", magnitude.into_inner().normalize())?;
    }
    write!(f, "x_{}", index + 1)
}

impl<const N: usize> fmt::Display for Hyperplane<N> {
    /// Renders the equation, e.g. `4.046x_1 + 2.836x_2 = 1.21`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let initial_index = self.normal_vector.first_nonzero_index();
        let mut wrote_term = false;
        for (i, &c) in self.normal_vector.iter().enumerate() {
            let c = c.round(DISPLAY_DECIMAL_PLACES);
            if c.is_zero() {
                continue;
            }
            write_term(f, c, i, Some(i) == initial_index, wrote_term)?;
            wrote_term = true;
        }
        if !wrote_term {
            write!(f, "0")?;
        }
        let constant = self.constant_term.round(DISPLAY_DECIMAL_PLACES);
        write!(f, " = {}", constant.into_inner().normalize())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeodecError, NumericError};

    type Line = Hyperplane<2>;
    type Plane = Hyperplane<3>;

    fn s(text: &str) -> Scalar {
        text.parse().unwrap()
    }

    #[test]
    fn default_is_degenerate() {
        let line = Line::default();
        assert!(line.normal_vector().is_zero().unwrap());
        assert_eq!(line.constant_term(), Scalar::ZERO);
        assert!(line.basepoint().is_none());
        assert_eq!(line.to_string(), "0 = 0");
    }

    #[test]
    fn new_checks_dimension() {
        let err = Line::new(Vector::new([1, 2, 3]), Scalar::ONE).unwrap_err();
        assert_eq!(
            err,
            GeodecError::Geometry(GeometryError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(Plane::new(Vector::new([1, 2, 3]), Scalar::ONE).is_ok());
    }

    #[test]
    fn basepoint_uses_first_nonzero_coefficient() {
        let line = Line::parse(&["0", "4"], "2").unwrap();
        assert_eq!(line.basepoint(), Some(&Vector::parse(&["0", "0.5"]).unwrap()));

        let plane = Plane::parse(&["2", "3", "4"], "5").unwrap();
        assert_eq!(plane.basepoint(), Some(&Vector::parse(&["2.5", "0", "0"]).unwrap()));

        let plane = Plane::parse(&["0.00000000001", "0", "-2"], "3").unwrap();
        assert_eq!(plane.basepoint(), Some(&Vector::parse(&["0", "0", "-1.5"]).unwrap()));
    }

    #[test]
    fn degenerate_hyperplanes_compare_constants() {
        let a = Line::from_coefficients([Scalar::ZERO, Scalar::ZERO], Scalar::ONE).unwrap();
        let b = Line::from_coefficients([Scalar::ZERO, Scalar::ZERO], Scalar::ONE).unwrap();
        let c = Line::from_coefficients([Scalar::ZERO, Scalar::ZERO], Scalar::TWO).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(Line::default(), Line::default());
    }

    #[test]
    fn degenerate_never_equals_proper() {
        let degenerate = Plane::default();
        let proper = Plane::parse(&["1", "0", "0"], "0").unwrap();
        assert_ne!(degenerate, proper);
        assert_ne!(proper, degenerate);
    }

    #[test]
    fn equality_is_an_equivalence_for_coincident_lines() {
        let a = Line::parse(&["1", "2"], "3").unwrap();
        let b = Line::parse(&["2", "4"], "6").unwrap();
        let c = Line::parse(&["-0.5", "-1"], "-1.5").unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn parallel_but_distinct() {
        let a = Line::parse(&["1", "2"], "3").unwrap();
        let b = Line::parse(&["2", "4"], "7").unwrap();
        assert!(a.is_parallel_to(&b).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn parallel_tolerance_is_configurable() {
        let a = Line::parse(&["1", "0"], "0").unwrap();
        let b = Line::parse(&["1", "0.001"], "0").unwrap();
        assert!(!a.is_parallel_to(&b).unwrap());
        assert!(a.is_parallel_to_within(&b, s("0.01")).unwrap());
    }

    #[test]
    fn basepoint_overflow_is_reported() {
        let err = Line::parse(&["0.000000001", "0"], "10000000000000000000000000000").unwrap_err();
        assert_eq!(err, GeodecError::Numeric(NumericError::Overflow));
        let err = Plane::from_coefficients(
            [s("0.000000001"), Scalar::ZERO, Scalar::ZERO],
            s("10000000000000000000000000000"),
        )
        .unwrap_err();
        assert_eq!(err, GeodecError::Numeric(NumericError::Overflow));
    }

    #[test]
    fn large_normals_surface_overflow_from_comparisons() {
        let line = Line::parse(&["300000000000000", "1"], "1").unwrap();
        let overflow = GeodecError::Numeric(NumericError::Overflow);
        assert_eq!(line.coincides_with(&line.clone()).unwrap_err(), overflow);
        assert_eq!(line.is_parallel_to(&line.clone()).unwrap_err(), overflow);
        assert_ne!(line, line.clone());
    }

    #[test]
    fn display_line() {
        assert_eq!(
            Line::parse(&["4.046", "2.836"], "1.21").unwrap().to_string(),
            "4.046x_1 + 2.836x_2 = 1.21"
        );
        assert_eq!(
            Line::parse(&["-1", "1"], "2.0004").unwrap().to_string(),
            "-x_1 + x_2 = 2"
        );
        assert_eq!(
            Line::parse(&["0", "-3.5"], "-1").unwrap().to_string(),
            "-3.5x_2 = -1"
        );
        assert_eq!(
            Line::parse(&["2.0", "-1"], "0").unwrap().to_string(),
            "2x_1 - x_2 = 0"
        );
    }

    #[test]
    fn display_plane() {
        assert_eq!(
            Plane::parse(&["-0.412", "3.806", "0.728"], "-3.46").unwrap().to_string(),
            "-0.412x_1 + 3.806x_2 + 0.728x_3 = -3.46"
        );
        assert_eq!(
            Plane::parse(&["0", "0", "1"], "0").unwrap().to_string(),
            "x_3 = 0"
        );
    }
}
