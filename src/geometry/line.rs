use crate::error::Result;
use crate::math::{det2, Point2};

use super::Hyperplane;

/// A line `a x_1 + b x_2 = k` in the plane.
pub type Line = Hyperplane<2>;

/// Result of intersecting two lines that meet.
#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection {
    /// The lines coincide; every point of this line is shared.
    Coincident(Line),
    /// The lines cross at a single point.
    Point(Point2),
}

impl Hyperplane<2> {
    /// Intersects two lines.
    ///
    /// Returns `None` for parallel, distinct lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying decimal arithmetic overflows.
    pub fn intersection_with(&self, other: &Self) -> Result<Option<LineIntersection>> {
        if self.coincides_with(other)? {
            tracing::trace!(line = %self, "lines coincide");
            return Ok(Some(LineIntersection::Coincident(self.clone())));
        }
        if self.is_parallel_to(other)? {
            tracing::trace!(lhs = %self, rhs = %other, "parallel lines do not meet");
            return Ok(None);
        }

        // Cramer's rule on [[a, b], [c, d]] · [x, y] = [k1, k2]. The
        // determinant is nonzero because the normals are not parallel.
        let (a, b) = (self.normal_vector()[0], self.normal_vector()[1]);
        let (c, d) = (other.normal_vector()[0], other.normal_vector()[1]);
        let (k1, k2) = (self.constant_term(), other.constant_term());

        let denom = det2(a, d, b, c)?;
        let x = det2(d, k1, b, k2)?.checked_div(denom)?;
        let y = det2(a, k2, c, k1)?.checked_div(denom)?;
        Ok(Some(LineIntersection::Point(Point2::new(x, y))))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::{GeodecError, NumericError};
    use crate::math::Scalar;

    fn line(normal: [&str; 2], constant: &str) -> Line {
        Line::parse(&normal, constant).unwrap()
    }

    fn s(text: &str) -> Scalar {
        text.parse().unwrap()
    }

    #[test]
    fn scaled_lines_are_equal() {
        let a = line(["4.046", "2.836"], "1.21");
        let b = line(["10.115", "7.09"], "3.025");
        assert_eq!(a, b);
    }

    #[test]
    fn crossing_lines_meet_at_a_point() {
        let a = line(["7.204", "3.182"], "8.68");
        let b = line(["8.172", "4.114"], "9.883");
        let Some(LineIntersection::Point(p)) = a.intersection_with(&b).unwrap() else {
            panic!("expected a single intersection point");
        };
        assert_eq!(p.x.round(3), s("1.173"));
        assert_eq!(p.y.round(3), s("0.073"));
        assert_abs_diff_eq!(p.x, s("1.172776635464640149347046962"), epsilon = s("1e-20"));
        assert_abs_diff_eq!(p.y, s("0.07269551166333512385414006569"), epsilon = s("1e-20"));
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = line(["7.204", "3.182"], "8.68");
        let b = line(["8.172", "4.114"], "9.883");
        let ab = a.intersection_with(&b).unwrap();
        let ba = b.intersection_with(&a).unwrap();
        let (Some(LineIntersection::Point(p)), Some(LineIntersection::Point(q))) = (ab, ba) else {
            panic!("expected points");
        };
        assert_abs_diff_eq!(p.x, q.x, epsilon = s("1e-20"));
        assert_abs_diff_eq!(p.y, q.y, epsilon = s("1e-20"));
    }

    #[test]
    fn parallel_lines_do_not_meet() {
        let a = line(["1.182", "5.562"], "6.744");
        let b = line(["1.773", "8.343"], "9.525");
        assert!(a.is_parallel_to(&b).unwrap());
        assert!(a.intersection_with(&b).unwrap().is_none());
    }

    #[test]
    fn coincident_lines_return_the_line() {
        let a = line(["4.046", "2.836"], "1.21");
        let b = line(["10.115", "7.09"], "3.025");
        match a.intersection_with(&b).unwrap() {
            Some(LineIntersection::Coincident(l)) => assert_eq!(l.normal_vector(), a.normal_vector()),
            other => panic!("expected coincident lines, got {other:?}"),
        }
    }

    #[test]
    fn axis_aligned_intersection() {
        let vertical = line(["1", "0"], "2");
        let horizontal = line(["0", "1"], "-3");
        assert_eq!(
            vertical.intersection_with(&horizontal).unwrap(),
            Some(LineIntersection::Point(Point2::new(Scalar::TWO, Scalar::from(-3))))
        );
    }

    #[test]
    fn degenerate_line_never_intersects_a_proper_line() {
        let degenerate = Line::default();
        let proper = line(["1", "1"], "1");
        assert!(degenerate.intersection_with(&proper).unwrap().is_none());
        assert!(proper.intersection_with(&degenerate).unwrap().is_none());
    }

    #[test]
    fn oversized_coefficients_report_overflow() {
        let a = line(["300000000000000", "1"], "1");
        let b = line(["1", "300000000000000"], "1");
        assert_eq!(
            a.intersection_with(&b).unwrap_err(),
            GeodecError::Numeric(NumericError::Overflow)
        );
    }

    #[test]
    fn degenerate_lines_with_equal_constants_coincide() {
        let a = Line::default();
        assert!(matches!(
            a.intersection_with(&Line::default()).unwrap(),
            Some(LineIntersection::Coincident(_))
        ));
    }
}
