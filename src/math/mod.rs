mod scalar;
mod vector;

pub use scalar::Scalar;
pub use vector::Vector;
pub(crate) use vector::det2;

use rust_decimal::Decimal;

/// 2D point type used for line intersection results.
pub type Point2 = nalgebra::Point2<Scalar>;

/// Global geometric tolerance (`1e-10`) for near-zero, parallel and
/// orthogonal tests.
pub const TOLERANCE: Scalar = Scalar::from_decimal(Decimal::from_parts(1, 0, 0, false, 10));
