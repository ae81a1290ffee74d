pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeodecError, Result};
pub use geometry::{Hyperplane, Line, LineIntersection, Plane};
pub use math::{Point2, Scalar, Vector, TOLERANCE};
