use super::Hyperplane;

/// A plane `a x_1 + b x_2 + c x_3 = k` in 3D space.
///
/// Shares construction, parallelism and coincidence with [`Line`](super::Line).
/// Plane–plane intersection (a line in 3D) is not provided.
pub type Plane = Hyperplane<3>;
