mod hyperplane;
mod line;
mod plane;

pub use hyperplane::Hyperplane;
pub use line::{Line, LineIntersection};
pub use plane::Plane;
