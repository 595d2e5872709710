pub mod circle_2d;
pub mod hits;
pub mod line_2d;
pub mod merge_2d;
pub mod plane_3d;
pub mod segment_2d;
pub mod vector_2d;

pub use hits::{CircleHits, Hits, RectangleHits};
pub use line_2d::LineIntersection;
pub use vector_2d::{Rotation, VectorExt};

/// Floating-point scalar accepted by every routine in the kernel.
///
/// Implemented for `f32` and `f64`.
pub trait Real: nalgebra::RealField + Copy {}

impl<T: nalgebra::RealField + Copy> Real for T {}

/// 2D vector type, single precision unless stated otherwise.
pub type Vector<T = f32> = nalgebra::Vector2<T>;

/// Single-precision 2D vector.
pub type Vec2 = Vector<f32>;

/// 3D vector type used by [`plane_3d`].
pub type Vector3<T = f32> = nalgebra::Vector3<T>;

/// Tolerance for exact-arithmetic floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Distance under which two intersection points are considered the same point.
pub const DEFAULT_MERGE_MARGIN: f64 = 0.001;

/// Squared normal length below which three points do not span a plane.
pub const PLANE_DEGENERACY_EPSILON: f64 = 1e-6;
