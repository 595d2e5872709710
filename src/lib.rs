pub mod error;
pub mod math;

pub use error::{GeometriaError, GeometryError, Result};
pub use math::circle_2d::RectangleQuery;
pub use math::{CircleHits, Hits, LineIntersection, Real, RectangleHits, Rotation, Vec2, Vector, VectorExt};
