//! Circle against rectangle queries.
//!
//! The circle is always centred at the origin; callers translate the other
//! shape into the circle's frame first.

use tracing::{debug, trace};

use super::merge_2d::merge_points;
use super::segment_2d;
use super::vector_2d::Rotation;
use super::{RectangleHits, Real, Vector, DEFAULT_MERGE_MARGIN};

/// Returns `true` if every point lies inside or on the circle of `radius`.
#[must_use]
pub fn contains_polygon<T: Real>(radius: T, points: &[Vector<T>]) -> bool {
    let radius_sq = radius * radius;
    points.iter().all(|p| p.norm_squared() <= radius_sq)
}

/// Corners of the axis-aligned rectangle, in edge-walk order.
fn rectangle_corners<T: Real>(center: &Vector<T>, extents: &Vector<T>) -> [Vector<T>; 4] {
    [
        *center - *extents,
        *center + Vector::new(extents.x, -extents.y),
        *center + *extents,
        *center + Vector::new(-extents.x, extents.y),
    ]
}

/// Boundary crossings of the circle of `radius` with an axis-aligned rectangle.
///
/// Edges are walked `a-b`, `b-c`, `c-d`, `d-a` starting from the
/// `center - extents` corner, and points come out in that order. A crossing
/// exactly at a corner is reported once.
///
/// Returns `Some` with no points when the rectangle lies entirely inside the
/// circle, and `None` when the shapes are disjoint.
#[must_use]
pub fn intersect_rectangle<T: Real>(
    radius: T,
    center: &Vector<T>,
    extents: &Vector<T>,
) -> Option<RectangleHits<T>> {
    let corners = rectangle_corners(center, extents);

    let mut hits = RectangleHits::new();
    for (i, from) in corners.iter().enumerate() {
        let to = &corners[(i + 1) % corners.len()];
        if let Some(edge_hits) = segment_2d::intersect_circle(radius, from, to) {
            hits.extend_from_slice(edge_hits.points());
        }
    }

    let candidates = hits.len();
    let merged = merge_points(hits.points_mut(), nalgebra::convert(DEFAULT_MERGE_MARGIN));
    hits.truncate(merged);
    trace!(candidates, merged, "circle-rectangle boundary crossings");

    if hits.is_empty() {
        if contains_polygon(radius, &corners) {
            debug!("rectangle fully inside circle");
            return Some(hits);
        }
        return None;
    }

    Some(hits)
}

/// Like [`intersect_rectangle`] for a rectangle rotated by `angle` radians
/// about its own center.
///
/// The query runs in the rectangle's frame: the center is rotated by
/// `-angle`, the axis-aligned test runs, and the resulting points are rotated
/// back by `angle`.
#[must_use]
pub fn intersect_rotated_rectangle<T: Real>(
    radius: T,
    center: &Vector<T>,
    extents: &Vector<T>,
    angle: T,
) -> Option<RectangleHits<T>> {
    let local_center = Rotation::from_angle(-angle).apply(center);
    let mut hits = intersect_rectangle(radius, &local_center, extents)?;

    let rotation = Rotation::from_angle(angle);
    for point in hits.points_mut() {
        *point = rotation.apply(point);
    }
    Some(hits)
}

/// A rectangle given by center, half-extents and an optional rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleQuery<T: Real> {
    pub center: Vector<T>,
    /// Half width and half height.
    pub extents: Vector<T>,
    /// Rotation about the center in radians; `None` for axis-aligned.
    pub angle: Option<T>,
}

impl<T: Real> RectangleQuery<T> {
    /// Creates an axis-aligned rectangle.
    #[must_use]
    pub fn new(center: Vector<T>, extents: Vector<T>) -> Self {
        Self {
            center,
            extents,
            angle: None,
        }
    }

    /// Sets the rotation angle.
    #[must_use]
    pub fn with_angle(mut self, angle: T) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Intersects the rectangle with the circle of `radius` at the origin.
    ///
    /// See [`intersect_rectangle`] for the meaning of the result.
    #[must_use]
    pub fn intersect_circle(&self, radius: T) -> Option<RectangleHits<T>> {
        match self.angle {
            Some(angle) => intersect_rotated_rectangle(radius, &self.center, &self.extents, angle),
            None => intersect_rectangle(radius, &self.center, &self.extents),
        }
    }
}
