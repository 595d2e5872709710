use super::{Real, Vector3, PLANE_DEGENERACY_EPSILON};
use crate::error::{GeometryError, Result};

/// A plane in 3D space spanned by an origin and two in-plane directions.
///
/// Used by view-volume culling; shares the scalar conventions of the 2D
/// kernel but none of its types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Real> {
    origin: Vector3<T>,
    u: Vector3<T>,
    v: Vector3<T>,
    normal: Vector3<T>,
}

impl<T: Real> Plane<T> {
    /// Creates the plane through three points.
    ///
    /// The normal is `(p1 − p0) × (p2 − p0)`, normalized.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are (nearly) collinear.
    pub fn new(p0: &Vector3<T>, p1: &Vector3<T>, p2: &Vector3<T>) -> Result<Self> {
        let u = *p1 - *p0;
        let v = *p2 - *p0;
        let normal = u.cross(&v);
        let length_sq = normal.norm_squared();
        let epsilon: T = nalgebra::convert(PLANE_DEGENERACY_EPSILON);
        if length_sq <= epsilon {
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }

        Ok(Self {
            origin: *p0,
            u,
            v,
            normal: normal / length_sq.sqrt(),
        })
    }

    #[must_use]
    pub fn origin(&self) -> &Vector3<T> {
        &self.origin
    }

    #[must_use]
    pub fn u(&self) -> &Vector3<T> {
        &self.u
    }

    #[must_use]
    pub fn v(&self) -> &Vector3<T> {
        &self.v
    }

    /// Unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    /// Signed distance of `p`, positive on the side the normal points to.
    #[must_use]
    pub fn signed_distance(&self, p: &Vector3<T>) -> T {
        (*p - self.origin).dot(&self.normal)
    }

    /// Orthogonal projection of `p` onto the plane.
    #[must_use]
    pub fn project(&self, p: &Vector3<T>) -> Vector3<T> {
        *p - self.normal * self.signed_distance(p)
    }

    /// Point where the line through `s` and `t` meets the plane.
    ///
    /// Not finite when the line is parallel to the plane or `s` lies on it.
    #[must_use]
    pub fn intersect(&self, s: &Vector3<T>, t: &Vector3<T>) -> Vector3<T> {
        let to_plane = self.project(s) - *s;
        let st = *t - *s;
        *s + st * (to_plane.norm_squared() / to_plane.dot(&st))
    }
}
