use super::{Real, Vector};
use crate::error::{GeometryError, Result};

/// A 2D rotation stored as its `(cos θ, sin θ)` pair.
///
/// The pair is never re-normalized. A non-unit pair scales as well as rotates,
/// which is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T> {
    /// Cosine of the rotation angle.
    pub c: T,
    /// Sine of the rotation angle.
    pub s: T,
}

impl<T: Real> Rotation<T> {
    /// Creates a rotation directly from a cosine/sine pair.
    #[must_use]
    pub fn new(c: T, s: T) -> Self {
        Self { c, s }
    }

    /// Creates a counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn from_angle(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self { c, s }
    }

    /// The rotation by zero radians.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            c: T::one(),
            s: T::zero(),
        }
    }

    /// Returns the rotation by the opposite angle.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            c: self.c,
            s: -self.s,
        }
    }

    /// Applies the rotation: `x' = x·cos − y·sin`, `y' = x·sin + y·cos`.
    #[must_use]
    pub fn apply(&self, v: &Vector<T>) -> Vector<T> {
        Vector::new(v.x * self.c - v.y * self.s, v.x * self.s + v.y * self.c)
    }
}

impl<T: Real> Default for Rotation<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Operations on [`Vector`] that nalgebra does not provide under the kernel's names.
///
/// Addition, subtraction, scaling, negation, `dot`, `component_mul`, `norm`,
/// `norm_squared`, `normalize` and `lerp` come straight from nalgebra. The 2D
/// cross product is nalgebra's `perp`, also exposed as [`cross`].
pub trait VectorExt<T: Real> {
    /// Euclidean distance between two points.
    fn distance_to(&self, other: &Self) -> T;

    /// Squared Euclidean distance between two points.
    fn distance_sq_to(&self, other: &Self) -> T;

    /// Returns the vector rotated counter-clockwise by `angle` radians.
    fn rotated(&self, angle: T) -> Self;

    /// Returns the vector rotated by a precomputed rotation.
    fn rotated_by(&self, rotation: &Rotation<T>) -> Self;

    /// Angle of the vector from the positive x axis, `atan2(y, x)`.
    fn polar_angle(&self) -> T;

    /// Normalizes the vector, failing on zero length instead of producing NaN.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the squared length is not positive.
    fn checked_normalize(&self) -> Result<Self>
    where
        Self: Sized;
}

impl<T: Real> VectorExt<T> for Vector<T> {
    fn distance_to(&self, other: &Self) -> T {
        self.distance_sq_to(other).sqrt()
    }

    fn distance_sq_to(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    fn rotated(&self, angle: T) -> Self {
        Rotation::from_angle(angle).apply(self)
    }

    fn rotated_by(&self, rotation: &Rotation<T>) -> Self {
        rotation.apply(self)
    }

    fn polar_angle(&self) -> T {
        self.y.atan2(self.x)
    }

    fn checked_normalize(&self) -> Result<Self> {
        let length_sq = self.norm_squared();
        if length_sq > T::zero() {
            Ok(*self / length_sq.sqrt())
        } else {
            Err(GeometryError::ZeroVector.into())
        }
    }
}

/// The 2D cross product `a.x·b.y − a.y·b.x`.
///
/// Positive when `b` is counter-clockwise from `a`, zero iff they are parallel.
#[must_use]
pub fn cross<T: Real>(a: &Vector<T>, b: &Vector<T>) -> T {
    a.perp(b)
}

/// Rotates `v` in place by `angle` radians.
pub fn rotate<T: Real>(v: &mut Vector<T>, angle: T) {
    *v = Rotation::from_angle(angle).apply(v);
}

/// Reads a vector from the first two values of a slice.
///
/// # Errors
///
/// Returns `GeometryError::InvalidInput` if fewer than two values are given.
pub fn from_slice<T: Real>(values: &[T]) -> Result<Vector<T>> {
    match values {
        [x, y, ..] => Ok(Vector::new(*x, *y)),
        _ => Err(GeometryError::InvalidInput(format!(
            "expected at least 2 components, got {}",
            values.len()
        ))
        .into()),
    }
}

/// Packs points into the `[x0, y0, x1, y1, ...]` layout vertex buffers expect.
#[must_use]
pub fn flatten<T: Real>(points: &[Vector<T>]) -> Vec<T> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Unpacks an `[x0, y0, x1, y1, ...]` array into points.
///
/// # Errors
///
/// Returns `GeometryError::InvalidInput` if the array has an odd length.
pub fn unflatten<T: Real>(values: &[T]) -> Result<Vec<Vector<T>>> {
    if values.len() % 2 != 0 {
        return Err(GeometryError::InvalidInput(format!(
            "flat point array has odd length {}",
            values.len()
        ))
        .into());
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Vector::new(pair[0], pair[1]))
        .collect())
}
