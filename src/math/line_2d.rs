//! Infinite-line primitives.
//!
//! A line is given either as a point and a direction (`a`, `ab`) or, for the
//! circle query, as two points on it. Zero directions are not rejected: the
//! results are whatever IEEE arithmetic produces.

use super::{CircleHits, Real, Vector};

/// Intersection point together with its parameter along the query direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection<T: Real> {
    /// The intersection point, `p + r * t`.
    pub point: Vector<T>,
    /// Position of the point along the query direction `r`.
    pub t: T,
}

/// Classifies `p` against the line through `a` with direction `ab`.
///
/// Returns the sign of `(p − a) × ab`: `-1`, `0` or `1`. Only an exactly zero
/// cross product gives `0`.
#[must_use]
pub fn sign<T: Real>(a: &Vector<T>, ab: &Vector<T>, p: &Vector<T>) -> T {
    let area = (*p - *a).perp(ab);
    if area > T::zero() {
        T::one()
    } else if area < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// Signed perpendicular distance from `p` to the line through `a` along `ab`.
#[must_use]
pub fn distance<T: Real>(a: &Vector<T>, ab: &Vector<T>, p: &Vector<T>) -> T {
    (*p - *a).perp(ab) / ab.norm()
}

/// Parameter `k` of the orthogonal projection `a + ab * k` of `p`.
///
/// Not clamped; values outside `[0, 1]` lie beyond `a` or `a + ab`.
#[must_use]
pub fn project_parameter<T: Real>(a: &Vector<T>, ab: &Vector<T>, p: &Vector<T>) -> T {
    (*p - *a).dot(ab) / ab.dot(ab)
}

/// Orthogonal projection of `p` onto the line through `a` along `ab`.
#[must_use]
pub fn project<T: Real>(a: &Vector<T>, ab: &Vector<T>, p: &Vector<T>) -> Vector<T> {
    *a + *ab * project_parameter(a, ab, p)
}

/// Intersection of the lines `p + r * t` and `q + s * u`.
///
/// Returns `None` when `r × s` is exactly zero. Coincident lines are reported
/// the same way as parallel ones.
#[must_use]
pub fn intersect_line<T: Real>(
    p: &Vector<T>,
    r: &Vector<T>,
    q: &Vector<T>,
    s: &Vector<T>,
) -> Option<LineIntersection<T>> {
    let v = r.perp(s);
    if v == T::zero() {
        return None;
    }

    let t = (*q - *p).perp(s) / v;
    Some(LineIntersection {
        point: *p + *r * t,
        t,
    })
}

/// Intersection of the line through `s` and `t` with the circle of `radius`
/// centred at the origin.
///
/// Two real roots give two points, ordered by the sign of `t.y − s.y` (a zero
/// difference counts as positive) so the first point always has the larger
/// y. A zero discriminant gives the single tangent point. Returns `None` when
/// the line misses.
#[must_use]
pub fn intersect_circle<T: Real>(radius: T, s: &Vector<T>, t: &Vector<T>) -> Option<CircleHits<T>> {
    let dx = t.x - s.x;
    let dy = t.y - s.y;
    let dr2 = dx * dx + dy * dy;
    let d = s.x * t.y - s.y * t.x;

    let discriminant = radius * radius * dr2 - d * d;
    let mut hits = CircleHits::new();
    if discriminant > T::zero() {
        let root = discriminant.sqrt();
        let sgn_dy = sgn(dy);
        let abs_dy = dy.abs();
        hits.push(Vector::new(
            (d * dy + sgn_dy * dx * root) / dr2,
            (-d * dx + abs_dy * root) / dr2,
        ));
        hits.push(Vector::new(
            (d * dy - sgn_dy * dx * root) / dr2,
            (-d * dx - abs_dy * root) / dr2,
        ));
    } else if discriminant == T::zero() {
        hits.push(Vector::new(d * dy / dr2, -d * dx / dr2));
    } else {
        return None;
    }

    Some(hits)
}

/// `-1` for negative values, `1` otherwise (including zero).
fn sgn<T: Real>(value: T) -> T {
    if value < T::zero() {
        -T::one()
    } else {
        T::one()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn v(x: f64, y: f64) -> Vector<f64> {
        Vector::new(x, y)
    }

    #[test]
    fn sign_sides_and_on_line() {
        let a = v(0.0, 0.0);
        let ab = v(1.0, 0.0);
        assert!((sign(&a, &ab, &v(0.0, 1.0)) + 1.0).abs() < TOLERANCE);
        assert!((sign(&a, &ab, &v(0.0, -1.0)) - 1.0).abs() < TOLERANCE);
        assert!(sign(&a, &ab, &v(5.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn distance_is_signed() {
        let a = v(1.0, 1.0);
        let ab = v(3.0, 0.0);
        assert!((distance(&a, &ab, &v(4.0, 3.0)) + 2.0).abs() < TOLERANCE);
        assert!((distance(&a, &ab, &v(-7.0, -1.0)) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn distance_zero_direction_is_not_finite() {
        let d = distance(&v(0.0, 0.0), &v(0.0, 0.0), &v(1.0, 1.0));
        assert!(!d.is_finite());
    }

    #[test]
    fn project_beyond_segment_end() {
        let a = v(0.0, 0.0);
        let ab = v(2.0, 0.0);
        let p = v(3.0, 1.0);
        assert!((project_parameter(&a, &ab, &p) - 1.5).abs() < TOLERANCE);
        let projected = project(&a, &ab, &p);
        assert!((projected - v(3.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn project_before_start() {
        let a = v(1.0, 1.0);
        let ab = v(0.0, 2.0);
        assert!((project_parameter(&a, &ab, &v(5.0, -1.0)) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_line_perpendicular() {
        let hit = intersect_line(&v(0.0, 0.0), &v(1.0, 0.0), &v(0.5, -1.0), &v(0.0, 1.0)).unwrap();
        assert!((hit.t - 0.5).abs() < TOLERANCE);
        assert!((hit.point - v(0.5, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn line_line_parameter_unbounded() {
        let hit = intersect_line(&v(0.0, 0.0), &v(1.0, 1.0), &v(-10.0, -4.0), &v(1.0, 0.0)).unwrap();
        assert!((hit.t + 4.0).abs() < TOLERANCE);
        assert!((hit.point - v(-4.0, -4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn line_line_hit_lies_on_both_lines() {
        let cases = [
            (v(0.0, 0.0), v(1.0, 2.0), v(3.0, -1.0), v(-2.0, 5.0)),
            (v(-4.5, 2.0), v(0.3, -0.7), v(1.0, 1.0), v(1.0, 0.0)),
            (v(10.0, 10.0), v(-1.0, -1.0), v(0.0, 7.0), v(2.0, -3.0)),
            (v(0.1, 0.2), v(1e-3, 5.0), v(-3.0, 0.0), v(4.0, 0.1)),
        ];
        for (p, r, q, s) in cases {
            let hit = intersect_line(&p, &r, &q, &s).unwrap();
            assert!((hit.point - p).perp(&r).abs() < 1e-9, "off first line: {hit:?}");
            assert!((hit.point - q).perp(&s).abs() < 1e-9, "off second line: {hit:?}");
        }
    }

    #[test]
    fn line_line_parallel_returns_none() {
        assert!(intersect_line(&v(0.0, 0.0), &v(1.0, 0.0), &v(0.0, 1.0), &v(1.0, 0.0)).is_none());
        assert!(intersect_line(&v(0.0, 0.0), &v(1.0, 2.0), &v(5.0, 1.0), &v(-2.0, -4.0)).is_none());
    }

    #[test]
    fn line_line_coincident_returns_none() {
        let r = v(1.0, 1.0);
        assert!(intersect_line(&v(0.0, 0.0), &r, &v(2.0, 2.0), &r).is_none());
        assert!(intersect_line(&v(0.0, 0.0), &r, &v(0.0, 0.0), &r).is_none());
    }

    #[test]
    fn line_circle_two_crossings() {
        let hits = intersect_circle(1.0, &v(-2.0, 0.0), &v(2.0, 0.0)).unwrap();
        assert_eq!(hits.len(), 2);
        assert!((hits.points()[0] - v(1.0, 0.0)).norm() < TOLERANCE);
        assert!((hits.points()[1] - v(-1.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn line_circle_horizontal_order_follows_dx() {
        // dy == 0 counts as positive, so the first root follows the direction of travel.
        let hits = intersect_circle(1.0, &v(2.0, 0.0), &v(-2.0, 0.0)).unwrap();
        assert!((hits.points()[0] - v(-1.0, 0.0)).norm() < TOLERANCE);
        assert!((hits.points()[1] - v(1.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn line_circle_first_root_has_larger_y() {
        let down = intersect_circle(1.0, &v(0.0, 2.0), &v(0.0, -2.0)).unwrap();
        let up = intersect_circle(1.0, &v(0.0, -2.0), &v(0.0, 2.0)).unwrap();
        for hits in [down, up] {
            assert!((hits.points()[0] - v(0.0, 1.0)).norm() < TOLERANCE);
            assert!((hits.points()[1] - v(0.0, -1.0)).norm() < TOLERANCE);
        }
    }

    #[test]
    fn line_circle_diagonal_points_on_circle() {
        let hits = intersect_circle(2.0, &v(-3.0, 1.0), &v(1.0, 2.0)).unwrap();
        assert_eq!(hits.len(), 2);
        for p in &hits {
            assert!((p.norm() - 2.0).abs() < 1e-9);
            assert!((*p - v(-3.0, 1.0)).perp(&v(4.0, 1.0)).abs() < 1e-9);
        }
        assert!(hits.points()[0].y > hits.points()[1].y);
    }

    #[test]
    fn line_circle_tangent() {
        let hits = intersect_circle(1.0, &v(-2.0, 1.0), &v(2.0, 1.0)).unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits.points()[0] - v(0.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn line_circle_miss() {
        assert!(intersect_circle(1.0, &v(-2.0, 3.0), &v(2.0, 3.0)).is_none());
    }

    #[test]
    fn line_circle_single_precision() {
        let hits = intersect_circle(1.0_f32, &Vector::new(-2.0, 0.0), &Vector::new(2.0, 0.0)).unwrap();
        assert_eq!(hits.len(), 2);
        assert!((hits.points()[0].x - 1.0).abs() < 1e-6);
    }
}
