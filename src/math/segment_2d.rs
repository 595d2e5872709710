//! Bounded intersection tests: segments and rays.
//!
//! All three crossing tests solve `p + r * t = q + s * u` with the same cross
//! ratios as [`line_2d::intersect_line`](super::line_2d::intersect_line) and
//! differ only in which parameter ranges they accept. Parameters are checked
//! with closed bounds, so touching an endpoint counts as a hit.

use super::line_2d::{self, LineIntersection};
use super::{CircleHits, Real, Vector};

/// Crossing of segments `p → p + r` and `q → q + s`.
///
/// Returns `None` when the directions are parallel or either parameter falls
/// outside `[0, 1]`.
#[must_use]
pub fn intersect_segment<T: Real>(
    p: &Vector<T>,
    r: &Vector<T>,
    q: &Vector<T>,
    s: &Vector<T>,
) -> Option<Vector<T>> {
    let pq = *q - *p;
    let v = r.perp(s);
    if v == T::zero() {
        return None;
    }

    let u = pq.perp(r) / v;
    if outside_unit_interval(u) {
        return None;
    }

    let t = pq.perp(s) / v;
    if outside_unit_interval(t) {
        return None;
    }

    Some(*p + *r * t)
}

/// Crossing of segment `p → p + r` with the ray starting at `q` along `s`.
///
/// The ray parameter must be non-negative, the segment parameter in `[0, 1]`.
#[must_use]
pub fn intersect_ray<T: Real>(
    p: &Vector<T>,
    r: &Vector<T>,
    q: &Vector<T>,
    s: &Vector<T>,
) -> Option<Vector<T>> {
    let pq = *q - *p;
    let v = r.perp(s);
    if v == T::zero() {
        return None;
    }

    let u = pq.perp(r) / v;
    if u < T::zero() {
        return None;
    }

    let t = pq.perp(s) / v;
    if outside_unit_interval(t) {
        return None;
    }

    Some(*p + *r * t)
}

/// Crossing of segment `p → p + r` with the infinite line through `q` along `s`.
///
/// Only the segment parameter is bounded; it is returned with the point.
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
    if outside_unit_interval(t) {
        return None;
    }

    Some(LineIntersection {
        point: *p + *r * t,
        t,
    })
}

/// Intersection of the segment `s → t` with the circle of `radius` centred at
/// the origin.
///
/// Candidates come from [`line_2d::intersect_circle`] and keep their order;
/// those not lying between `s` and `t` are dropped. Returns `None` when no
/// candidate survives.
#[must_use]
pub fn intersect_circle<T: Real>(radius: T, s: &Vector<T>, t: &Vector<T>) -> Option<CircleHits<T>> {
    let candidates = line_2d::intersect_circle(radius, s, t)?;

    let st = *t - *s;
    let within = |v: &Vector<T>| (*v - *s).dot(&st) >= T::zero() && (*v - *t).dot(&st) <= T::zero();

    match candidates.points() {
        [first, second] => match (within(first), within(second)) {
            (true, true) => Some(candidates),
            (true, false) => Some(CircleHits::from_point(*first)),
            (false, true) => Some(CircleHits::from_point(*second)),
            (false, false) => None,
        },
        [tangent] => within(tangent).then_some(candidates),
        _ => None,
    }
}

fn outside_unit_interval<T: Real>(value: T) -> bool {
    value < T::zero() || value > T::one()
}
