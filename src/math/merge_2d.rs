use super::{Real, Vector};

/// Collapses runs of near-duplicate points in place.
///
/// Each point is compared with the last point kept, not with every kept
/// point, so near-duplicates that are not adjacent survive. Returns the number
/// of kept points; they occupy the front of `points`, and whatever follows that
/// prefix is left over from the input.
#[must_use]
pub fn merge_points<T: Real>(points: &mut [Vector<T>], margin: T) -> usize {
    if points.is_empty() {
        return 0;
    }

    let mut kept = 0;
    for i in 1..points.len() {
        if (points[kept] - points[i]).norm() > margin {
            kept += 1;
            points[kept] = points[i];
        }
    }
    kept + 1
}
