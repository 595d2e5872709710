use super::{Real, Vector};

/// Fixed-capacity buffer of intersection points with an explicit count.
///
/// Only the first [`len`](Hits::len) slots are meaningful.
#[derive(Debug, Clone, Copy)]
pub struct Hits<T: Real, const N: usize> {
    points: [Vector<T>; N],
    len: usize,
}

/// Up to two points: line/segment against a circle.
pub type CircleHits<T> = Hits<T, 2>;

/// Up to eight points: four rectangle edges, two points each, before merging.
pub type RectangleHits<T> = Hits<T, 8>;

impl<T: Real, const N: usize> Hits<T, N> {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: [Vector::zeros(); N],
            len: 0,
        }
    }

    /// Number of valid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of points the buffer holds.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The valid points, in the order they were produced.
    #[must_use]
    pub fn points(&self) -> &[Vector<T>] {
        &self.points[..self.len]
    }

    #[must_use]
    pub fn first(&self) -> Option<&Vector<T>> {
        self.points().first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Vector<T>> {
        self.points().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.points().iter()
    }

    pub(crate) fn from_point(point: Vector<T>) -> Self {
        let mut hits = Self::new();
        hits.push(point);
        hits
    }

    /// Appends a point. Callers size `N` for the worst case, so a full
    /// buffer is a logic error; the point is dropped in release builds.
    pub(crate) fn push(&mut self, point: Vector<T>) {
        debug_assert!(self.len < N, "hit buffer of capacity {} overflowed", N);
        if let Some(slot) = self.points.get_mut(self.len) {
            *slot = point;
            self.len += 1;
        }
    }

    pub(crate) fn extend_from_slice(&mut self, points: &[Vector<T>]) {
        for point in points {
            self.push(*point);
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Vector<T>] {
        &mut self.points[..self.len]
    }
}

impl<T: Real, const N: usize> Default for Hits<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real, const N: usize> PartialEq for Hits<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.points() == other.points()
    }
}

impl<'a, T: Real, const N: usize> IntoIterator for &'a Hits<T, N> {
    type Item = &'a Vector<T>;
    type IntoIter = std::slice::Iter<'a, Vector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
