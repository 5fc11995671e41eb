use std::cmp::Ordering;

/// Sort key for one sortable primitive.
///
/// Ordering rules:
/// 1) `depth`: descending (farthest first, back-to-front)
/// 2) `order`: ascending (insertion order for equal depth)
#[derive(Debug, Copy, Clone)]
pub struct SortKey {
    /// Squared distance from the view origin to the primitive centroid.
    pub depth: f32,
    /// Index of the primitive within its bucket.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(depth: f32, order: u32) -> Self {
        Self { depth, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match other.depth.total_cmp(&self.depth) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farther_sorts_first() {
        assert!(SortKey::new(25.0, 3) < SortKey::new(1.0, 0));
    }

    #[test]
    fn equal_depth_keeps_insertion_order() {
        assert!(SortKey::new(4.0, 0) < SortKey::new(4.0, 1));
    }
}
