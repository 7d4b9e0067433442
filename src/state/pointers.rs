use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::config::PinchMetric;

/// More simultaneous pointers than this are ignored until one is released.
pub const MAX_TRACKED_POINTERS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub i32);

/// Latest known position of one pointer, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            x,
            y,
        }
    }
}

/// Pointers currently held down, in arrival order, plus the pinch baseline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerTracker {
    pointers: IndexMap<PointerId, PointerSample>,
    /// Distance between the pair at the last pinch sample. `None` until a
    /// pair has been sampled once since the membership last changed.
    previous_distance: Option<f64>,
}

impl PointerTracker {
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    #[cfg(test)]
    pub fn get(&self, id: PointerId) -> Option<&PointerSample> {
        self.pointers.get(&id)
    }

    pub fn previous_distance(&self) -> Option<f64> {
        self.previous_distance
    }

    /// Start tracking a pointer. A pointer that is already tracked keeps its
    /// place in the arrival order and only has its position refreshed.
    /// Returns `false` when the tracker is full.
    pub fn press(&mut self, sample: PointerSample) -> bool {
        if let Some(slot) = self.pointers.get_mut(&sample.id) {
            *slot = sample;
            return true;
        }
        if self.pointers.len() >= MAX_TRACKED_POINTERS {
            return false;
        }
        self.pointers.insert(sample.id, sample);
        self.previous_distance = None;
        true
    }

    /// Refresh the position of a tracked pointer. Untracked ids are ignored.
    pub fn update(&mut self, sample: PointerSample) -> bool {
        match self.pointers.get_mut(&sample.id) {
            Some(slot) => {
                *slot = sample;
                true
            }
            None => false,
        }
    }

    /// Stop tracking a pointer, preserving the order of the rest.
    /// Releasing an untracked id changes nothing.
    pub fn release(&mut self, id: PointerId) -> Option<PointerSample> {
        let removed = self.pointers.shift_remove(&id)?;
        self.previous_distance = None;
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
        self.previous_distance = None;
    }

    /// Compare the current pair distance with the previous sample and store it
    /// as the new baseline.
    ///
    /// Returns `None` unless exactly two pointers are tracked and a positive
    /// baseline already exists.
    pub fn pinch_sample(&mut self, metric: PinchMetric) -> Option<Ordering> {
        if self.pointers.len() != 2 {
            return None;
        }
        let (a, b) = (self.pointers[0], self.pointers[1]);
        let current = metric.distance((a.x, a.y), (b.x, b.y));
        let previous = self.previous_distance.replace(current);
        match previous {
            Some(prev) if prev > 0.0 => current.partial_cmp(&prev),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(id: i32, x: f64) -> PointerSample {
        PointerSample::new(id, x, 0.0)
    }

    #[test]
    fn release_unknown_id_is_noop() {
        let mut t = PointerTracker::default();
        t.press(s(1, 10.0));
        t.press(s(2, 50.0));
        assert!(t.release(PointerId(99)).is_none());
        assert_eq!(t.len(), 2);
        assert!(t.contains(PointerId(1)));
        assert!(t.contains(PointerId(2)));
    }

    #[test]
    fn release_on_empty_tracker() {
        let mut t = PointerTracker::default();
        assert!(t.release(PointerId(0)).is_none());
        assert!(t.is_empty());
    }

    #[test]
    fn update_matches_by_id_not_position() {
        let mut t = PointerTracker::default();
        t.press(s(7, 10.0));
        t.press(s(3, 50.0));
        assert!(t.update(s(3, 80.0)));
        assert_eq!(t.get(PointerId(7)).unwrap().x, 10.0);
        assert_eq!(t.get(PointerId(3)).unwrap().x, 80.0);
        assert!(!t.update(s(4, 1.0)));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn first_pair_sample_only_sets_baseline() {
        let mut t = PointerTracker::default();
        t.press(s(1, 0.0));
        t.press(s(2, 100.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), None);
        assert_eq!(t.previous_distance(), Some(100.0));

        t.update(s(2, 120.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), Some(Ordering::Greater));
        t.update(s(2, 90.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), Some(Ordering::Less));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), Some(Ordering::Equal));
    }

    #[test]
    fn zero_baseline_yields_no_delta() {
        let mut t = PointerTracker::default();
        t.press(s(1, 40.0));
        t.press(s(2, 40.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), None);
        t.update(s(2, 60.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), None);
        assert_eq!(t.previous_distance(), Some(20.0));
    }

    #[test]
    fn no_pinch_unless_exactly_two() {
        let mut t = PointerTracker::default();
        t.press(s(1, 0.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), None);
        assert_eq!(t.previous_distance(), None);
        t.press(s(2, 10.0));
        t.press(s(3, 30.0));
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), None);
        assert_eq!(t.previous_distance(), None);
    }

    #[test]
    fn release_invalidates_baseline_and_keeps_order() {
        let mut t = PointerTracker::default();
        t.press(s(1, 0.0));
        t.press(s(2, 10.0));
        t.press(s(3, 50.0));
        t.release(PointerId(2));
        assert_eq!(t.previous_distance(), None);
        // pair is now (1, 3) in arrival order
        assert_eq!(t.pinch_sample(PinchMetric::Horizontal), None);
        assert_eq!(t.previous_distance(), Some(50.0));
    }

    #[test]
    fn capacity_is_bounded() {
        let mut t = PointerTracker::default();
        for id in 0..MAX_TRACKED_POINTERS as i32 {
            assert!(t.press(s(id, id as f64)));
        }
        assert!(!t.press(s(100, 0.0)));
        assert_eq!(t.len(), MAX_TRACKED_POINTERS);
        // re-pressing a tracked id still works when full
        assert!(t.press(s(0, 5.0)));
        assert_eq!(t.len(), MAX_TRACKED_POINTERS);
    }
}
