//! Bounded FIFO sample history.

use std::collections::VecDeque;

/// A fixed-capacity buffer that evicts its oldest entry once full.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// Create an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest one when full.
    ///
    /// A zero-capacity history stays empty.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no entries have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once the history has reached its capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Entry by position, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Newest entry.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// A window of exactly `n` slots ending at the newest entry.
    #[must_use]
    pub fn recent(&self, n: usize) -> Window<'_, T> {
        Window {
            history: self,
            len: n,
        }
    }
}

impl<T> Extend<T> for History<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// The last `len` slots of a [`History`].
///
/// Slot 0 is the oldest slot of the window. Slots that reach back before the
/// first recorded entry are empty.
#[derive(Debug)]
pub struct Window<'a, T> {
    history: &'a History<T>,
    len: usize,
}

impl<'a, T> Window<'a, T> {
    /// Number of slots, filled or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-slot window.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entry at window slot `i`, or `None` if the slot predates the history.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&'a T> {
        if i >= self.len {
            return None;
        }
        let missing = self.len.saturating_sub(self.history.len());
        let index = i.checked_sub(missing)?;
        let skip = self.history.len().saturating_sub(self.len);
        self.history.get(skip + index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut h = History::new(3);
        h.extend([1, 2, 3]);
        assert!(h.is_full());
        assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut h = History::new(3);
        h.extend(1..=5);
        assert_eq!(h.len(), 3);
        assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(h.latest(), Some(&5));
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut h = History::new(0);
        h.push("x");
        assert!(h.is_empty());
    }

    #[test]
    fn test_recent_shorter_than_history() {
        let mut h = History::new(10);
        h.extend(0..6);
        let w = h.recent(3);
        assert_eq!(w.get(0), Some(&3));
        assert_eq!(w.get(2), Some(&5));
        assert_eq!(w.get(3), None);
    }

    #[test]
    fn test_recent_longer_than_history_pads_front() {
        let mut h = History::new(10);
        h.extend([7, 8]);
        let w = h.recent(4);
        assert_eq!(w.len(), 4);
        assert_eq!(w.get(0), None);
        assert_eq!(w.get(1), None);
        assert_eq!(w.get(2), Some(&7));
        assert_eq!(w.get(3), Some(&8));
    }

    #[test]
    fn test_recent_of_empty_history() {
        let h: History<f64> = History::new(5);
        let w = h.recent(2);
        assert!((0..2).all(|i| w.get(i).is_none()));
    }
}
