//! Rotating selection cursor
//!
//! An index into a fixed, non-empty list that advances circularly. Every
//! advance also bumps an epoch counter so consumers can key enter/exit
//! transitions on the event rather than on the value: advancing a
//! single-item list still yields a new epoch.

/// Circular cursor over a fixed list of items
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionCursor<T> {
    items: Vec<T>,
    index: usize,
    epoch: u64,
}

impl<T> SelectionCursor<T> {
    /// Create a cursor at index 0. Returns `None` for an empty list.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            index: 0,
            epoch: 0,
        })
    }

    /// Item under the cursor
    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    /// Move to the next item, wrapping to the start, and return it
    pub fn advance(&mut self) -> &T {
        self.index = (self.index + 1) % self.items.len();
        self.epoch = self.epoch.wrapping_add(1);
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of advances since construction
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a cursor cannot be built over an empty list
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(SelectionCursor::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_starts_at_first_item() {
        let cursor = SelectionCursor::new(vec!["A", "B", "C"]).unwrap();
        assert_eq!(cursor.index(), 0);
        assert_eq!(*cursor.current(), "A");
        assert_eq!(cursor.epoch(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut cursor = SelectionCursor::new(vec!["A", "B", "C"]).unwrap();
        assert_eq!(*cursor.advance(), "B");
        assert_eq!(*cursor.advance(), "C");
        assert_eq!(*cursor.advance(), "A");
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_current_does_not_mutate() {
        let mut cursor = SelectionCursor::new(vec![1, 2]).unwrap();
        cursor.advance();
        let before = cursor.clone();
        assert_eq!(*cursor.current(), 2);
        assert_eq!(*cursor.current(), 2);
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_single_item_advance_is_noop() {
        let mut cursor = SelectionCursor::new(vec!["A"]).unwrap();
        for _ in 0..5 {
            assert_eq!(*cursor.advance(), "A");
            assert_eq!(cursor.index(), 0);
        }
    }

    #[test]
    fn test_epoch_counts_every_advance() {
        let mut single = SelectionCursor::new(vec!["A"]).unwrap();
        single.advance();
        single.advance();
        assert_eq!(single.epoch(), 2);

        let mut many = SelectionCursor::new(vec![1, 2, 3]).unwrap();
        for expected in 1..=7 {
            many.advance();
            assert_eq!(many.epoch(), expected);
        }
        assert_eq!(many.index(), 7 % 3);
    }

    #[test]
    fn test_items_are_untouched() {
        let mut cursor = SelectionCursor::new(vec!['x', 'y', 'z']).unwrap();
        cursor.advance();
        assert_eq!(cursor.items(), &['x', 'y', 'z']);
        assert_eq!(cursor.len(), 3);
        assert!(!cursor.is_empty());
    }
}
