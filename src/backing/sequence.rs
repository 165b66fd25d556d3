//! Ordered (indexed) sequence contract.

use core::marker::PhantomData;
use std::collections::VecDeque;

use crate::violation::{Violation, require};

/// An abstraction over position-indexed sequences.
///
/// Positions run from `0` (the first entry) to `len() - 1`. Every out-of-range
/// position is a precondition violation.
pub trait AnySequence<T>: Default {
    /// Returns the number of entries.
    fn len(&self) -> usize;
    /// Returns `true` if the sequence holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Inserts `item` so that it ends up at `index`, shifting later entries up.
    /// Valid for `index <= len()`.
    fn add(&mut self, index: usize, item: T);
    /// Removes and returns the entry at `index`, shifting later entries down.
    fn remove(&mut self, index: usize) -> T;
    /// Returns the entry at `index`.
    fn entry(&self, index: usize) -> &T;
    /// Replaces the entry at `index` with `item`, returning the old entry.
    fn replace_entry(&mut self, index: usize, item: T) -> T;
    /// Walks the entries from position 0 upward.
    fn iter_positions(&self) -> SequenceIter<'_, T, Self>
    where
        Self: Sized,
    {
        SequenceIter {
            entries: self,
            position: 0,
            _entry: PhantomData,
        }
    }
}

/// Position-walking iterator over an [`AnySequence`].
pub struct SequenceIter<'a, T, S: AnySequence<T>> {
    entries: &'a S,
    position: usize,
    _entry: PhantomData<&'a T>,
}

impl<'a, T: 'a, S: AnySequence<T>> Iterator for SequenceIter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.position < self.entries.len() {
            let entry = self.entries.entry(self.position);
            self.position += 1;
            Some(entry)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, T: 'a, S: AnySequence<T>> ExactSizeIterator for SequenceIter<'a, T, S> {}

impl<T> AnySequence<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    #[track_caller]
    fn add(&mut self, index: usize, item: T) {
        let len = self.len();
        require(index <= len, Violation::IndexOutOfBounds { index, len });
        self.insert(index, item);
    }

    #[track_caller]
    fn remove(&mut self, index: usize) -> T {
        let len = self.len();
        require(index < len, Violation::IndexOutOfBounds { index, len });
        self.remove(index)
    }

    #[track_caller]
    fn entry(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| Violation::IndexOutOfBounds { index, len }.raise())
    }

    #[track_caller]
    fn replace_entry(&mut self, index: usize, item: T) -> T {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => core::mem::replace(slot, item),
            None => Violation::IndexOutOfBounds { index, len }.raise(),
        }
    }
}

impl<T> AnySequence<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    #[track_caller]
    fn add(&mut self, index: usize, item: T) {
        let len = self.len();
        require(index <= len, Violation::IndexOutOfBounds { index, len });
        self.insert(index, item);
    }

    #[track_caller]
    fn remove(&mut self, index: usize) -> T {
        let len = self.len();
        self.remove(index)
            .unwrap_or_else(|| Violation::IndexOutOfBounds { index, len }.raise())
    }

    #[track_caller]
    fn entry(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| Violation::IndexOutOfBounds { index, len }.raise())
    }

    #[track_caller]
    fn replace_entry(&mut self, index: usize, item: T) -> T {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => core::mem::replace(slot, item),
            None => Violation::IndexOutOfBounds { index, len }.raise(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_sequence<S: AnySequence<char>>() {
        let mut s = S::default();
        s.add(0, 'b');
        s.add(0, 'a');
        s.add(2, 'd');
        s.add(2, 'c');
        assert_eq!(s.len(), 4);
        assert_eq!(*s.entry(0), 'a');
        assert_eq!(*s.entry(3), 'd');

        assert_eq!(s.replace_entry(1, 'B'), 'b');
        assert_eq!(*s.entry(1), 'B');

        assert_eq!(s.remove(0), 'a');
        assert_eq!(s.remove(s.len() - 1), 'd');
        assert_eq!(s.len(), 2);
        assert_eq!(*s.entry(0), 'B');
        assert_eq!(*s.entry(1), 'c');
    }

    #[test]
    fn test_sequence_iter_positions_walks_positions() {
        let s: VecDeque<i32> = (1..=3).collect();
        let mut it = s.iter_positions();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.len(), 2);
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_sequence_vec_backend() {
        check_sequence::<Vec<char>>();
    }

    #[test]
    fn test_sequence_vec_deque_backend() {
        check_sequence::<VecDeque<char>>();
    }

    #[test]
    #[should_panic(expected = "index 3 is out of bounds for length 2")]
    fn test_sequence_add_past_end() {
        let mut s = vec![1, 2];
        AnySequence::add(&mut s, 3, 9);
    }

    #[test]
    #[should_panic(expected = "index 0 is out of bounds for length 0")]
    fn test_sequence_remove_from_empty() {
        let mut s: VecDeque<i32> = VecDeque::new();
        AnySequence::remove(&mut s, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_sequence_entry_out_of_range() {
        let s = vec![1];
        AnySequence::entry(&s, 1);
    }
}
