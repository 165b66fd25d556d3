//! FIFO queue contract.

use std::collections::VecDeque;
use std::collections::vec_deque;

/// An abstraction over FIFO queue types.
pub trait AnyQueue<T>: Default {
    /// Front-to-back iterator.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of entries in the queue.
    fn len(&self) -> usize;
    /// Returns `true` if the queue holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Adds `item` at the back.
    fn enqueue(&mut self, item: T);
    /// Removes and returns the front entry, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;
    /// Returns the front entry without removing it, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Removes all entries.
    fn clear(&mut self);
    /// Moves every entry of `source` into `self`, replacing what `self` held and
    /// leaving `source` empty.
    fn transfer_from(&mut self, source: &mut Self) {
        *self = core::mem::take(source);
    }
    /// Iterates from front to back.
    fn iter_from_front(&self) -> Self::Iter<'_>;
}

impl<T> AnyQueue<T> for VecDeque<T> {
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len()
    }
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn iter_from_front(&self) -> Self::Iter<'_> {
        self.iter()
    }
}
