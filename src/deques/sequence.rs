//! Deque delegating to an ordered-sequence collaborator.
//!
//! Every kernel operation is a single positional call on the backing sequence:
//! `add(0, x)`, `add(len, x)`, `remove(0)`, `remove(len - 1)`. The costs are whatever
//! the sequence charges for those positions (`Vec`: O(n) at the front, `VecDeque`: O(1)
//! at both ends).

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use super::kernel::{Deque, DequeKernel, write_angled};
use crate::backing::{AnySequence, SequenceIter};
use crate::violation::{Violation, require};

/// A deque stored in an [`AnySequence`], front at position 0.
pub struct SequenceDeque<T, S: AnySequence<T> = Vec<T>> {
    entries: S,
    _entry: PhantomData<T>,
}

impl<T, S: AnySequence<T>> SequenceDeque<T, S> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            entries: S::default(),
            _entry: PhantomData,
        }
    }

    /// Returns the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the deque is `<>`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only front-to-back iterator.
    pub fn iter(&self) -> SequenceIter<'_, T, S> {
        self.entries.iter_positions()
    }

    /// Returns the entry at `index` (0 = front), or `None` past the back.
    pub fn get(&self, index: usize) -> Option<&T> {
        (index < self.entries.len()).then(|| self.entries.entry(index))
    }

    #[track_caller]
    fn last_index(&self) -> usize {
        require(!self.entries.is_empty(), Violation::EmptyDeque);
        self.entries.len() - 1
    }
}

impl<T, S: AnySequence<T>> DequeKernel<T> for SequenceDeque<T, S> {
    type Iter<'a>
        = SequenceIter<'a, T, S>
    where
        Self: 'a,
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push_front(&mut self, x: T) {
        self.entries.add(0, x);
    }

    fn push_back(&mut self, x: T) {
        let len = self.entries.len();
        self.entries.add(len, x);
    }

    #[track_caller]
    fn pop_front(&mut self) -> T {
        require(!self.entries.is_empty(), Violation::EmptyDeque);
        self.entries.remove(0)
    }

    #[track_caller]
    fn pop_back(&mut self) -> T {
        let last = self.last_index();
        self.entries.remove(last)
    }

    fn clear(&mut self) {
        self.entries = S::default();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.entries = core::mem::take(&mut source.entries);
    }

    fn iter(&mut self) -> Self::Iter<'_> {
        SequenceDeque::iter(self)
    }
}

impl<T, S: AnySequence<T>> Deque<T> for SequenceDeque<T, S> {
    #[track_caller]
    fn front(&mut self) -> &T {
        require(!self.entries.is_empty(), Violation::EmptyDeque);
        self.entries.entry(0)
    }

    #[track_caller]
    fn back(&mut self) -> &T {
        let last = self.last_index();
        self.entries.entry(last)
    }

    #[track_caller]
    fn replace_front(&mut self, x: T) -> T {
        require(!self.entries.is_empty(), Violation::EmptyDeque);
        self.entries.replace_entry(0, x)
    }

    #[track_caller]
    fn replace_back(&mut self, x: T) -> T {
        let last = self.last_index();
        self.entries.replace_entry(last, x)
    }
}

impl<T, S: AnySequence<T>> Default for SequenceDeque<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: AnySequence<T> + Clone> Clone for SequenceDeque<T, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _entry: PhantomData,
        }
    }
}

impl<T: fmt::Debug, S: AnySequence<T>> fmt::Debug for SequenceDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S: AnySequence<T>> fmt::Display for SequenceDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_angled(f, self.iter())
    }
}

impl<T: PartialEq, S: AnySequence<T>> PartialEq for SequenceDeque<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
impl<T: Eq, S: AnySequence<T>> Eq for SequenceDeque<T, S> {}

impl<T: Hash, S: AnySequence<T>> Hash for SequenceDeque<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

impl<T, S: AnySequence<T>> Extend<T> for SequenceDeque<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }
}

impl<T, S: AnySequence<T>> FromIterator<T> for SequenceDeque<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
