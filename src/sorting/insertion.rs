//! Sorting machine over an ordered sequence that is kept sorted on every `add`.
//!
//! The position for a new entry is found by binary search, so `add` costs
//! O(log n) comparisons plus whatever the sequence charges to insert, and
//! `remove_first` is a removal at position 0.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use super::kernel::{Mode, Order, SortingMachine, SortingMachineKernel, write_machine};
use crate::backing::{AnySequence, SequenceIter};
use crate::violation::{Violation, require};

/// Returns the first position in the sorted `entries` whose entry `x` precedes
/// strictly, so `x` lands after every entry equal to it.
///
/// # Pseudo Code:
/// ```text
/// low = 0, high = len
/// while low < high:
///     mid = low + (high - low) / 2
///     if x < entries[mid]: high = mid
///     else:                low = mid + 1
/// return low
/// ```
pub fn upper_bound<T, O: Order<T>, S: AnySequence<T>>(entries: &S, x: &T, order: &O) -> usize {
    let mut low = 0;
    let mut high = entries.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if order.compare(x, entries.entry(mid)).is_lt() {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

/// A sorting machine kept sorted in an [`AnySequence`].
pub struct InsertionSortMachine<T, O, S: AnySequence<T> = Vec<T>> {
    mode: Mode,
    order: O,
    entries: S,
    _entry: PhantomData<T>,
}

impl<T, O: Order<T>, S: AnySequence<T>> InsertionSortMachine<T, O, S> {
    /// Creates an empty machine in insertion mode.
    pub fn new(order: O) -> Self {
        Self {
            mode: Mode::Insertion,
            order,
            entries: S::default(),
            _entry: PhantomData,
        }
    }
}

impl<T, O: Order<T>, S: AnySequence<T>> SortingMachineKernel<T> for InsertionSortMachine<T, O, S> {
    type Order = O;
    type Iter<'a>
        = SequenceIter<'a, T, S>
    where
        Self: 'a,
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new(self.order.clone())
    }

    #[track_caller]
    fn add(&mut self, x: T) {
        require(self.mode == Mode::Insertion, Violation::NotInInsertionMode);
        let position = upper_bound(&self.entries, &x, &self.order);
        self.entries.add(position, x);
    }

    #[track_caller]
    fn change_to_extraction_mode(&mut self) {
        require(self.mode == Mode::Insertion, Violation::NotInInsertionMode);
        self.mode = Mode::Extraction;
    }

    #[track_caller]
    fn remove_first(&mut self) -> T {
        require(self.mode == Mode::Extraction, Violation::NotInExtractionMode);
        require(!self.entries.is_empty(), Violation::EmptyMachine);
        self.entries.remove(0)
    }

    fn is_in_insertion_mode(&self) -> bool {
        self.mode == Mode::Insertion
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn order(&self) -> &O {
        &self.order
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.mode = Mode::Insertion;
        self.entries = S::default();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.mode = core::mem::take(&mut source.mode);
        self.order = source.order.clone();
        self.entries = core::mem::take(&mut source.entries);
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter_positions()
    }
}

impl<T, O: Order<T>, S: AnySequence<T>> SortingMachine<T> for InsertionSortMachine<T, O, S> {}

impl<T, O: Order<T>, S: AnySequence<T> + Clone> Clone for InsertionSortMachine<T, O, S> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            order: self.order.clone(),
            entries: self.entries.clone(),
            _entry: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O: Order<T>, S: AnySequence<T>> fmt::Debug for InsertionSortMachine<T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionSortMachine")
            .field("mode", &self.mode)
            .field("entries", &self.entries.iter_positions().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Display, O: Order<T>, S: AnySequence<T>> fmt::Display for InsertionSortMachine<T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_machine(f, self.mode == Mode::Insertion, self.entries.iter_positions())
    }
}

impl<T: Hash + Eq, O: Order<T>, S: AnySequence<T>> PartialEq for InsertionSortMachine<T, O, S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries_eq(other)
    }
}

impl<T, O: Order<T>, S: AnySequence<T>> Extend<T> for InsertionSortMachine<T, O, S> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}
