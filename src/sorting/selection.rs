//! Sorting machine over an ordered sequence that defers every comparison to
//! extraction.
//!
//! `add` appends and switching modes does nothing but flip the mode. Each
//! `remove_first` scans the whole sequence for the first minimal entry, so iteration
//! in extraction mode shows the insertion order, not a sorted one.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use super::kernel::{Mode, Order, SortingMachine, SortingMachineKernel, write_machine};
use crate::backing::{AnySequence, SequenceIter};
use crate::violation::{Violation, require};

/// Returns the position of the first entry of `entries` that no other entry precedes
/// under `order`, or `None` if `entries` is empty.
pub fn position_of_min<T, O: Order<T>, S: AnySequence<T>>(entries: &S, order: &O) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    let mut min = 0;
    for i in 1..entries.len() {
        if order.compare(entries.entry(i), entries.entry(min)).is_lt() {
            min = i;
        }
    }
    Some(min)
}

/// A sorting machine kept, unsorted, in an [`AnySequence`].
pub struct SelectionSortMachine<T, O, S: AnySequence<T> = Vec<T>> {
    mode: Mode,
    order: O,
    entries: S,
    _entry: PhantomData<T>,
}

impl<T, O: Order<T>, S: AnySequence<T>> SelectionSortMachine<T, O, S> {
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

impl<T, O: Order<T>, S: AnySequence<T>> SortingMachineKernel<T> for SelectionSortMachine<T, O, S> {
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
        let len = self.entries.len();
        self.entries.add(len, x);
    }

    #[track_caller]
    fn change_to_extraction_mode(&mut self) {
        require(self.mode == Mode::Insertion, Violation::NotInInsertionMode);
        self.mode = Mode::Extraction;
    }

    #[track_caller]
    fn remove_first(&mut self) -> T {
        require(self.mode == Mode::Extraction, Violation::NotInExtractionMode);
        let min = position_of_min(&self.entries, &self.order)
            .unwrap_or_else(|| Violation::EmptyMachine.raise());
        self.entries.remove(min)
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

impl<T, O: Order<T>, S: AnySequence<T>> SortingMachine<T> for SelectionSortMachine<T, O, S> {}

impl<T, O: Order<T>, S: AnySequence<T> + Clone> Clone for SelectionSortMachine<T, O, S> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            order: self.order.clone(),
            entries: self.entries.clone(),
            _entry: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O: Order<T>, S: AnySequence<T>> fmt::Debug for SelectionSortMachine<T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSortMachine")
            .field("mode", &self.mode)
            .field("entries", &self.entries.iter_positions().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Display, O: Order<T>, S: AnySequence<T>> fmt::Display for SelectionSortMachine<T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_machine(f, self.mode == Mode::Insertion, self.entries.iter_positions())
    }
}

impl<T: Hash + Eq, O: Order<T>, S: AnySequence<T>> PartialEq for SelectionSortMachine<T, O, S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries_eq(other)
    }
}

impl<T, O: Order<T>, S: AnySequence<T>> Extend<T> for SelectionSortMachine<T, O, S> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::kernel::natural_order;
    use std::collections::VecDeque;

    #[test]
    fn test_selection_machine_extracts_in_order() {
        let ignore_case = |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase());
        let mut m: SelectionSortMachine<&str, _> = SelectionSortMachine::new(ignore_case);
        m.add_all(["red", "GREEN", "Blue"]);
        m.change_to_extraction_mode();
        assert_eq!(m.drain_sorted(), vec!["Blue", "GREEN", "red"]);
    }

    #[test]
    fn test_selection_machine_iter_keeps_insertion_order() {
        let mut m: SelectionSortMachine<i32, _> = SelectionSortMachine::new(natural_order::<i32>);
        m.add_all([4, 1, 3]);
        m.change_to_extraction_mode();
        // Switching does no work; nothing moves until a removal.
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![4, 1, 3]);
        assert_eq!(m.remove_first(), 1);
        assert_eq!(m.to_string(), "(false,{4,3})");
    }

    #[test]
    fn test_selection_position_of_min_picks_first() {
        let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let entries = vec![(2, 'a'), (1, 'b'), (1, 'c')];
        assert_eq!(position_of_min(&entries, &by_key), Some(1));
        let empty: Vec<(u8, char)> = Vec::new();
        assert_eq!(position_of_min(&empty, &by_key), None);
    }

    #[test]
    fn test_selection_machine_vec_deque_backend() {
        let mut m: SelectionSortMachine<i32, _, VecDeque<i32>> =
            SelectionSortMachine::new(|a: &i32, b: &i32| b.cmp(a));
        m.extend([2, 9, 5]);
        assert_eq!(m.drain_sorted(), vec![9, 5, 2]);
        assert!(!m.is_in_insertion_mode());
    }

    #[test]
    fn test_selection_machine_transfer() {
        let mut source: SelectionSortMachine<i32, _> =
            SelectionSortMachine::new(natural_order::<i32>);
        source.add_all([3, 2]);
        source.change_to_extraction_mode();
        let mut dest = source.new_instance();
        dest.add(100);
        dest.transfer_from(&mut source);

        assert!(source.is_in_insertion_mode());
        assert!(source.is_empty());
        assert_eq!(dest.mode(), Mode::Extraction);
        assert_eq!(dest.drain_sorted(), vec![2, 3]);
    }

    #[test]
    #[should_panic(expected = "sorting machine is empty")]
    fn test_selection_machine_remove_from_empty_panics() {
        let mut m: SelectionSortMachine<i32, _> = SelectionSortMachine::new(natural_order::<i32>);
        m.change_to_extraction_mode();
        m.remove_first();
    }

    #[test]
    #[should_panic(expected = "sorting machine is not in insertion mode")]
    fn test_selection_machine_second_switch_panics() {
        let mut m: SelectionSortMachine<i32, _> = SelectionSortMachine::new(natural_order::<i32>);
        m.change_to_extraction_mode();
        m.change_to_extraction_mode();
    }
}
