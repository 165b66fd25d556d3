//! Sorting machine over a FIFO queue, sorted by top-down merge sort on the switch to
//! extraction mode.
//!
//! `add` is an enqueue and `remove_first` a dequeue; all of the ordering work happens
//! once, in [`change_to_extraction_mode`](SortingMachineKernel::change_to_extraction_mode).

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use std::collections::VecDeque;

use super::kernel::{Mode, Order, SortingMachine, SortingMachineKernel, write_machine};
use crate::backing::AnyQueue;
use crate::violation::{Violation, require};

/// Sorts `entries` by `order`, splitting off the first half (rounded up) and merging.
/// Equal entries keep their relative order.
///
/// # Pseudo Code:
/// ```text
/// if len < 2: return
/// left  = first ceil(len / 2) entries
/// right = the rest
/// sort(left); sort(right)
/// entries = merge(left, right)
/// ```
pub fn sort<T, O: Order<T>, Q: AnyQueue<T>>(entries: &mut Q, order: &O) {
    if entries.len() < 2 {
        return;
    }
    let mut left = Q::default();
    for _ in 0..entries.len().div_ceil(2) {
        if let Some(x) = entries.dequeue() {
            left.enqueue(x);
        }
    }
    let mut right = Q::default();
    right.transfer_from(entries);

    sort(&mut left, order);
    sort(&mut right, order);
    merge(entries, &mut left, &mut right, order);
}

/// Appends the sorted queues `left` and `right` to `into`, repeatedly taking the
/// smaller front. On a tie the entry from `left` goes first.
pub fn merge<T, O: Order<T>, Q: AnyQueue<T>>(into: &mut Q, left: &mut Q, right: &mut Q, order: &O) {
    loop {
        let from_right = match (left.front(), right.front()) {
            (Some(l), Some(r)) => !order.in_order(l, r),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if from_right {
            right.dequeue()
        } else {
            left.dequeue()
        };
        if let Some(x) = next {
            into.enqueue(x);
        }
    }
}

/// A sorting machine kept in an [`AnyQueue`].
pub struct MergeSortMachine<T, O, Q: AnyQueue<T> = VecDeque<T>> {
    mode: Mode,
    order: O,
    entries: Q,
    _entry: PhantomData<T>,
}

impl<T, O: Order<T>, Q: AnyQueue<T>> MergeSortMachine<T, O, Q> {
    /// Creates an empty machine in insertion mode.
    pub fn new(order: O) -> Self {
        Self {
            mode: Mode::Insertion,
            order,
            entries: Q::default(),
            _entry: PhantomData,
        }
    }
}

impl<T, O: Order<T>, Q: AnyQueue<T>> SortingMachineKernel<T> for MergeSortMachine<T, O, Q> {
    type Order = O;
    type Iter<'a>
        = Q::Iter<'a>
    where
        Self: 'a,
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new(self.order.clone())
    }

    #[track_caller]
    fn add(&mut self, x: T) {
        require(self.mode == Mode::Insertion, Violation::NotInInsertionMode);
        self.entries.enqueue(x);
    }

    #[track_caller]
    fn change_to_extraction_mode(&mut self) {
        require(self.mode == Mode::Insertion, Violation::NotInInsertionMode);
        sort(&mut self.entries, &self.order);
        self.mode = Mode::Extraction;
    }

    #[track_caller]
    fn remove_first(&mut self) -> T {
        require(self.mode == Mode::Extraction, Violation::NotInExtractionMode);
        self.entries
            .dequeue()
            .unwrap_or_else(|| Violation::EmptyMachine.raise())
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
        self.entries.clear();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.mode = source.mode;
        self.order = source.order.clone();
        self.entries.transfer_from(&mut source.entries);
        source.mode = Mode::Insertion;
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter_from_front()
    }
}

impl<T, O: Order<T>, Q: AnyQueue<T>> SortingMachine<T> for MergeSortMachine<T, O, Q> {}

impl<T, O: Order<T>, Q: AnyQueue<T> + Clone> Clone for MergeSortMachine<T, O, Q> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            order: self.order.clone(),
            entries: self.entries.clone(),
            _entry: PhantomData,
        }
    }
}

impl<T, O: Order<T>, Q: AnyQueue<T> + fmt::Debug> fmt::Debug for MergeSortMachine<T, O, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSortMachine")
            .field("mode", &self.mode)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<T: fmt::Display, O: Order<T>, Q: AnyQueue<T>> fmt::Display for MergeSortMachine<T, O, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_machine(f, self.mode == Mode::Insertion, self.entries.iter_from_front())
    }
}

impl<T: Hash + Eq, O: Order<T>, Q: AnyQueue<T>> PartialEq for MergeSortMachine<T, O, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.entries_eq(other)
    }
}

impl<T, O: Order<T>, Q: AnyQueue<T>> Extend<T> for MergeSortMachine<T, O, Q> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}
