//! Sorting machines.
//!
//! Three representations of the same two-phase sorter:
//!
//! | Representation | Backing | `add` | switch | `remove_first` |
//! |---|---|---|---|---|
//! | [`MergeSortMachine`] | [`AnyQueue`](crate::backing::AnyQueue) | O(1) | O(n log n) merge sort | O(1) |
//! | [`SelectionSortMachine`] | [`AnySequence`](crate::backing::AnySequence) | O(1) | O(1) | O(n) scan |
//! | [`InsertionSortMachine`] | [`AnySequence`](crate::backing::AnySequence) | O(log n) search + insert | O(1) | remove at 0 |
//!
//! All three are stable: entries that compare equal come out in the order they were
//! added. [`TaggedSortingMachine`] closes the set into one enum chosen by
//! [`MachineKind`].

pub mod insertion;
pub mod kernel;
pub mod merge;
pub mod selection;

pub use insertion::InsertionSortMachine;
pub use kernel::{Mode, Order, SortingMachine, SortingMachineKernel, natural_order};
pub use merge::MergeSortMachine;
pub use selection::SelectionSortMachine;

use core::fmt;
use core::hash::Hash;
use std::collections::vec_deque;

use crate::backing::SequenceIter;
use crate::violation::Violation;

/// Names one of the sorting-machine representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineKind {
    /// [`MergeSortMachine`] over a `VecDeque`.
    MergeSort,
    /// [`SelectionSortMachine`] over a `Vec`.
    SelectionSort,
    /// [`InsertionSortMachine`] over a `Vec`.
    InsertionSort,
}

impl MachineKind {
    /// Every representation, in declaration order.
    pub const ALL: [MachineKind; 3] = [
        MachineKind::MergeSort,
        MachineKind::SelectionSort,
        MachineKind::InsertionSort,
    ];

    /// Type name of the representation.
    pub fn name(self) -> &'static str {
        match self {
            MachineKind::MergeSort => "MergeSortMachine",
            MachineKind::SelectionSort => "SelectionSortMachine",
            MachineKind::InsertionSort => "InsertionSortMachine",
        }
    }
}

/// One sorting machine of any representation, picked at construction time.
pub enum TaggedSortingMachine<T, O> {
    MergeSort(MergeSortMachine<T, O>),
    SelectionSort(SelectionSortMachine<T, O>),
    InsertionSort(InsertionSortMachine<T, O>),
}

macro_rules! dispatch {
    ($self:expr, $machine:ident => $body:expr) => {
        match $self {
            TaggedSortingMachine::MergeSort($machine) => $body,
            TaggedSortingMachine::SelectionSort($machine) => $body,
            TaggedSortingMachine::InsertionSort($machine) => $body,
        }
    };
}

impl<T, O: Order<T>> TaggedSortingMachine<T, O> {
    /// Creates an empty machine of the given representation, in insertion mode.
    pub fn new(kind: MachineKind, order: O) -> Self {
        match kind {
            MachineKind::MergeSort => TaggedSortingMachine::MergeSort(MergeSortMachine::new(order)),
            MachineKind::SelectionSort => {
                TaggedSortingMachine::SelectionSort(SelectionSortMachine::new(order))
            }
            MachineKind::InsertionSort => {
                TaggedSortingMachine::InsertionSort(InsertionSortMachine::new(order))
            }
        }
    }

    /// Returns which representation this machine uses.
    pub fn kind(&self) -> MachineKind {
        match self {
            TaggedSortingMachine::MergeSort(_) => MachineKind::MergeSort,
            TaggedSortingMachine::SelectionSort(_) => MachineKind::SelectionSort,
            TaggedSortingMachine::InsertionSort(_) => MachineKind::InsertionSort,
        }
    }
}

/// Iterator over a [`TaggedSortingMachine`].
pub enum TaggedMachineIter<'a, T> {
    Queue(vec_deque::Iter<'a, T>),
    Sequence(SequenceIter<'a, T, Vec<T>>),
}

impl<'a, T> Iterator for TaggedMachineIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TaggedMachineIter::Queue(iter) => iter.next(),
            TaggedMachineIter::Sequence(iter) => iter.next(),
        }
    }
}

impl<T, O: Order<T>> SortingMachineKernel<T> for TaggedSortingMachine<T, O> {
    type Order = O;
    type Iter<'a>
        = TaggedMachineIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new(self.kind(), self.order().clone())
    }

    #[track_caller]
    fn add(&mut self, x: T) {
        dispatch!(self, m => m.add(x))
    }

    #[track_caller]
    fn change_to_extraction_mode(&mut self) {
        dispatch!(self, m => m.change_to_extraction_mode())
    }

    #[track_caller]
    fn remove_first(&mut self) -> T {
        dispatch!(self, m => m.remove_first())
    }

    fn is_in_insertion_mode(&self) -> bool {
        dispatch!(self, m => m.is_in_insertion_mode())
    }

    fn order(&self) -> &O {
        dispatch!(self, m => m.order())
    }

    fn size(&self) -> usize {
        dispatch!(self, m => m.size())
    }

    fn clear(&mut self) {
        dispatch!(self, m => m.clear())
    }

    #[track_caller]
    fn transfer_from(&mut self, source: &mut Self) {
        match (self, source) {
            (TaggedSortingMachine::MergeSort(m), TaggedSortingMachine::MergeSort(s)) => {
                m.transfer_from(s)
            }
            (TaggedSortingMachine::SelectionSort(m), TaggedSortingMachine::SelectionSort(s)) => {
                m.transfer_from(s)
            }
            (TaggedSortingMachine::InsertionSort(m), TaggedSortingMachine::InsertionSort(s)) => {
                m.transfer_from(s)
            }
            (m, s) => Violation::IncompatibleRepresentation {
                expected: m.kind().name(),
                found: s.kind().name(),
            }
            .raise(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            TaggedSortingMachine::MergeSort(m) => TaggedMachineIter::Queue(m.iter()),
            TaggedSortingMachine::SelectionSort(m) => TaggedMachineIter::Sequence(m.iter()),
            TaggedSortingMachine::InsertionSort(m) => TaggedMachineIter::Sequence(m.iter()),
        }
    }
}

impl<T, O: Order<T>> SortingMachine<T> for TaggedSortingMachine<T, O> {}

impl<T: Clone, O: Order<T>> Clone for TaggedSortingMachine<T, O> {
    fn clone(&self) -> Self {
        match self {
            TaggedSortingMachine::MergeSort(m) => TaggedSortingMachine::MergeSort(m.clone()),
            TaggedSortingMachine::SelectionSort(m) => TaggedSortingMachine::SelectionSort(m.clone()),
            TaggedSortingMachine::InsertionSort(m) => TaggedSortingMachine::InsertionSort(m.clone()),
        }
    }
}

impl<T: fmt::Debug, O: Order<T>> fmt::Debug for TaggedSortingMachine<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, m => fmt::Debug::fmt(m, f))
    }
}

impl<T: fmt::Display, O: Order<T>> fmt::Display for TaggedSortingMachine<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, m => fmt::Display::fmt(m, f))
    }
}

impl<T: Hash + Eq, O: Order<T>> PartialEq for TaggedSortingMachine<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.entries_eq(other)
    }
}

impl<T, O: Order<T>> Extend<T> for TaggedSortingMachine<T, O> {
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
    use core::cmp::Ordering;

    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn ignore_case(a: &&'static str, b: &&'static str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }

    /// Orders by key only, so the sequence number shows whether equal keys kept their
    /// insertion order.
    fn by_key(a: &(u8, u32), b: &(u8, u32)) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn test_every_machine_extracts_colors_in_order() {
        for kind in MachineKind::ALL {
            let mut m: TaggedSortingMachine<&str, _> = TaggedSortingMachine::new(kind, ignore_case);
            m.add("red");
            m.add("green");
            m.add("blue");
            m.change_to_extraction_mode();
            let extracted = [m.remove_first(), m.remove_first(), m.remove_first()];
            assert_eq!(extracted, ["blue", "green", "red"], "{}", kind.name());
        }
    }

    #[test]
    fn test_every_machine_sorts_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        for kind in MachineKind::ALL {
            for len in [0, 1, 2, 17, 300] {
                let input: Vec<u16> = (0..len).map(|_| rng.gen_range(0..50)).collect();
                let mut m: TaggedSortingMachine<u16, _> =
                    TaggedSortingMachine::new(kind, natural_order::<u16>);
                m.add_all(input.iter().copied());
                assert_eq!(m.size(), input.len());

                let sorted = m.drain_sorted();
                assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "{}", kind.name());
                let mut expected = input.clone();
                expected.sort();
                assert_eq!(sorted, expected, "{}", kind.name());
                assert!(m.is_empty());
            }
        }
    }

    // --- Differential Harness ---

    const OP_COUNTS: [usize; 5] = [0, 1, 10, 100, 1_000];

    /// Drives a machine of `kind` and a `MergeSortMachine` with the same random legal
    /// operations and compares every observable result.
    fn differential(kind: MachineKind, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for op_count in OP_COUNTS {
            let mut test: TaggedSortingMachine<(u8, u32), _> = TaggedSortingMachine::new(kind, by_key);
            let mut reference: MergeSortMachine<(u8, u32), _> = MergeSortMachine::new(by_key);

            for step in 0..op_count {
                match rng.gen_range(0..24) {
                    0 if test.is_in_insertion_mode() => {
                        test.change_to_extraction_mode();
                        reference.change_to_extraction_mode();
                    }
                    1 => {
                        test.clear();
                        reference.clear();
                    }
                    2 => {
                        let mut held = test.new_instance();
                        held.transfer_from(&mut test);
                        assert!(test.is_empty() && test.is_in_insertion_mode());
                        test.transfer_from(&mut held);

                        let mut held = reference.new_instance();
                        held.transfer_from(&mut reference);
                        reference.transfer_from(&mut held);
                    }
                    _ if test.is_in_insertion_mode() => {
                        let x = (rng.gen_range(0..8), step as u32);
                        test.add(x);
                        reference.add(x);
                    }
                    _ => assert_eq!(test.try_remove_first(), reference.try_remove_first()),
                }
                assert_eq!(test.size(), reference.size());
                assert_eq!(test.mode(), reference.mode());
            }

            assert!(
                test.entries_eq(&reference),
                "{} diverged after {op_count} ops (seed {seed})",
                kind.name()
            );
            assert_eq!(test.drain_sorted(), reference.drain_sorted());
        }
    }

    #[test]
    fn test_differential_every_representation() {
        for kind in MachineKind::ALL {
            for seed in [3, 11, 0x5eed] {
                differential(kind, seed);
            }
        }
    }

    // --- Tagged Variant Set ---

    #[test]
    fn test_tagged_machines_compare_across_kinds() {
        let mut merge: TaggedSortingMachine<i32, _> =
            TaggedSortingMachine::new(MachineKind::MergeSort, natural_order::<i32>);
        let mut insertion: TaggedSortingMachine<i32, _> =
            TaggedSortingMachine::new(MachineKind::InsertionSort, natural_order::<i32>);
        merge.extend([3, 1, 2]);
        insertion.extend([2, 3, 1]);
        assert!(merge.entries_eq(&insertion));
        assert_eq!(merge.to_string(), "(true,{3,1,2})");
        assert_eq!(insertion.to_string(), "(true,{1,2,3})");

        insertion.change_to_extraction_mode();
        assert!(!merge.entries_eq(&insertion));
    }

    #[test]
    fn test_tagged_new_instance_keeps_kind_and_order() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        for kind in MachineKind::ALL {
            let m: TaggedSortingMachine<i32, _> = TaggedSortingMachine::new(kind, reverse);
            let mut fresh = m.new_instance();
            assert_eq!(fresh.kind(), kind);
            fresh.add_all([1, 3, 2]);
            assert_eq!(fresh.drain_sorted(), vec![3, 2, 1]);
        }
    }

    #[test]
    #[should_panic(
        expected = "source representation SelectionSortMachine is incompatible with MergeSortMachine"
    )]
    fn test_tagged_transfer_across_kinds_panics() {
        let mut dest: TaggedSortingMachine<i32, _> =
            TaggedSortingMachine::new(MachineKind::MergeSort, natural_order::<i32>);
        let mut source: TaggedSortingMachine<i32, _> =
            TaggedSortingMachine::new(MachineKind::SelectionSort, natural_order::<i32>);
        dest.transfer_from(&mut source);
    }
}
