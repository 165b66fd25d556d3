//! Double-ended queues.
//!
//! Four mutually substitutable representations of the same abstract deque:
//!
//! | Representation | Backing | Ends |
//! |---|---|---|
//! | [`ListDeque`] | `Vec`, front at index 0 | O(1) back, O(n) front |
//! | [`SequenceDeque`] | any [`AnySequence`](crate::backing::AnySequence) | whatever the sequence charges |
//! | [`StackPairDeque`] | two [`AnyStack`](crate::backing::AnyStack)s | amortized O(1) |
//! | [`LinkedDeque`] | node arena + two sentinels | O(1) |
//!
//! All of them implement [`DequeKernel`] and [`Deque`]. [`TaggedDeque`] closes the set
//! into one enum so a representation can be chosen at run time by [`DequeKind`].

pub mod kernel;
pub mod linked;
pub mod list;
pub mod sequence;
pub mod stack_pair;

pub use kernel::{Deque, DequeKernel};
pub use linked::{LinkedDeque, LinkedIter};
pub use list::ListDeque;
pub use sequence::SequenceDeque;
pub use stack_pair::StackPairDeque;

use core::fmt;
use core::slice;

use crate::backing::SequenceIter;
use crate::violation::Violation;

/// Names one of the deque representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeKind {
    /// [`ListDeque`].
    List,
    /// [`SequenceDeque`] over a `Vec`.
    Sequence,
    /// [`StackPairDeque`] over two `Vec` stacks.
    StackPair,
    /// [`LinkedDeque`] with `u32` handles.
    Linked,
}

impl DequeKind {
    /// Every representation, in declaration order.
    pub const ALL: [DequeKind; 4] = [
        DequeKind::List,
        DequeKind::Sequence,
        DequeKind::StackPair,
        DequeKind::Linked,
    ];

    /// Type name of the representation.
    pub fn name(self) -> &'static str {
        match self {
            DequeKind::List => "ListDeque",
            DequeKind::Sequence => "SequenceDeque",
            DequeKind::StackPair => "StackPairDeque",
            DequeKind::Linked => "LinkedDeque",
        }
    }
}

/// One deque of any representation, picked at construction time.
#[derive(Clone)]
pub enum TaggedDeque<T> {
    List(ListDeque<T>),
    Sequence(SequenceDeque<T>),
    StackPair(StackPairDeque<T>),
    Linked(LinkedDeque<T>),
}

macro_rules! dispatch {
    ($self:expr, $deque:ident => $body:expr) => {
        match $self {
            TaggedDeque::List($deque) => $body,
            TaggedDeque::Sequence($deque) => $body,
            TaggedDeque::StackPair($deque) => $body,
            TaggedDeque::Linked($deque) => $body,
        }
    };
}

impl<T> TaggedDeque<T> {
    /// Creates an empty deque of the given representation.
    pub fn new(kind: DequeKind) -> Self {
        match kind {
            DequeKind::List => TaggedDeque::List(ListDeque::new()),
            DequeKind::Sequence => TaggedDeque::Sequence(SequenceDeque::new()),
            DequeKind::StackPair => TaggedDeque::StackPair(StackPairDeque::new()),
            DequeKind::Linked => TaggedDeque::Linked(LinkedDeque::new()),
        }
    }

    /// Returns which representation this deque uses.
    pub fn kind(&self) -> DequeKind {
        match self {
            TaggedDeque::List(_) => DequeKind::List,
            TaggedDeque::Sequence(_) => DequeKind::Sequence,
            TaggedDeque::StackPair(_) => DequeKind::StackPair,
            TaggedDeque::Linked(_) => DequeKind::Linked,
        }
    }
}

/// Iterator over a [`TaggedDeque`].
pub enum TaggedIter<'a, T> {
    List(slice::Iter<'a, T>),
    Sequence(SequenceIter<'a, T, Vec<T>>),
    StackPair(core::iter::Rev<slice::Iter<'a, T>>),
    Linked(LinkedIter<'a, T, u32>),
}

impl<'a, T> Iterator for TaggedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TaggedIter::List(iter) => iter.next(),
            TaggedIter::Sequence(iter) => iter.next(),
            TaggedIter::StackPair(iter) => iter.next(),
            TaggedIter::Linked(iter) => iter.next(),
        }
    }
}

impl<T> DequeKernel<T> for TaggedDeque<T> {
    type Iter<'a>
        = TaggedIter<'a, T>
    where
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new(self.kind())
    }

    fn len(&self) -> usize {
        dispatch!(self, d => DequeKernel::len(d))
    }

    fn push_front(&mut self, x: T) {
        dispatch!(self, d => d.push_front(x))
    }

    fn push_back(&mut self, x: T) {
        dispatch!(self, d => d.push_back(x))
    }

    #[track_caller]
    fn pop_front(&mut self) -> T {
        dispatch!(self, d => d.pop_front())
    }

    #[track_caller]
    fn pop_back(&mut self) -> T {
        dispatch!(self, d => d.pop_back())
    }

    fn clear(&mut self) {
        dispatch!(self, d => d.clear())
    }

    #[track_caller]
    fn transfer_from(&mut self, source: &mut Self) {
        match (self, source) {
            (TaggedDeque::List(d), TaggedDeque::List(s)) => d.transfer_from(s),
            (TaggedDeque::Sequence(d), TaggedDeque::Sequence(s)) => d.transfer_from(s),
            (TaggedDeque::StackPair(d), TaggedDeque::StackPair(s)) => d.transfer_from(s),
            (TaggedDeque::Linked(d), TaggedDeque::Linked(s)) => d.transfer_from(s),
            (d, s) => Violation::IncompatibleRepresentation {
                expected: d.kind().name(),
                found: s.kind().name(),
            }
            .raise(),
        }
    }

    fn iter(&mut self) -> Self::Iter<'_> {
        match self {
            TaggedDeque::List(d) => TaggedIter::List(DequeKernel::iter(d)),
            TaggedDeque::Sequence(d) => TaggedIter::Sequence(DequeKernel::iter(d)),
            TaggedDeque::StackPair(d) => TaggedIter::StackPair(DequeKernel::iter(d)),
            TaggedDeque::Linked(d) => TaggedIter::Linked(DequeKernel::iter(d)),
        }
    }
}

impl<T> Deque<T> for TaggedDeque<T> {
    #[track_caller]
    fn front(&mut self) -> &T {
        dispatch!(self, d => d.front())
    }

    #[track_caller]
    fn back(&mut self) -> &T {
        dispatch!(self, d => d.back())
    }

    #[track_caller]
    fn replace_front(&mut self, x: T) -> T {
        dispatch!(self, d => d.replace_front(x))
    }

    #[track_caller]
    fn replace_back(&mut self, x: T) -> T {
        dispatch!(self, d => d.replace_back(x))
    }

    fn flip(&mut self) {
        dispatch!(self, d => d.flip())
    }
}

impl<T: fmt::Debug> fmt::Debug for TaggedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, d => fmt::Debug::fmt(d, f))
    }
}

impl<T: fmt::Display> fmt::Display for TaggedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, d => fmt::Display::fmt(d, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn from_args<D: DequeKernel<&'static str>>(mut deque: D, args: &[&'static str]) -> D {
        for &x in args {
            deque.push_back(x);
        }
        deque
    }

    /// Conformance checks every representation has to pass, written once against the
    /// traits.
    macro_rules! deque_conformance {
        ($($module:ident => $make:expr),* $(,)?) => {
            $(
                mod $module {
                    use super::*;

                    #[test]
                    fn test_push_sequence_renders_in_order() {
                        let mut d = from_args($make, &[]);
                        d.push_back("one");
                        d.push_back("two");
                        d.push_front("zero");
                        assert_eq!(d.render(), "<zero,one,two>");
                        assert_eq!(d.len(), 3);
                    }

                    #[test]
                    fn test_flip_reverses() {
                        let mut d = from_args($make, &["one", "two", "three"]);
                        d.flip();
                        assert_eq!(d.render(), "<three,two,one>");
                    }

                    #[test]
                    fn test_flip_is_an_involution() {
                        let mut d = from_args($make, &["a", "b", "c", "d"]);
                        let mut expected = from_args(ListDeque::new(), &["a", "b", "c", "d"]);
                        d.flip();
                        d.flip();
                        assert!(d.entries_eq(&mut expected));

                        let mut empty = from_args($make, &[]);
                        empty.flip();
                        assert!(empty.is_empty());
                    }

                    #[test]
                    fn test_round_trip_restores_length() {
                        let mut d = from_args($make, &["x", "y"]);
                        d.push_front("f");
                        assert_eq!(d.pop_front(), "f");
                        d.push_back("b");
                        assert_eq!(d.pop_back(), "b");
                        assert_eq!(d.len(), 2);
                        assert_eq!(d.render(), "<x,y>");
                    }

                    #[test]
                    fn test_front_back_are_pure() {
                        let mut d = from_args($make, &["one", "two", "three"]);
                        assert_eq!(*d.front(), "one");
                        assert_eq!(*d.back(), "three");
                        assert_eq!(d.len(), 3);
                        assert_eq!(d.render(), "<one,two,three>");
                    }

                    #[test]
                    fn test_replace_ends() {
                        let mut d = from_args($make, &["one", "two"]);
                        assert_eq!(d.replace_front("uno"), "one");
                        assert_eq!(d.replace_back("dos"), "two");
                        assert_eq!(d.render(), "<uno,dos>");
                    }

                    #[test]
                    fn test_try_pops() {
                        let mut d = from_args($make, &["only"]);
                        assert_eq!(d.try_pop_back(), Ok("only"));
                        assert_eq!(d.try_pop_front(), Err(Violation::EmptyDeque));
                        assert_eq!(d.try_pop_back(), Err(Violation::EmptyDeque));
                    }

                    #[test]
                    fn test_transfer_leaves_source_empty() {
                        let mut source = from_args($make, &["a", "b"]);
                        let mut dest = source.new_instance();
                        dest.push_back("stale");
                        dest.transfer_from(&mut source);
                        assert!(source.is_empty());
                        assert_eq!(dest.render(), "<a,b>");
                    }

                    #[test]
                    fn test_clear_resets() {
                        let mut d = from_args($make, &["a", "b"]);
                        d.clear();
                        assert!(d.is_empty());
                        assert_eq!(d.render(), "<>");
                        d.push_back("c");
                        assert_eq!(d.pop_front(), "c");
                    }

                    #[test]
                    fn test_fingerprint_matches_reference() {
                        let mut d = from_args($make, &["p", "q", "r"]);
                        let mut reference = from_args(ListDeque::new(), &["p", "q", "r"]);
                        assert_eq!(d.fingerprint(), reference.fingerprint());
                        let mut other = from_args(ListDeque::new(), &["q", "p", "r"]);
                        assert!(!d.entries_eq(&mut other));
                    }

                    #[test]
                    #[should_panic(expected = "deque is empty")]
                    fn test_pop_front_empty_panics() {
                        let mut d = from_args($make, &[]);
                        d.pop_front();
                    }

                    #[test]
                    #[should_panic(expected = "deque is empty")]
                    fn test_front_empty_panics() {
                        let mut d = from_args($make, &[]);
                        d.front();
                    }

                    #[test]
                    #[should_panic(expected = "deque is empty")]
                    fn test_replace_front_empty_panics() {
                        let mut d = from_args($make, &[]);
                        d.replace_front("x");
                    }
                }
            )*
        };
    }

    deque_conformance! {
        list => ListDeque::<&'static str>::new(),
        sequence => SequenceDeque::<&'static str>::new(),
        sequence_ring => SequenceDeque::<&'static str, std::collections::VecDeque<&'static str>>::new(),
        stack_pair => StackPairDeque::<&'static str>::new(),
        stack_pair_ring => StackPairDeque::<&'static str, std::collections::VecDeque<&'static str>>::new(),
        linked => LinkedDeque::<&'static str>::new(),
        linked_compact => LinkedDeque::<&'static str, u16>::new(),
        tagged_list => TaggedDeque::<&'static str>::new(DequeKind::List),
        tagged_sequence => TaggedDeque::<&'static str>::new(DequeKind::Sequence),
        tagged_stack_pair => TaggedDeque::<&'static str>::new(DequeKind::StackPair),
        tagged_linked => TaggedDeque::<&'static str>::new(DequeKind::Linked),
    }

    // --- Differential Harness ---

    const OP_COUNTS: [usize; 5] = [0, 1, 10, 100, 2_000];

    /// Drives `deque` and a fresh `ListDeque` with the same random legal operations and
    /// compares every observable result.
    fn differential(kind: DequeKind, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for op_count in OP_COUNTS {
            let mut test = TaggedDeque::new(kind);
            let mut reference: ListDeque<u32> = ListDeque::new();

            for _ in 0..op_count {
                let value: u32 = rng.gen_range(0..1_000);
                match rng.gen_range(0..9) {
                    0 | 1 => {
                        test.push_front(value);
                        reference.push_front(value);
                    }
                    2 | 3 => {
                        test.push_back(value);
                        reference.push_back(value);
                    }
                    4 if !reference.is_empty() => {
                        assert_eq!(test.pop_front(), reference.pop_front());
                    }
                    5 if !reference.is_empty() => {
                        assert_eq!(test.pop_back(), reference.pop_back());
                    }
                    6 if !reference.is_empty() => {
                        assert_eq!(*test.front(), *reference.front());
                        assert_eq!(*test.back(), *reference.back());
                    }
                    7 if !reference.is_empty() => {
                        assert_eq!(test.replace_back(value), reference.replace_back(value));
                    }
                    8 => {
                        test.flip();
                        reference.flip();
                    }
                    _ => {}
                }
                assert_eq!(DequeKernel::len(&test), reference.len());
            }

            assert!(
                test.entries_eq(&mut reference),
                "{} diverged after {op_count} ops (seed {seed}): {:?} vs {:?}",
                kind.name(),
                test,
                reference
            );
            assert_eq!(test.fingerprint(), reference.fingerprint());
        }
    }

    #[test]
    fn test_differential_every_representation() {
        for kind in DequeKind::ALL {
            for seed in [1, 7, 0xdead_beef] {
                differential(kind, seed);
            }
        }
    }

    // --- Tagged Variant Set ---

    #[test]
    fn test_tagged_new_instance_keeps_kind() {
        for kind in DequeKind::ALL {
            let d: TaggedDeque<i32> = TaggedDeque::new(kind);
            assert_eq!(d.new_instance().kind(), kind);
        }
    }

    #[test]
    fn test_tagged_display_matches_representation() {
        let mut d: TaggedDeque<i32> = TaggedDeque::new(DequeKind::StackPair);
        d.push_back(2);
        d.push_front(1);
        assert_eq!(d.to_string(), "<1,2>");
        assert_eq!(format!("{:?}", d), "[1, 2]");
    }

    #[test]
    #[should_panic(expected = "source representation LinkedDeque is incompatible with ListDeque")]
    fn test_tagged_transfer_across_kinds_panics() {
        let mut dest: TaggedDeque<i32> = TaggedDeque::new(DequeKind::List);
        let mut source: TaggedDeque<i32> = TaggedDeque::new(DequeKind::Linked);
        source.push_back(1);
        dest.transfer_from(&mut source);
    }

    #[test]
    fn test_entries_eq_across_representations() {
        let mut list: ListDeque<i32> = (1..=4).collect();
        let mut linked: LinkedDeque<i32> = (1..=4).collect();
        let mut pair: StackPairDeque<i32> = StackPairDeque::new();
        for i in (1..=4).rev() {
            pair.push_front(i);
        }
        assert!(list.entries_eq(&mut linked));
        assert!(linked.entries_eq(&mut pair));
        pair.pop_back();
        assert!(!list.entries_eq(&mut pair));
    }
}
