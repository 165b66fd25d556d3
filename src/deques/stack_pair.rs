//! Deque built from two stacks.
//!
//! # Representation
//! `left` holds the front half with the front entry on top; `right` holds the back
//! half with the back entry on top. The abstract value is
//! `left (top to bottom) * reverse(right (top to bottom))`.
//!
//! # Rebalancing
//! Pushes go straight onto one of the stacks. A pop from a side whose stack is empty
//! first moves the bottom half (rounded up) of the other stack over with [`shift`].
//! Moving half rather than everything keeps alternating `pop_front`/`pop_back`
//! amortized O(1).
//!
//! # Iteration
//! Only `left` has its natural order equal to front-to-back order, so the kernel
//! [`iter`](DequeKernel::iter) first drains `right` into `left` and then walks `left`.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use super::kernel::{Deque, DequeKernel, write_angled};
use crate::backing::AnyStack;
use crate::violation::{Violation, require};

/// Moves the `count` bottom-most entries of `from` to the bottom of `to`, keeping
/// `from * reverse(to)` unchanged.
///
/// A stack only exposes its top, so both stacks are flipped to bring their bottoms up,
/// the entries are moved one by one, and both are flipped back.
///
/// # Pseudo Code:
/// ```text
/// flip(from); flip(to)
/// repeat count times: to.push(from.pop())
/// flip(from); flip(to)
/// ```
pub fn shift<T, S: AnyStack<T>>(from: &mut S, to: &mut S, count: usize) {
    debug_assert!(count <= from.len());
    from.flip();
    to.flip();
    for _ in 0..count {
        match from.pop() {
            Some(x) => to.push(x),
            None => break,
        }
    }
    from.flip();
    to.flip();
}

/// A deque stored in two [`AnyStack`]s.
pub struct StackPairDeque<T, S: AnyStack<T> = Vec<T>> {
    left: S,
    right: S,
    _entry: PhantomData<T>,
}

impl<T, S: AnyStack<T>> StackPairDeque<T, S> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            left: S::default(),
            right: S::default(),
            _entry: PhantomData,
        }
    }

    /// Returns the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Returns `true` if the deque is `<>`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Front-to-back view that leaves both stacks untouched. The back half is
    /// collected so it can be walked bottom to top.
    fn entries(&self) -> impl Iterator<Item = &T> {
        let back_half: Vec<&T> = self.right.iter_from_top().collect();
        self.left.iter_from_top().chain(back_half.into_iter().rev())
    }
}

impl<T, S: AnyStack<T>> DequeKernel<T> for StackPairDeque<T, S> {
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a,
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    fn push_front(&mut self, x: T) {
        self.left.push(x);
    }

    fn push_back(&mut self, x: T) {
        self.right.push(x);
    }

    #[track_caller]
    fn pop_front(&mut self) -> T {
        require(!self.is_empty(), Violation::EmptyDeque);
        if self.left.is_empty() {
            let count = self.right.len().div_ceil(2);
            shift(&mut self.right, &mut self.left, count);
        }
        self.left
            .pop()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn pop_back(&mut self) -> T {
        require(!self.is_empty(), Violation::EmptyDeque);
        if self.right.is_empty() {
            let count = self.left.len().div_ceil(2);
            shift(&mut self.left, &mut self.right, count);
        }
        self.right
            .pop()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    fn clear(&mut self) {
        self.left = S::default();
        self.right = S::default();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.left = core::mem::take(&mut source.left);
        self.right = core::mem::take(&mut source.right);
    }

    fn iter(&mut self) -> Self::Iter<'_> {
        let count = self.right.len();
        shift(&mut self.right, &mut self.left, count);
        self.left.iter_from_top()
    }
}

impl<T, S: AnyStack<T>> Deque<T> for StackPairDeque<T, S> {
    // Both ends can be read off the stacks without moving anything.

    #[track_caller]
    fn front(&mut self) -> &T {
        match self.left.top() {
            Some(x) => x,
            None => self
                .right
                .iter_from_top()
                .last()
                .unwrap_or_else(|| Violation::EmptyDeque.raise()),
        }
    }

    #[track_caller]
    fn back(&mut self) -> &T {
        match self.right.top() {
            Some(x) => x,
            None => self
                .left
                .iter_from_top()
                .last()
                .unwrap_or_else(|| Violation::EmptyDeque.raise()),
        }
    }

    // Swapping the stacks reverses the whole deque.
    fn flip(&mut self) {
        core::mem::swap(&mut self.left, &mut self.right);
    }
}

impl<T, S: AnyStack<T>> Default for StackPairDeque<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: AnyStack<T> + Clone> Clone for StackPairDeque<T, S> {
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            _entry: PhantomData,
        }
    }
}

impl<T: fmt::Debug, S: AnyStack<T>> fmt::Debug for StackPairDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

impl<T: fmt::Display, S: AnyStack<T>> fmt::Display for StackPairDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_angled(f, self.entries())
    }
}

impl<T: PartialEq, S: AnyStack<T>> PartialEq for StackPairDeque<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries().zip(other.entries()).all(|(a, b)| a == b)
    }
}
impl<T: Eq, S: AnyStack<T>> Eq for StackPairDeque<T, S> {}

impl<T: Hash, S: AnyStack<T>> Hash for StackPairDeque<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for entry in self.entries() {
            entry.hash(state);
        }
    }
}

impl<T, S: AnyStack<T>> Extend<T> for StackPairDeque<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.right.push(x);
        }
    }
}

impl<T, S: AnyStack<T>> FromIterator<T> for StackPairDeque<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
