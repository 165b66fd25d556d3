//! Doubly-linked deque with two permanent sentinel nodes.
//!
//! # Implementation details
//! - **Arena**: nodes live in a `Vec` and link to each other through [`IndexType`]
//!   handles, `I::NONE` standing for a missing link.
//! - **Sentinels**: `pre_front` and `post_back` bracket the live nodes. They never
//!   carry data and are never handed out.
//! - **Free list**: slots released by pops are threaded through `next` starting at
//!   `free_head` and reused by later pushes.
//!
//! Every kernel operation is O(1): a push stores the entry in the current sentinel and
//! allocates a fresh sentinel beyond it, a pop promotes the first (or last) live node
//! to sentinel and releases the old one.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::kernel::{Deque, DequeKernel, write_angled};
use crate::IndexType;
use crate::violation::{Violation, require};

#[derive(Clone)]
struct Node<T, I> {
    data: Option<T>,
    next: I,
    previous: I,
}

/// An O(1) deque over an index-linked node arena.
#[derive(Clone)]
pub struct LinkedDeque<T, I: IndexType = u32> {
    nodes: Vec<Node<T, I>>,
    free_head: I,
    pre_front: I,
    post_back: I,
    len: usize,
}

impl<T, I: IndexType> LinkedDeque<T, I> {
    /// Creates an empty deque: two sentinels linked to each other.
    ///
    /// # Pseudo Code:
    /// ```text
    /// nodes = [pre_front { next: 1 }, post_back { previous: 0 }]
    /// free_head = NONE
    /// ```
    pub fn new() -> Self {
        let pre_front = I::ZERO;
        let post_back = I::from_usize(1);
        Self {
            nodes: vec![
                Node {
                    data: None,
                    next: post_back,
                    previous: I::NONE,
                },
                Node {
                    data: None,
                    next: I::NONE,
                    previous: pre_front,
                },
            ],
            free_head: I::NONE,
            pre_front,
            post_back,
            len: 0,
        }
    }

    /// Returns the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque is `<>`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of arena slots currently allocated, sentinels and free slots included.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only front-to-back iterator.
    pub fn iter(&self) -> LinkedIter<'_, T, I> {
        LinkedIter {
            nodes: &self.nodes,
            current: self.node(self.pre_front).next,
            remaining: self.len,
        }
    }

    #[inline(always)]
    fn node(&self, idx: I) -> &Node<T, I> {
        &self.nodes[idx.as_usize()]
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: I) -> &mut Node<T, I> {
        &mut self.nodes[idx.as_usize()]
    }

    /// Takes a slot off the free list, or grows the arena, and stores `node` in it.
    fn allocate(&mut self, node: Node<T, I>) -> I {
        if self.free_head != I::NONE {
            let idx = self.free_head;
            self.free_head = self.node(idx).next;
            *self.node_mut(idx) = node;
            idx
        } else {
            assert!(
                I::can_address(self.nodes.len() + 1),
                "LinkedDeque arena exhausted its index type"
            );
            let idx = I::from_usize(self.nodes.len());
            self.nodes.push(node);
            idx
        }
    }

    /// Returns a retired sentinel to the free list.
    fn release(&mut self, idx: I) {
        let free_head = self.free_head;
        let node = self.node_mut(idx);
        node.data = None;
        node.previous = I::NONE;
        node.next = free_head;
        self.free_head = idx;
    }

    /// First live node (the one after `pre_front`).
    #[inline(always)]
    fn first(&self) -> I {
        self.node(self.pre_front).next
    }

    /// Last live node (the one before `post_back`).
    #[inline(always)]
    fn last(&self) -> I {
        self.node(self.post_back).previous
    }

    #[cfg(test)]
    fn sentinels_intact(&self) -> bool {
        let pre = self.node(self.pre_front);
        let post = self.node(self.post_back);
        if pre.data.is_some() || post.data.is_some() {
            return false;
        }
        if pre.previous != I::NONE || post.next != I::NONE {
            return false;
        }
        // Walk forward and make sure the back-links agree.
        let mut count = 0;
        let mut prev = self.pre_front;
        let mut current = pre.next;
        while current != self.post_back {
            let node = self.node(current);
            if node.previous != prev || node.data.is_none() {
                return false;
            }
            count += 1;
            prev = current;
            current = node.next;
        }
        post.previous == prev && count == self.len
    }
}

/// Front-to-back iterator over a [`LinkedDeque`].
pub struct LinkedIter<'a, T, I> {
    nodes: &'a [Node<T, I>],
    current: I,
    remaining: usize,
}

impl<'a, T, I: IndexType> Iterator for LinkedIter<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.current.as_usize()];
        self.current = node.next;
        self.remaining -= 1;
        node.data.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> DequeKernel<T> for LinkedDeque<T, I> {
    type Iter<'a>
        = LinkedIter<'a, T, I>
    where
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, x: T) {
        let old = self.pre_front;
        let new_pre_front = self.allocate(Node {
            data: None,
            next: old,
            previous: I::NONE,
        });
        let demoted = self.node_mut(old);
        demoted.data = Some(x);
        demoted.previous = new_pre_front;
        self.pre_front = new_pre_front;
        self.len += 1;
    }

    fn push_back(&mut self, x: T) {
        let old = self.post_back;
        let new_post_back = self.allocate(Node {
            data: None,
            next: I::NONE,
            previous: old,
        });
        let demoted = self.node_mut(old);
        demoted.data = Some(x);
        demoted.next = new_post_back;
        self.post_back = new_post_back;
        self.len += 1;
    }

    #[track_caller]
    fn pop_front(&mut self) -> T {
        require(self.len > 0, Violation::EmptyDeque);
        let old = self.pre_front;
        let promoted = self.first();
        let node = self.node_mut(promoted);
        let popped = node.data.take();
        node.previous = I::NONE;
        self.pre_front = promoted;
        self.release(old);
        self.len -= 1;
        popped.unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn pop_back(&mut self) -> T {
        require(self.len > 0, Violation::EmptyDeque);
        let old = self.post_back;
        let promoted = self.last();
        let node = self.node_mut(promoted);
        let popped = node.data.take();
        node.next = I::NONE;
        self.post_back = promoted;
        self.release(old);
        self.len -= 1;
        popped.unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        *self = core::mem::take(source);
    }

    fn iter(&mut self) -> Self::Iter<'_> {
        LinkedDeque::iter(self)
    }
}

impl<T, I: IndexType> Deque<T> for LinkedDeque<T, I> {
    #[track_caller]
    fn front(&mut self) -> &T {
        require(self.len > 0, Violation::EmptyDeque);
        let first = self.first();
        self.node(first)
            .data
            .as_ref()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn back(&mut self) -> &T {
        require(self.len > 0, Violation::EmptyDeque);
        let last = self.last();
        self.node(last)
            .data
            .as_ref()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn replace_front(&mut self, x: T) -> T {
        require(self.len > 0, Violation::EmptyDeque);
        let first = self.first();
        self.node_mut(first)
            .data
            .replace(x)
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn replace_back(&mut self, x: T) -> T {
        require(self.len > 0, Violation::EmptyDeque);
        let last = self.last();
        self.node_mut(last)
            .data
            .replace(x)
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }
}

impl<T, I: IndexType> Default for LinkedDeque<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for LinkedDeque<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, I: IndexType> fmt::Display for LinkedDeque<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_angled(f, self.iter())
    }
}

impl<T: PartialEq, I: IndexType> PartialEq for LinkedDeque<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
impl<T: Eq, I: IndexType> Eq for LinkedDeque<T, I> {}

impl<T: Hash, I: IndexType> Hash for LinkedDeque<T, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

impl<T, I: IndexType> Extend<T> for LinkedDeque<T, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for x in iter {
            self.push_back(x);
        }
    }
}

impl<T, I: IndexType> FromIterator<T> for LinkedDeque<T, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<'a, T, I: IndexType> IntoIterator for &'a LinkedDeque<T, I> {
    type Item = &'a T;
    type IntoIter = LinkedIter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
