//! Deque over linear storage: a growable vector with the front at index 0.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_back` / `pop_back` | O(1) amortized |
//! | `push_front` / `pop_front` | O(n), every entry shifts |
//! | `front` / `back` / `replace_*` | O(1), direct indexing |
//!
//! This is the simplest representation and serves as the reference the other
//! representations are checked against.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::slice;

use super::kernel::{Deque, DequeKernel, write_angled};
use crate::violation::{Violation, require};

/// A deque stored contiguously, front first.
#[derive(Clone)]
pub struct ListDeque<T> {
    rep: Vec<T>,
}

impl<T> ListDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self { rep: Vec::new() }
    }

    /// Creates an empty deque with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rep: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rep.len()
    }

    /// Returns `true` if the deque is `<>`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rep.is_empty()
    }

    /// Read-only front-to-back iterator.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.rep.iter()
    }

    /// Views the entries as a slice, front first.
    pub fn as_slice(&self) -> &[T] {
        &self.rep
    }
}

impl<T> DequeKernel<T> for ListDeque<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn len(&self) -> usize {
        self.rep.len()
    }

    fn push_front(&mut self, x: T) {
        self.rep.insert(0, x);
    }

    fn push_back(&mut self, x: T) {
        self.rep.push(x);
    }

    #[track_caller]
    fn pop_front(&mut self) -> T {
        require(!self.rep.is_empty(), Violation::EmptyDeque);
        self.rep.remove(0)
    }

    #[track_caller]
    fn pop_back(&mut self) -> T {
        self.rep
            .pop()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    fn clear(&mut self) {
        self.rep.clear();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.rep = core::mem::take(&mut source.rep);
    }

    fn iter(&mut self) -> Self::Iter<'_> {
        self.rep.iter()
    }
}

impl<T> Deque<T> for ListDeque<T> {
    #[track_caller]
    fn front(&mut self) -> &T {
        self.rep
            .first()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn back(&mut self) -> &T {
        self.rep
            .last()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    #[track_caller]
    fn replace_front(&mut self, x: T) -> T {
        match self.rep.first_mut() {
            Some(slot) => core::mem::replace(slot, x),
            None => Violation::EmptyDeque.raise(),
        }
    }

    #[track_caller]
    fn replace_back(&mut self, x: T) -> T {
        match self.rep.last_mut() {
            Some(slot) => core::mem::replace(slot, x),
            None => Violation::EmptyDeque.raise(),
        }
    }

    fn flip(&mut self) {
        self.rep.reverse();
    }
}

impl<T> Default for ListDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rep.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ListDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_angled(f, &self.rep)
    }
}

impl<T: PartialEq> PartialEq for ListDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rep == other.rep
    }
}
impl<T: Eq> Eq for ListDeque<T> {}

impl<T: Hash> Hash for ListDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rep.hash(state);
    }
}

impl<T> Extend<T> for ListDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.rep.extend(iter);
    }
}

impl<T> FromIterator<T> for ListDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rep: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ListDeque<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rep.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_deque_basic_ops() {
        let mut d: ListDeque<&str> = ListDeque::new();
        d.push_back("one");
        d.push_back("two");
        d.push_front("zero");
        assert_eq!(d.to_string(), "<zero,one,two>");
        assert_eq!(d.len(), 3);
        assert_eq!(d.pop_front(), "zero");
        assert_eq!(d.pop_back(), "two");
        assert_eq!(d.as_slice(), &["one"]);
    }

    #[test]
    fn test_list_deque_front_back_direct() {
        let mut d: ListDeque<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(*d.front(), 1);
        assert_eq!(*d.back(), 3);
        assert_eq!(d.replace_front(10), 1);
        assert_eq!(d.replace_back(30), 3);
        assert_eq!(d.as_slice(), &[10, 2, 30]);
    }

    #[test]
    fn test_list_deque_flip_override() {
        let mut d: ListDeque<i32> = (1..=4).collect();
        d.flip();
        assert_eq!(d.as_slice(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_list_deque_transfer() {
        let mut source: ListDeque<i32> = (1..=3).collect();
        let mut dest: ListDeque<i32> = ListDeque::with_capacity(8);
        dest.push_back(99);
        dest.transfer_from(&mut source);
        assert!(source.is_empty());
        assert_eq!(dest.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_list_deque_traits() {
        let a: ListDeque<i32> = vec![1, 2].into_iter().collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.push_back(3);
        assert_ne!(a, b);
        assert_eq!(format!("{:?}", b), "[1, 2, 3]");
        let sum: i32 = (&b).into_iter().sum();
        assert_eq!(sum, 6);
    }

    #[test]
    #[should_panic(expected = "deque is empty")]
    fn test_list_deque_pop_front_empty() {
        let mut d: ListDeque<i32> = ListDeque::new();
        d.pop_front();
    }

    #[test]
    #[should_panic(expected = "deque is empty")]
    fn test_list_deque_replace_back_empty() {
        let mut d: ListDeque<i32> = ListDeque::new();
        d.replace_back(1);
    }
}
