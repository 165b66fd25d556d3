//! LIFO stack contract.

use core::iter::Rev;
use core::slice;
use std::collections::VecDeque;
use std::collections::vec_deque;

/// An abstraction over stack types.
///
/// Iteration runs from the top of the stack to the bottom.
pub trait AnyStack<T>: Default {
    /// Top-to-bottom iterator.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of entries on the stack.
    fn len(&self) -> usize;
    /// Returns `true` if the stack holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Pushes `item` on top.
    fn push(&mut self, item: T);
    /// Removes and returns the top entry, or `None` if empty.
    fn pop(&mut self) -> Option<T>;
    /// Reverses the stack in place: the bottom becomes the top.
    fn flip(&mut self);
    /// Iterates from top to bottom.
    fn iter_from_top(&self) -> Self::Iter<'_>;
    /// Returns the top entry without removing it.
    fn top(&self) -> Option<&T> {
        self.iter_from_top().next()
    }
}

// Top of the stack is the end of the vector.
impl<T> AnyStack<T> for Vec<T> {
    type Iter<'a>
        = Rev<slice::Iter<'a, T>>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn flip(&mut self) {
        self.as_mut_slice().reverse();
    }
    fn iter_from_top(&self) -> Self::Iter<'_> {
        self.as_slice().iter().rev()
    }
    fn top(&self) -> Option<&T> {
        self.last()
    }
}

// Top of the stack is the front of the ring buffer.
impl<T> AnyStack<T> for VecDeque<T> {
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn flip(&mut self) {
        self.make_contiguous().reverse();
    }
    fn iter_from_top(&self) -> Self::Iter<'_> {
        self.iter()
    }
    fn top(&self) -> Option<&T> {
        self.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_stack<S: AnyStack<i32>>() {
        let mut s = S::default();
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.top(), Some(&3));
        assert_eq!(s.iter_from_top().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

        s.flip();
        assert_eq!(s.top(), Some(&1));
        assert_eq!(s.iter_from_top().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(3));
        assert!(s.is_empty());
    }

    #[test]
    fn test_stack_vec_backend() {
        check_stack::<Vec<i32>>();
    }

    #[test]
    fn test_stack_vec_deque_backend() {
        check_stack::<VecDeque<i32>>();
    }

    #[test]
    fn test_stack_flip_wrapped_ring_buffer() {
        let mut s: VecDeque<i32> = VecDeque::with_capacity(4);
        // Force the ring buffer to wrap before flipping.
        for i in 0..4 {
            AnyStack::push(&mut s, i);
        }
        AnyStack::pop(&mut s);
        AnyStack::pop(&mut s);
        AnyStack::push(&mut s, 10);
        AnyStack::push(&mut s, 11);
        AnyStack::flip(&mut s);
        let order: Vec<_> = s.iter_from_top().copied().collect();
        assert_eq!(order, vec![0, 1, 10, 11]);
    }
}
