//! The deque contract: a primitive kernel plus a secondary layer derived from it.
//!
//! Mathematically a deque is a string of `T`. [`DequeKernel`] is the minimal set of
//! operations every representation must provide; [`Deque`] adds operations whose
//! provided bodies call nothing but kernel operations, so they are correct for every
//! representation. A representation may still override a secondary operation when its
//! storage can do the same job more cheaply (direct indexing instead of pop + push).

use core::fmt::{Display, Write};
use core::hash::{Hash, Hasher};

use fnv::FnvHasher;

use crate::violation::Violation;

/// Primitive deque operations.
pub trait DequeKernel<T> {
    /// Front-to-back iterator returned by [`iter`](DequeKernel::iter).
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns a new, empty deque of the same representation.
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the deque is `<>`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `x` to the front: `self = <x> * #self`.
    fn push_front(&mut self, x: T);

    /// Adds `x` to the back: `self = #self * <x>`.
    fn push_back(&mut self, x: T);

    /// Removes and returns the front entry.
    ///
    /// # Panics
    /// Raises [`Violation::EmptyDeque`] if the deque is empty.
    fn pop_front(&mut self) -> T;

    /// Removes and returns the back entry.
    ///
    /// # Panics
    /// Raises [`Violation::EmptyDeque`] if the deque is empty.
    fn pop_back(&mut self) -> T;

    /// Resets to `<>`.
    fn clear(&mut self);

    /// Moves the whole state of `source` into `self`, leaving `source` empty.
    ///
    /// Both sides are the same representation by construction for concrete types.
    /// For [`TaggedDeque`](crate::deques::TaggedDeque) a source of a different kind raises
    /// [`Violation::IncompatibleRepresentation`].
    fn transfer_from(&mut self, source: &mut Self)
    where
        Self: Sized;

    /// Forward, one-pass traversal from front to back.
    ///
    /// Takes `&mut self` because some representations have to rearrange their storage
    /// before their natural order matches front-to-back order. The abstract value is
    /// never changed.
    fn iter(&mut self) -> Self::Iter<'_>;
}

/// [`DequeKernel`] enhanced with secondary operations.
pub trait Deque<T>: DequeKernel<T> {
    /// Reverses the deque in place.
    fn flip(&mut self) {
        // Popping from the front and pushing to the front reverses the order. The
        // temporary buffer keeps this iterative for long deques.
        let mut popped = Vec::with_capacity(self.len());
        while !self.is_empty() {
            popped.push(self.pop_front());
        }
        for x in popped {
            self.push_front(x);
        }
    }

    /// Returns the front entry without removing it.
    ///
    /// # Panics
    /// Raises [`Violation::EmptyDeque`] if the deque is empty.
    #[track_caller]
    fn front(&mut self) -> &T {
        self.iter()
            .next()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    /// Returns the back entry without removing it.
    ///
    /// # Panics
    /// Raises [`Violation::EmptyDeque`] if the deque is empty.
    #[track_caller]
    fn back(&mut self) -> &T {
        self.iter()
            .last()
            .unwrap_or_else(|| Violation::EmptyDeque.raise())
    }

    /// Replaces the front entry with `x` and returns the old front.
    ///
    /// # Panics
    /// Raises [`Violation::EmptyDeque`] if the deque is empty.
    #[track_caller]
    fn replace_front(&mut self, x: T) -> T {
        let old = self.try_pop_front().unwrap_or_else(|v| v.raise());
        self.push_front(x);
        old
    }

    /// Replaces the back entry with `x` and returns the old back.
    ///
    /// # Panics
    /// Raises [`Violation::EmptyDeque`] if the deque is empty.
    #[track_caller]
    fn replace_back(&mut self, x: T) -> T {
        let old = self.try_pop_back().unwrap_or_else(|v| v.raise());
        self.push_back(x);
        old
    }

    /// Removes and returns the front entry, or [`Violation::EmptyDeque`].
    fn try_pop_front(&mut self) -> Result<T, Violation> {
        if self.is_empty() {
            Err(Violation::EmptyDeque)
        } else {
            Ok(self.pop_front())
        }
    }

    /// Removes and returns the back entry, or [`Violation::EmptyDeque`].
    fn try_pop_back(&mut self) -> Result<T, Violation> {
        if self.is_empty() {
            Err(Violation::EmptyDeque)
        } else {
            Ok(self.pop_back())
        }
    }

    /// Structural equality against a deque of any representation: same length and,
    /// position by position from the front, equal entries.
    fn entries_eq<D>(&mut self, other: &mut D) -> bool
    where
        D: DequeKernel<T> + ?Sized,
        T: PartialEq,
    {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// Position-weighted hash of the entries: each entry's hash times its position,
    /// alternately added and subtracted.
    ///
    /// Equal deques always share a fingerprint, so it works as a cheap pre-check
    /// before [`entries_eq`](Deque::entries_eq). It is not part of equality.
    fn fingerprint(&mut self) -> u64
    where
        T: Hash,
    {
        self.iter()
            .enumerate()
            .fold(0u64, |acc, (position, entry)| {
                let mut hasher = FnvHasher::default();
                entry.hash(&mut hasher);
                let weighted = hasher.finish().wrapping_mul(position as u64);
                if position % 2 == 0 {
                    acc.wrapping_add(weighted)
                } else {
                    acc.wrapping_sub(weighted)
                }
            })
    }

    /// Renders the deque as `<e0,e1,...>`, front to back.
    fn render(&mut self) -> String
    where
        T: Display,
    {
        let mut out = String::from("<");
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{entry}");
        }
        out.push('>');
        out
    }
}

/// Writes `entries` as `<e0,e1,...>`. Shared by the `Display` impls of the
/// representations, which only hold `&self`.
pub(crate) fn write_angled<'a, T, I>(f: &mut core::fmt::Formatter<'_>, entries: I) -> core::fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_char('<')?;
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{entry}")?;
    }
    f.write_char('>')
}
