//! The sorting-machine contract.
//!
//! A sorting machine is the triple `(mode, order, contents)`: entries are added while
//! the machine is in [`Mode::Insertion`], the machine is switched once to
//! [`Mode::Extraction`], and from then on [`remove_first`](SortingMachineKernel::remove_first)
//! hands the entries back in non-decreasing `order`. When the sorting work happens
//! (on `add`, on the switch, or on each removal) is up to the representation.

use core::cmp::Ordering;
use core::fmt::{self, Display, Write};
use core::hash::Hash;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use crate::violation::Violation;

/// A total preorder on `T`.
///
/// Implemented for every cloneable `Fn(&T, &T) -> Ordering`, so closures, function
/// items and [`natural_order`] all work as orders.
pub trait Order<T>: Clone {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` may come out before `b`.
    #[inline]
    fn in_order(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

impl<T, F> Order<T> for F
where
    F: Fn(&T, &T) -> Ordering + Clone,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order given by `T`'s [`Ord`] impl.
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Phase of a sorting machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Accepting entries.
    #[default]
    Insertion,
    /// Handing entries back in order.
    Extraction,
}

/// Primitive sorting-machine operations.
pub trait SortingMachineKernel<T> {
    /// The order the machine was built with.
    type Order: Order<T>;

    /// Iterator over the contents in representation order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns a new, empty machine of the same representation and order.
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    /// Adds `x` to the contents.
    ///
    /// # Panics
    /// Raises [`Violation::NotInInsertionMode`] in extraction mode.
    fn add(&mut self, x: T);

    /// Switches to extraction mode. The switch is one-way.
    ///
    /// # Panics
    /// Raises [`Violation::NotInInsertionMode`] if already extracting.
    fn change_to_extraction_mode(&mut self);

    /// Removes and returns an entry that is minimal under [`order`](Self::order).
    ///
    /// # Panics
    /// Raises [`Violation::NotInExtractionMode`] in insertion mode and
    /// [`Violation::EmptyMachine`] if there is nothing left.
    fn remove_first(&mut self) -> T;

    /// Returns `true` while the machine accepts entries.
    fn is_in_insertion_mode(&self) -> bool;

    /// Returns the current phase.
    fn mode(&self) -> Mode {
        if self.is_in_insertion_mode() {
            Mode::Insertion
        } else {
            Mode::Extraction
        }
    }

    /// Returns the order the machine sorts by.
    fn order(&self) -> &Self::Order;

    /// Returns the number of entries held.
    fn size(&self) -> usize;

    /// Resets to insertion mode with no entries, keeping the order.
    fn clear(&mut self);

    /// Moves mode, order and contents of `source` into `self`. `source` is left empty
    /// in insertion mode with its own order.
    fn transfer_from(&mut self, source: &mut Self)
    where
        Self: Sized;

    /// Walks the contents in representation order. Only some representations keep
    /// their contents sorted, so no order is promised.
    fn iter(&self) -> Self::Iter<'_>;
}

/// [`SortingMachineKernel`] enhanced with secondary operations.
pub trait SortingMachine<T>: SortingMachineKernel<T> {
    /// Returns `true` if the machine holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Adds `x` if the machine is in insertion mode, otherwise hands it back.
    fn try_add(&mut self, x: T) -> Result<(), T> {
        if self.is_in_insertion_mode() {
            self.add(x);
            Ok(())
        } else {
            Err(x)
        }
    }

    /// Removes the first entry, or reports why it cannot.
    fn try_remove_first(&mut self) -> Result<T, Violation> {
        if self.is_in_insertion_mode() {
            Err(Violation::NotInExtractionMode)
        } else if self.size() == 0 {
            Err(Violation::EmptyMachine)
        } else {
            Ok(self.remove_first())
        }
    }

    /// Adds every entry of `entries`.
    ///
    /// # Panics
    /// Raises [`Violation::NotInInsertionMode`] in extraction mode.
    #[track_caller]
    fn add_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for x in entries {
            self.add(x);
        }
    }

    /// Switches to extraction mode if needed and removes every entry, in order.
    fn drain_sorted(&mut self) -> Vec<T> {
        if self.is_in_insertion_mode() {
            self.change_to_extraction_mode();
        }
        let mut sorted = Vec::with_capacity(self.size());
        while self.size() > 0 {
            sorted.push(self.remove_first());
        }
        sorted
    }

    /// Abstract equality against a machine of any representation: same mode and the
    /// same multiset of entries. Orders are not compared.
    fn entries_eq<M>(&self, other: &M) -> bool
    where
        M: SortingMachineKernel<T> + ?Sized,
        T: Hash + Eq,
    {
        if self.mode() != other.mode() || self.size() != other.size() {
            return false;
        }
        let mut counts: HashMap<&T, usize, FnvBuildHasher> =
            HashMap::with_capacity_and_hasher(self.size(), FnvBuildHasher::default());
        for x in self.iter() {
            *counts.entry(x).or_insert(0) += 1;
        }
        for x in other.iter() {
            match counts.get_mut(x) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Renders the machine as `(insertion_mode,{e0,e1,...})`, entries in
    /// representation order.
    fn render(&self) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_machine(&mut out, self.is_in_insertion_mode(), self.iter());
        out
    }
}

/// Writes `(insertion_mode,{e0,e1,...})`. Shared by `render` and the `Display` impls.
pub(crate) fn write_machine<'a, T, I, W>(out: &mut W, insertion_mode: bool, entries: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write + ?Sized,
{
    write!(out, "({insertion_mode},{{")?;
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "{entry}")?;
    }
    out.write_str("})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_closure_and_natural() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert!(reverse.in_order(&2, &1));
        assert!(natural_order::<i32>.in_order(&1, &1));
        assert_eq!(natural_order::<&str>.compare(&"a", &"b"), Ordering::Less);
    }

    #[test]
    fn test_mode_defaults_to_insertion() {
        assert_eq!(Mode::default(), Mode::Insertion);
    }

    #[test]
    fn test_write_machine_format() {
        let mut out = String::new();
        write_machine(&mut out, false, &["a", "b"]).unwrap();
        assert_eq!(out, "(false,{a,b})");

        let mut empty = String::new();
        write_machine::<i32, _, _>(&mut empty, true, &[]).unwrap();
        assert_eq!(empty, "(true,{})");
    }
}
