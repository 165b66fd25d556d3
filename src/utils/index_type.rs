//! Arena handle types for index-linked nodes.

use core::hash::Hash;
use std::fmt::Debug;

/// An integer type used as a **node handle** inside an arena.
///
/// Linked representations in this crate keep their nodes in a `Vec` and link them
/// through indices instead of pointers. That keeps ownership in one place (the arena)
/// and lets a smaller index type shrink every node on 64-bit targets.
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value meaning "no node" (the null link). Never a valid slot.
    const NONE: Self;

    /// The first slot.
    const ZERO: Self;

    /// Converts this handle to a `usize` for arena access.
    fn as_usize(self) -> usize;

    /// Converts a slot number to a handle.
    ///
    /// # Panics
    /// Panics if `i` does not fit below [`NONE`](IndexType::NONE).
    fn from_usize(i: usize) -> Self;

    /// Returns `true` if an arena of `len` slots can still be addressed, i.e. every
    /// slot index stays below `NONE`.
    #[inline(always)]
    fn can_address(len: usize) -> bool {
        len <= Self::NONE.as_usize()
    }
}

macro_rules! index_type_impl {
    ($($ty:ty),*) => {
        $(
            impl IndexType for $ty {
                const NONE: Self = <$ty>::MAX;
                const ZERO: Self = 0;

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    assert!(
                        i < <$ty>::MAX as usize,
                        "arena slot {i} does not fit in {}",
                        stringify!($ty)
                    );
                    i as $ty
                }
            }
        )*
    };
}

index_type_impl!(u8, u16, u32, usize);
