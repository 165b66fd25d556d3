//! # Kernel Collections
//!
//! Two abstract data types, each with several interchangeable representations:
//!
//! * **Deque**: a string of entries with push/pop at both ends. Four representations:
//!   [`ListDeque`], [`SequenceDeque`], [`StackPairDeque`] and [`LinkedDeque`].
//! * **Sorting machine**: a two-phase sorter. Entries are added in insertion mode, the
//!   machine is switched once to extraction mode, and entries come back out smallest
//!   first. Three representations: [`MergeSortMachine`], [`SelectionSortMachine`] and
//!   [`InsertionSortMachine`].
//!
//! ## Kernel and Secondary Layers
//!
//! Each type is split into two traits:
//!
//! * The **kernel** ([`DequeKernel`], [`SortingMachineKernel`]) is the minimal set of
//!   operations a representation has to implement.
//! * The **secondary layer** ([`Deque`], [`SortingMachine`]) adds operations whose
//!   provided bodies use only kernel calls, so they work for every representation.
//!   Representations may override them with cheaper versions.
//!
//! Representations are built on small collaborator traits ([`AnyStack`], [`AnyQueue`],
//! [`AnySequence`]) implemented for `Vec` and `VecDeque`.
//!
//! ## Contract Violations
//!
//! Calling an operation outside its precondition (popping an empty deque, adding to a
//! machine that is extracting) is a bug in the caller. Kernel operations panic with
//! a [`Violation`]; the `try_*` operations return it as an `Err` instead.
//!
//! ## Cargo Features
//!
//! * `deque` (default): the [`deques`] module.
//! * `sorting-machine` (default): the [`sorting`] module.
//!
//! ## Examples
//!
//! ### Deque
//!
//! ```rust
//! use kernel_collections::prelude::*;
//! use kernel_collections::{LinkedDeque, StackPairDeque};
//!
//! let mut d: StackPairDeque<&str> = StackPairDeque::new();
//! d.push_back("one");
//! d.push_back("two");
//! d.push_front("zero");
//! assert_eq!(d.to_string(), "<zero,one,two>");
//!
//! d.flip();
//! assert_eq!(d.pop_front(), "two");
//!
//! // Any two representations compare by their entries.
//! let mut other: LinkedDeque<&str> = ["one", "zero"].into_iter().collect();
//! assert!(d.entries_eq(&mut other));
//! ```
//!
//! ### Sorting Machine
//!
//! ```rust
//! use kernel_collections::prelude::*;
//! use kernel_collections::{MachineKind, TaggedSortingMachine};
//!
//! let mut m: TaggedSortingMachine<i32, _> =
//!     TaggedSortingMachine::new(MachineKind::InsertionSort, natural_order::<i32>);
//! m.add_all([3, 1, 2]);
//! m.change_to_extraction_mode();
//!
//! assert_eq!(m.remove_first(), 1);
//! assert_eq!(m.drain_sorted(), vec![2, 3]);
//! ```
//!
//! ### Handling a Violation
//!
//! ```rust
//! use kernel_collections::prelude::*;
//! use kernel_collections::{ListDeque, Violation};
//!
//! let mut d: ListDeque<u8> = ListDeque::new();
//! assert_eq!(d.try_pop_back(), Err(Violation::EmptyDeque));
//! ```

// --- Module Declarations ---

pub mod backing;
pub mod utils;
pub mod violation;

#[cfg(feature = "deque")]
pub mod deques;
#[cfg(feature = "sorting-machine")]
pub mod sorting;

// --- Re-exports ---

pub use backing::{AnyQueue, AnySequence, AnyStack};
pub use utils::index_type::IndexType;
pub use violation::Violation;

#[cfg(feature = "deque")]
pub use deques::{
    Deque, DequeKernel, DequeKind, LinkedDeque, ListDeque, SequenceDeque, StackPairDeque,
    TaggedDeque,
};
#[cfg(feature = "sorting-machine")]
pub use sorting::{
    InsertionSortMachine, MachineKind, MergeSortMachine, Mode, Order, SelectionSortMachine,
    SortingMachine, SortingMachineKernel, TaggedSortingMachine, natural_order,
};

/// Every trait needed to call kernel and secondary operations, plus [`natural_order`].
///
/// The collaborator traits are not included, since they are implemented for `Vec`
/// and `VecDeque`. Import them from [`backing`](crate::backing) when writing a
/// representation.
pub mod prelude {
    #[cfg(feature = "deque")]
    pub use crate::deques::{Deque, DequeKernel};
    #[cfg(feature = "sorting-machine")]
    pub use crate::sorting::{Order, SortingMachine, SortingMachineKernel, natural_order};
}
