//! Precondition violations.
//!
//! Every operation in this crate has a single failure mode: the caller invoked it
//! outside the state its contract requires (popping an empty deque, adding to a
//! machine that is already extracting, ...). These are caller bugs, so kernel
//! operations fail fast by panicking with a [`Violation`]. The `try_*` operations of
//! the secondary layers hand the same value back as an `Err` instead.

use core::fmt::{Display, Formatter, Result};
use std::error::Error;

/// A broken precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A deque operation that needs at least one entry was called on `<>`.
    EmptyDeque,

    /// `remove_first` was called on a machine holding no entries.
    EmptyMachine,

    /// `add` or `change_to_extraction_mode` was called in extraction mode.
    NotInInsertionMode,

    /// `remove_first` was called in insertion mode.
    NotInExtractionMode,

    /// `transfer_from` was given a source of a different representation.
    IncompatibleRepresentation {
        /// Representation of the receiving instance.
        expected: &'static str,
        /// Representation of the source instance.
        found: &'static str,
    },

    /// An ordered-sequence position outside `0..len` (or `0..=len` for inserts).
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

impl Violation {
    /// Aborts the current operation with this violation.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("violation of: {self}")
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Violation::EmptyDeque => write!(f, "deque is empty"),
            Violation::EmptyMachine => write!(f, "sorting machine is empty"),
            Violation::NotInInsertionMode => write!(f, "sorting machine is not in insertion mode"),
            Violation::NotInExtractionMode => {
                write!(f, "sorting machine is not in extraction mode")
            }
            Violation::IncompatibleRepresentation { expected, found } => write!(
                f,
                "source representation {found} is incompatible with {expected}"
            ),
            Violation::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for length {len}")
            }
        }
    }
}

impl Error for Violation {}

/// Raises `violation` unless `condition` holds.
#[inline(always)]
#[track_caller]
pub(crate) fn require(condition: bool, violation: Violation) {
    if !condition {
        violation.raise();
    }
}
