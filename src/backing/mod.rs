//! Collaborator contracts consumed by the representations.
//!
//! Each trait is the minimal capability set a representation needs from its backing
//! collection. The standard library collections implement them, so every
//! representation works out of the box and can be re-targeted at another backing
//! type by changing a single type parameter.

pub mod queue;
pub mod sequence;
pub mod stack;

pub use queue::AnyQueue;
pub use sequence::{AnySequence, SequenceIter};
pub use stack::AnyStack;
