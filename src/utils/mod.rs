//! Internal building blocks shared by the representations.

pub mod index_type;
