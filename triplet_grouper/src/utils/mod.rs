//! Utility data structures and the error type shared by the grouping pipeline.

pub mod error;
pub mod union_find;
