//! Tree comparison: root equality and leaf-level diffing

mod diff;

pub use diff::{diff_leaves, DiffEntry, LeafDiff};
