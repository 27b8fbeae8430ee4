//! Core data model types for chunktree

mod digest;
mod node;

pub use digest::{Digest, DIGEST_LEN};
pub use node::{padding_sentinel, Node, NodeSummary, PADDING_BYTE};
