//! Chunking and bottom-up merkle tree construction
//!
//! Content is split into fixed-size chunks, each chunk becomes a leaf, and
//! levels are combined pairwise until a single root remains:
//! - Leaf digests are `H(chunk)`
//! - Internal digests are `H(hex(left) || hex(right))`
//! - Odd levels are evened out with padding, keeping the tree perfect

mod builder;
mod chunker;
mod config;
mod merkle;

pub use builder::{build, TreeBuilder};
pub use chunker::chunk;
pub use config::{TreeConfig, DEFAULT_LEAF_SIZE};
pub use merkle::MerkleTree;
