//! # chunktree
//!
//! A content-addressed merkle tree over fixed-size chunks.
//!
//! Two parties holding trees over the same logical content can verify it is
//! identical by comparing root digests, or pinpoint which chunks differ
//! without exchanging the content itself.
//!
//! ## Core Concepts
//!
//! - **Chunks**: Contiguous slices of the content, `leaf_size` bytes each
//! - **Leaves**: Nodes whose digest is the hash of one chunk
//! - **Internal nodes**: Nodes whose digest is the hash of both children's digests
//! - **Padding**: Sentinel leaves that keep every level even, so the tree is perfect
//!
//! ## Example
//!
//! ```
//! use chunktree::build;
//!
//! let old = build("ABCDEFGH", 2)?;
//! let new = build("ABCDXXGH", 2)?;
//!
//! assert!(!old.equal(&new));
//! let changed = old.inconsistent_leaves(&new)?;
//! assert_eq!(changed[0].raw_content(), Some(&b"XX"[..]));
//! # Ok::<(), chunktree::Error>(())
//! ```

pub mod hasher;
pub mod model;
pub mod ops;
pub mod traversal;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use hasher::{Blake3Hasher, HashAlgorithm, HashFunction, Sha256Hasher};
pub use model::{padding_sentinel, Digest, Node, NodeSummary, PADDING_BYTE};
pub use ops::{diff_leaves, DiffEntry, LeafDiff};
pub use traversal::DepthFirstOrder;
pub use tree::{build, chunk, MerkleTree, TreeBuilder, TreeConfig};
