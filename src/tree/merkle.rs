//! A built tree together with its build metadata

use crate::model::{Digest, Node};
use crate::ops::{diff_leaves, LeafDiff};
use crate::traversal::DepthFirstOrder;
use crate::{Error, Result};
use std::ops::Range;

/// A merkle tree over chunked content
///
/// Wraps the root [`Node`] with what it was built from, so comparisons can
/// check that two trees are addressed with the same hash function and map
/// differing leaves back to byte ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    root: Node,
    leaf_size: usize,
    content_len: usize,
    chunk_count: usize,
    algorithm: String,
}

impl MerkleTree {
    pub(crate) fn new(
        root: Node,
        leaf_size: usize,
        content_len: usize,
        chunk_count: usize,
        algorithm: String,
    ) -> Self {
        MerkleTree {
            root,
            leaf_size,
            content_len,
            chunk_count,
            algorithm,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_digest(&self) -> &Digest {
        self.root.digest()
    }

    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Length in bytes of the content the tree was built from
    pub fn content_len(&self) -> usize {
        self.content_len
    }

    /// Number of real (non-padding) leaves
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth_first(&self, order: DepthFirstOrder) -> Vec<&Node> {
        self.root.depth_first(order)
    }

    pub fn breadth_first(&self) -> Vec<&Node> {
        self.root.breadth_first()
    }

    /// All leaves, padding included, left to right
    pub fn leaves(&self) -> Vec<&Node> {
        self.root.leaves()
    }

    /// Leaves holding real chunks, in content order
    pub fn real_leaves(&self) -> Vec<&Node> {
        self.leaves()
            .into_iter()
            .filter(|leaf| !leaf.is_padding())
            .collect()
    }

    /// Root digest equality
    pub fn equal(&self, other: &MerkleTree) -> bool {
        self.root.equal(&other.root)
    }

    /// Leaves of `other` whose digest differs from the leaf at the same
    /// position in `self`
    pub fn inconsistent_leaves<'a>(&'a self, other: &'a MerkleTree) -> Result<Vec<&'a Node>> {
        self.check_algorithm(other)?;
        self.root.inconsistent_leaves(&other.root)
    }

    /// Positional leaf diff against `other`
    pub fn diff<'a>(&'a self, other: &'a MerkleTree) -> Result<LeafDiff<'a>> {
        self.check_algorithm(other)?;
        diff_leaves(&self.root, &other.root)
    }

    /// Byte ranges of `other`'s content covered by leaves that differ
    ///
    /// Positions that are padding in `other` have no bytes and are skipped.
    pub fn changed_ranges(&self, other: &MerkleTree) -> Result<Vec<Range<usize>>> {
        let diff = self.diff(other)?;
        Ok(diff
            .entries
            .iter()
            .filter(|entry| !entry.new.is_padding())
            .map(|entry| other.chunk_range(entry.index))
            .collect())
    }

    /// Byte range of the chunk at `index`
    pub fn chunk_range(&self, index: usize) -> Range<usize> {
        let start = index.saturating_mul(self.leaf_size).min(self.content_len);
        let end = start.saturating_add(self.leaf_size).min(self.content_len);
        start..end
    }

    fn check_algorithm(&self, other: &MerkleTree) -> Result<()> {
        if self.algorithm != other.algorithm {
            return Err(Error::AlgorithmMismatch {
                left: self.algorithm.clone(),
                right: other.algorithm.clone(),
            });
        }
        Ok(())
    }
}
