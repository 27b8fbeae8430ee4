//! Bottom-up tree construction

use super::{chunk, MerkleTree, TreeConfig};
use crate::hasher::{internal_digest, leaf_digest, HashFunction};
use crate::model::{padding_sentinel, Node};
use crate::{Error, Result};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds merkle trees with a fixed configuration and hash function
///
/// Construction is a single bottom-up pass: one leaf per chunk, then levels
/// are reduced pairwise until one node remains. A level with an odd count
/// greater than one gets one padding node appended first. On the leaf level
/// that is a single padding leaf; above it, a padding subtree as tall as its
/// siblings whose leaves are all padding leaves. Every leaf therefore ends up
/// at the same depth.
///
/// Padding leaves hash `leaf_size + 1` sentinel bytes, which no real chunk
/// can match, so padding never collides with content.
#[derive(Clone)]
pub struct TreeBuilder {
    config: TreeConfig,
    hasher: Arc<dyn HashFunction>,
}

impl TreeBuilder {
    /// Create a builder using the configured algorithm
    pub fn new(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        let hasher = config.algorithm.hasher();
        Ok(TreeBuilder { config, hasher })
    }

    /// Replace the hash function with a custom implementation
    pub fn with_hasher(mut self, hasher: impl HashFunction + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Name of the hash function trees from this builder are addressed with
    pub fn algorithm(&self) -> &str {
        self.hasher.name()
    }

    /// Chunk `content` and build its tree
    pub fn build(&self, content: impl Into<Bytes>) -> Result<MerkleTree> {
        let content: Bytes = content.into();
        let chunks = chunk(&content, self.config.leaf_size)?;
        let chunk_count = chunks.len();

        debug!(
            chunks = chunk_count,
            leaf_size = self.config.leaf_size,
            algorithm = self.hasher.name(),
            "building tree"
        );

        let root = self.build_root(chunks)?;
        debug!(height = root.height(), root = %root.digest().short(), "tree built");

        Ok(MerkleTree::new(
            root,
            self.config.leaf_size,
            content.len(),
            chunk_count,
            self.hasher.name().to_string(),
        ))
    }

    /// Reduce an ordered sequence of chunks to a root node
    ///
    /// Every chunk must be at most `leaf_size` bytes.
    pub fn build_root(&self, chunks: Vec<Bytes>) -> Result<Node> {
        if chunks.is_empty() {
            return Err(Error::InvalidConfiguration(
                "cannot build a tree without chunks".to_string(),
            ));
        }
        if let Some(chunk) = chunks.iter().find(|c| c.len() > self.config.leaf_size) {
            return Err(Error::InvalidConfiguration(format!(
                "chunk of {} bytes exceeds leaf_size {}",
                chunk.len(),
                self.config.leaf_size
            )));
        }

        let mut level = chunks
            .into_iter()
            .map(|chunk| Ok(Node::leaf(leaf_digest(self.hasher.as_ref(), &chunk)?, chunk)))
            .collect::<Result<Vec<_>>>()?;

        let mut padding_leaf: Option<Node> = None;
        let mut depth = 0usize;
        while level.len() > 1 {
            let padded = level.len() % 2 == 1;
            if padded {
                if padding_leaf.is_none() {
                    padding_leaf = Some(self.padding_leaf()?);
                }
                if let Some(leaf) = &padding_leaf {
                    level.push(self.padding_subtree(leaf.clone(), depth)?);
                }
            }
            trace!(level = depth, nodes = level.len(), padded, "reducing level");
            level = self.reduce_level(level)?;
            depth += 1;
        }

        level
            .pop()
            .ok_or_else(|| Error::InvalidConfiguration("empty tree level".to_string()))
    }

    fn padding_leaf(&self) -> Result<Node> {
        let sentinel = padding_sentinel(self.config.leaf_size).ok_or_else(|| {
            Error::InvalidConfiguration("leaf_size too large to pad".to_string())
        })?;
        let digest = leaf_digest(self.hasher.as_ref(), &sentinel)?;
        Ok(Node::padding(digest, sentinel))
    }

    /// Padding node of height `depth + 1` over copies of `leaf`
    fn padding_subtree(&self, leaf: Node, depth: usize) -> Result<Node> {
        let mut node = leaf;
        for _ in 0..depth {
            let digest = internal_digest(self.hasher.as_ref(), node.digest(), node.digest())?;
            node = Node::internal(digest, node.clone(), node);
        }
        Ok(node)
    }

    fn reduce_level(&self, level: Vec<Node>) -> Result<Vec<Node>> {
        let mut next = Vec::with_capacity(level.len() / 2);
        let mut nodes = level.into_iter();
        while let Some(left) = nodes.next() {
            let right = match nodes.next() {
                Some(right) => right,
                None => {
                    return Err(Error::InvalidConfiguration(
                        "unpaired node in tree level".to_string(),
                    ))
                }
            };
            let digest = internal_digest(self.hasher.as_ref(), left.digest(), right.digest())?;
            next.push(Node::internal(digest, left, right));
        }
        Ok(next)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        let config = TreeConfig::default();
        let hasher = config.algorithm.hasher();
        TreeBuilder { config, hasher }
    }
}

/// Build a tree over `content` using BLAKE3 and the given chunk size
pub fn build(content: impl Into<Bytes>, leaf_size: usize) -> Result<MerkleTree> {
    TreeBuilder::new(TreeConfig::new(leaf_size))?.build(content)
}
