//! Leaf and internal digest composition

use super::HashFunction;
use crate::model::Digest;
use crate::Result;

/// Digest of a leaf: `H(chunk)`
pub fn leaf_digest(hasher: &dyn HashFunction, chunk: &[u8]) -> Result<Digest> {
    hasher.hash(chunk)
}

/// Digest of an internal node: `H(hex(left) || hex(right))`
///
/// Order-sensitive: swapping the children changes the result.
pub fn internal_digest(hasher: &dyn HashFunction, left: &Digest, right: &Digest) -> Result<Digest> {
    let left_hex = left.to_hex();
    let right_hex = right.to_hex();
    hasher.hash_many(&[left_hex.as_bytes(), right_hex.as_bytes()])
}
