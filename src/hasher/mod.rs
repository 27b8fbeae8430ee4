//! Pluggable hash functions and digest composition

mod algorithm;
mod blake3_hasher;
mod combine;
mod sha256_hasher;
mod traits;

pub use algorithm::HashAlgorithm;
pub use blake3_hasher::Blake3Hasher;
pub use combine::{internal_digest, leaf_digest};
pub use sha256_hasher::Sha256Hasher;
pub use traits::HashFunction;
