//! BLAKE3 hash function

use super::HashFunction;
use crate::model::Digest;
use crate::Result;

/// BLAKE3, the default hash function
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Hasher;

impl HashFunction for Blake3Hasher {
    fn name(&self) -> &str {
        "blake3"
    }

    fn hash(&self, data: &[u8]) -> Result<Digest> {
        Ok(Digest::from_bytes(*blake3::hash(data).as_bytes()))
    }

    fn hash_many(&self, parts: &[&[u8]]) -> Result<Digest> {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        Ok(Digest::from_bytes(*hasher.finalize().as_bytes()))
    }
}
