//! SHA-256 hash function

use super::HashFunction;
use crate::model::Digest;
use crate::Result;
use sha2::{Digest as _, Sha256};

/// SHA-256
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl HashFunction for Sha256Hasher {
    fn name(&self) -> &str {
        "sha256"
    }

    fn hash(&self, data: &[u8]) -> Result<Digest> {
        Ok(Digest::from_bytes(Sha256::digest(data).into()))
    }

    fn hash_many(&self, parts: &[&[u8]]) -> Result<Digest> {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        Ok(Digest::from_bytes(hasher.finalize().into()))
    }
}
