//! Build configuration

use crate::hasher::HashAlgorithm;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default maximum bytes per chunk
pub const DEFAULT_LEAF_SIZE: usize = 1024;

/// Configuration for building a tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximum bytes per chunk; the last chunk may be shorter
    pub leaf_size: usize,
    /// Hash function used for every node
    pub algorithm: HashAlgorithm,
}

impl TreeConfig {
    pub fn new(leaf_size: usize) -> Self {
        TreeConfig {
            leaf_size,
            ..Default::default()
        }
    }

    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Reject configurations that cannot produce a tree
    pub fn validate(&self) -> Result<()> {
        if self.leaf_size == 0 {
            return Err(Error::InvalidConfiguration(
                "leaf_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            leaf_size: DEFAULT_LEAF_SIZE,
            algorithm: HashAlgorithm::default(),
        }
    }
}
