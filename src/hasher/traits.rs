//! Hash function trait definition

use crate::model::Digest;
use crate::Result;

/// Trait for the cryptographic hash used to address nodes
///
/// Implementations must be deterministic and collision-resistant with a
/// fixed 32-byte output. A failing implementation surfaces
/// [`Error::HashFailure`](crate::Error::HashFailure), which aborts the
/// whole build.
pub trait HashFunction: Send + Sync {
    /// Get the algorithm name/identifier
    fn name(&self) -> &str;

    /// Hash a single byte slice
    fn hash(&self, data: &[u8]) -> Result<Digest>;

    /// Hash the concatenation of several byte slices
    /// Default implementation copies the parts into one buffer
    fn hash_many(&self, parts: &[&[u8]]) -> Result<Digest> {
        self.hash(&parts.concat())
    }
}
