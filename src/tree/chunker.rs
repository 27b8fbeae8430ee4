//! Splitting content into fixed-size chunks

use crate::{Error, Result};
use bytes::Bytes;

/// Split `content` into consecutive chunks of `leaf_size` bytes
///
/// The last chunk holds the remainder and is never padded. Chunks are
/// zero-copy views into `content`.
pub fn chunk(content: &Bytes, leaf_size: usize) -> Result<Vec<Bytes>> {
    if leaf_size == 0 {
        return Err(Error::InvalidConfiguration(
            "leaf_size must be positive".to_string(),
        ));
    }
    if content.is_empty() {
        return Err(Error::InvalidConfiguration(
            "content is empty, nothing to chunk".to_string(),
        ));
    }

    let chunks = (0..content.len())
        .step_by(leaf_size)
        .map(|start| {
            let end = start.saturating_add(leaf_size).min(content.len());
            content.slice(start..end)
        })
        .collect();
    Ok(chunks)
}
