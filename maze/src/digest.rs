//! Content digests with domain separation.
//!
//! Run reports bind themselves to the exact maze they were produced from by
//! carrying its digest. Each digest kind uses its own null-terminated domain
//! prefix so that identical bytes hashed for different purposes never collide.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Domain prefix for adjacency-list maze hashing.
pub const DOMAIN_ADJACENCY_MAZE: &[u8] = b"AMAZED::ADJACENCY_MAZE::V1\0";

/// Domain prefix for grid maze hashing.
pub const DOMAIN_GRID_MAZE: &[u8] = b"AMAZED::GRID_MAZE::V1\0";

/// A `"sha256:<hex>"` digest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 of `domain || data`, formatted as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
}
