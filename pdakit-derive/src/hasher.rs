//! # Hashing
//!
//! SHA-256 helpers. [`domain_hash`] is the primitive the address engine is
//! built on; the [`Hasher`] and free functions produce content [`Hash`]es.

use pdakit_core::Hash;
use sha2::{Digest, Sha256};

/// SHA-256 over `parts` concatenated in order, followed by `tag`.
///
/// An empty tag gives a plain hash of the concatenation.
pub fn domain_hash(parts: &[&[u8]], tag: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.update(tag);
    hasher.finalize().into()
}

/// Incremental SHA-256 producing a [`Hash`]
#[derive(Clone, Default)]
pub struct Hasher {
    inner: Sha256,
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(&mut self, val: &[u8]) {
        self.inner.update(val);
    }

    pub fn hashv(&mut self, vals: &[&[u8]]) {
        for val in vals {
            self.hash(val);
        }
    }

    pub fn result(self) -> Hash {
        Hash::new_from_array(self.inner.finalize().into())
    }
}

/// Hash a sequence of byte slices as if they were one contiguous buffer
pub fn hashv(vals: &[&[u8]]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.hashv(vals);
    hasher.result()
}

pub fn hash(val: &[u8]) -> Hash {
    hashv(&[val])
}

/// Chain `val` onto an existing hash: `hash(id || val)`
pub fn extend_and_hash(id: &Hash, val: &[u8]) -> Hash {
    hashv(&[id.as_ref(), val])
}
