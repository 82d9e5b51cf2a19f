//! # Content Hash
//!
//! A 32-byte digest, usually the SHA-256 output of some ledger content.

use crate::error::{AddressError, Result};
use crate::input::{array_from_slice, decode_base58, ByteInput};
use crate::HASH_BYTES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// A hash; the 32-byte output of a hashing algorithm.
///
/// Immutable once constructed. Equality is byte-wise.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, Serialize, Deserialize)]
pub struct Hash([u8; HASH_BYTES]);

impl Hash {
    /// Create a hash from any supported input shape.
    ///
    /// # Errors
    /// - `InvalidEncoding` for malformed base58 or a non-byte number
    /// - `InvalidLength` if the decoded value is not 32 bytes
    pub fn new(value: impl Into<ByteInput>) -> Result<Self> {
        value.into().into_array().map(Self)
    }

    #[inline]
    pub const fn new_from_array(bytes: [u8; HASH_BYTES]) -> Self {
        Self(bytes)
    }

    /// A process-unique hash, useful in tests
    pub fn new_unique() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [0u8; HASH_BYTES];
        bytes[..8].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Copy of the underlying bytes
    #[inline]
    pub const fn to_bytes(self) -> [u8; HASH_BYTES] {
        self.0
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; HASH_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl FromStr for Hash {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        array_from_slice(&decode_base58(s)?).map(Self)
    }
}

impl From<[u8; HASH_BYTES]> for Hash {
    fn from(bytes: [u8; HASH_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; HASH_BYTES] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        array_from_slice(bytes).map(Self)
    }
}

impl TryFrom<Vec<u8>> for Hash {
    type Error = AddressError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::try_from(bytes.as_slice())
    }
}
