//! # Account Address
//!
//! Some account addresses are ed25519 public keys with secret keys held
//! off-chain. Others, such as program derived addresses, have no secret key
//! at all. Both are represented by [`Pubkey`].
//!
//! Derivation lives in `pdakit-derive`; this module only defines the value.

use crate::error::{AddressError, Result};
use crate::input::{array_from_slice, decode_base58, ByteInput};
use crate::PUBKEY_BYTES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// The address of an account.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl Pubkey {
    /// Create an address from any supported input shape.
    ///
    /// # Errors
    /// - `InvalidEncoding` for malformed base58 or a non-byte number
    /// - `InvalidLength` if the decoded value is not 32 bytes
    ///
    /// # Example
    /// ```rust
    /// use pdakit_core::Pubkey;
    ///
    /// let program_id = Pubkey::new("BPFLoaderUpgradeab1e11111111111111111111111").unwrap();
    /// assert_eq!(program_id.to_string(), "BPFLoaderUpgradeab1e11111111111111111111111");
    /// assert!(Pubkey::new(vec![1u8; 31]).is_err());
    /// ```
    pub fn new(value: impl Into<ByteInput>) -> Result<Self> {
        value.into().into_array().map(Self)
    }

    #[inline]
    pub const fn new_from_array(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// A process-unique address, useful in tests.
    ///
    /// Later calls compare greater than earlier ones.
    pub fn new_unique() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [0u8; PUBKEY_BYTES];
        bytes[..8].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Copy of the underlying bytes
    #[inline]
    pub const fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    #[inline]
    pub const fn as_array(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl FromStr for Pubkey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        array_from_slice(&decode_base58(s)?).map(Self)
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Pubkey> for [u8; PUBKEY_BYTES] {
    fn from(pubkey: Pubkey) -> Self {
        pubkey.0
    }
}

impl TryFrom<&[u8]> for Pubkey {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        array_from_slice(bytes).map(Self)
    }
}

impl TryFrom<Vec<u8>> for Pubkey {
    type Error = AddressError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::try_from(bytes.as_slice())
    }
}
