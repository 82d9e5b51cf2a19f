//! # Constructor Input
//!
//! [`Hash`](crate::Hash) and [`Pubkey`](crate::Pubkey) are built from one of
//! several input shapes. Rather than one constructor per shape, both types
//! accept a [`ByteInput`] and dispatch on its variant.
//!
//! ```rust
//! use pdakit_core::{ByteInput, Pubkey};
//!
//! let from_text = Pubkey::new("11111111111111111111111111111111").unwrap();
//! let from_bytes = Pubkey::new(vec![0u8; 32]).unwrap();
//! let from_numbers = Pubkey::new(ByteInput::Numbers(vec![0; 32])).unwrap();
//! assert_eq!(from_text, from_bytes);
//! assert_eq!(from_bytes, from_numbers);
//! ```

use crate::error::{AddressError, Result};

/// A value accepted by the multi-shape constructors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ByteInput {
    /// No value supplied; constructs the all-zero value
    #[default]
    Unset,
    /// Base58 text
    Base58(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Numeric array; every element must fit in a byte
    Numbers(Vec<i64>),
}

impl ByteInput {
    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ByteInput::Unset => "unset",
            ByteInput::Base58(_) => "base58",
            ByteInput::Bytes(_) => "bytes",
            ByteInput::Numbers(_) => "numbers",
        }
    }

    /// Decode into a fixed-size array.
    ///
    /// # Errors
    /// - `InvalidEncoding` if base58 text is malformed or a number is not a byte
    /// - `InvalidLength` if the decoded value is not exactly `N` bytes
    pub fn into_array<const N: usize>(self) -> Result<[u8; N]> {
        let bytes = match self {
            ByteInput::Unset => return Ok([0u8; N]),
            ByteInput::Base58(text) => decode_base58(&text)?,
            ByteInput::Bytes(bytes) => bytes,
            ByteInput::Numbers(numbers) => numbers_to_bytes(&numbers)?,
        };
        array_from_slice(&bytes)
    }
}

/// Copy a slice into a fixed-size array, checking its length.
pub(crate) fn array_from_slice<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| AddressError::InvalidLength {
        expected: N,
        found: bytes.len(),
    })
}

pub(crate) fn decode_base58(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| AddressError::InvalidEncoding(e.to_string()))
}

fn numbers_to_bytes(numbers: &[i64]) -> Result<Vec<u8>> {
    numbers
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| {
                AddressError::InvalidEncoding(format!(
                    "array element {} at index {} is not a byte",
                    value, index
                ))
            })
        })
        .collect()
}

impl From<&str> for ByteInput {
    fn from(text: &str) -> Self {
        ByteInput::Base58(text.to_string())
    }
}

impl From<String> for ByteInput {
    fn from(text: String) -> Self {
        ByteInput::Base58(text)
    }
}

impl From<Vec<u8>> for ByteInput {
    fn from(bytes: Vec<u8>) -> Self {
        ByteInput::Bytes(bytes)
    }
}

impl From<&[u8]> for ByteInput {
    fn from(bytes: &[u8]) -> Self {
        ByteInput::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for ByteInput {
    fn from(bytes: [u8; N]) -> Self {
        ByteInput::Bytes(bytes.to_vec())
    }
}

impl From<Vec<i64>> for ByteInput {
    fn from(numbers: Vec<i64>) -> Self {
        ByteInput::Numbers(numbers)
    }
}

impl<T: Into<ByteInput>> From<Option<T>> for ByteInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ByteInput::Unset, Into::into)
    }
}
