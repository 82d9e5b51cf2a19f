//! Seed argument syntax.
//!
//! ```text
//! vault              UTF-8 bytes of the text
//! hex:deadbeef       hex-decoded bytes
//! pubkey:<base58>    the 32 bytes of an address
//! u8:7 u16:7 u32:7 u64:7   little-endian integers
//! ```

use anyhow::{bail, Context, Result};
use pdakit_core::{Pubkey, MAX_SEED_LEN};

pub fn parse_seed(arg: &str) -> Result<Vec<u8>> {
    let bytes = match arg.split_once(':') {
        Some(("hex", value)) => hex::decode(value).with_context(|| format!("invalid hex seed {:?}", value))?,
        Some(("pubkey", value)) => value
            .parse::<Pubkey>()
            .with_context(|| format!("invalid pubkey seed {:?}", value))?
            .to_bytes()
            .to_vec(),
        Some(("u8", value)) => parse_int::<u8>(value)?.to_le_bytes().to_vec(),
        Some(("u16", value)) => parse_int::<u16>(value)?.to_le_bytes().to_vec(),
        Some(("u32", value)) => parse_int::<u32>(value)?.to_le_bytes().to_vec(),
        Some(("u64", value)) => parse_int::<u64>(value)?.to_le_bytes().to_vec(),
        _ => arg.as_bytes().to_vec(),
    };

    if bytes.len() > MAX_SEED_LEN {
        bail!("seed {:?} is {} bytes, at most {} allowed", arg, bytes.len(), MAX_SEED_LEN);
    }
    Ok(bytes)
}

fn parse_int<T>(value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse::<T>()
        .with_context(|| format!("invalid integer seed {:?}", value))
}
