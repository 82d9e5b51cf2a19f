//! # Curve Membership
//!
//! A 32-byte value is "on curve" when it decodes as a compressed Edwards25519
//! point, which means a matching ed25519 secret key could exist. Program
//! derived addresses must never be on curve.

use curve25519_dalek::edwards::CompressedEdwardsY;
use pdakit_core::Pubkey;

/// Predicate deciding whether 32 bytes encode a point on the signing curve.
///
/// The derivation engine is generic over this so alternative checks can be
/// substituted; [`Ed25519`] is the one every real address uses.
pub trait CurveCheck {
    fn is_curve_point(&self, bytes: &[u8; 32]) -> bool;
}

/// Edwards25519 point decompression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ed25519;

impl CurveCheck for Ed25519 {
    #[inline]
    fn is_curve_point(&self, bytes: &[u8; 32]) -> bool {
        bytes_are_curve_point(bytes)
    }
}

pub fn bytes_are_curve_point(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Check if an address could have a corresponding ed25519 secret key
pub fn is_on_curve(pubkey: &Pubkey) -> bool {
    bytes_are_curve_point(pubkey.as_array())
}
