//! Elliptic Curve Diffie-Hellman (Ephemeral) Support.
//!
//! Keys are 66-byte big-endian scalars and raw `x‖y` public keys. The shared secret is the full
//! shared point `x‖y`; protocols usually keep only the x-coordinate and pass it to a KDF.

use crate::{FieldBytes, LIMBS, NistP521, RawPublicKey};
use primeorder::ecdh;

/// Shared point computed via ECDH key agreement: `x‖y`.
pub type SharedSecret = [u8; 132];

/// Compute the public key `[d]G` of a private key `d`, returning `false` if `d` is not in
/// `[1, n)`.
pub fn secret_to_public(public_key: &mut RawPublicKey, private_key: &FieldBytes) -> bool {
    ecdh::secret_to_public::<NistP521, LIMBS>(public_key, private_key)
}

/// Compute the shared point `[d]Q` from our private key `d` and the peer's public key `Q`.
///
/// Returns `false` if either key is invalid. The output is written in every case and must be
/// discarded on failure.
pub fn diffie_hellman(
    shared_secret: &mut SharedSecret,
    public_key: &RawPublicKey,
    private_key: &FieldBytes,
) -> bool {
    ecdh::diffie_hellman::<NistP521, LIMBS>(shared_secret, public_key, private_key)
}
