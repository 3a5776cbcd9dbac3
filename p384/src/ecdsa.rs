//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signatures are the raw concatenation `r‖s` of two 48-byte big-endian scalars. Public keys are
//! passed in their raw `x‖y` form; see [`crate::uncompressed_to_raw`] and
//! [`crate::compressed_to_raw`] to convert SEC1 encodings.
//!
//! The nonce is supplied by the caller, who must either draw it uniformly at random from
//! `[1, n)` or derive it deterministically as in RFC 6979. Reusing a nonce across two messages
//! reveals the private key.
//!
//! ## Signing/Verification Example
//!
//! ```
//! # #[cfg(feature = "test-vectors")]
//! # {
//! use p384::{ecdh::secret_to_public, ecdsa::{sign_sha384, verify_sha384}};
//! # use p384::test_vectors::ecdsa::{SAMPLE_NONCE as nonce, SAMPLE_PRIVATE_KEY as secret_key};
//!
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//!
//! // Signing
//! let mut signature = [0u8; 96];
//! assert!(sign_sha384(&mut signature, message, &secret_key, &nonce));
//!
//! // Verification
//! let mut public_key = [0u8; 96];
//! assert!(secret_to_public(&mut public_key, &secret_key));
//! let (r, s) = signature.split_at(48);
//! assert!(verify_sha384(message, &public_key, r.try_into().unwrap(), s.try_into().unwrap()));
//! # }
//! ```

use crate::{FieldBytes, LIMBS, NistP384, RawPublicKey};
use primeorder::ecdsa;
use sha2::{Sha256, Sha384, Sha512};

/// ECDSA/P-384 signature: `r‖s`.
pub type Signature = [u8; 96];

/// Sign a message digest computed by the caller.
///
/// Digests longer than 48 bytes are truncated to their leftmost 384 bits. Returns `false` if the
/// private key or nonce is out of range or the signature is degenerate; the contents of
/// `signature` must then be discarded.
pub fn sign_prehash(
    signature: &mut Signature,
    prehash: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_prehash::<NistP384, LIMBS>(signature, prehash, private_key, nonce)
}

/// Hash `msg` with SHA-256 and sign it.
pub fn sign_sha256(
    signature: &mut Signature,
    msg: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_digest::<NistP384, Sha256, LIMBS>(signature, msg, private_key, nonce)
}

/// Hash `msg` with SHA-384 and sign it.
pub fn sign_sha384(
    signature: &mut Signature,
    msg: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_digest::<NistP384, Sha384, LIMBS>(signature, msg, private_key, nonce)
}

/// Hash `msg` with SHA-512 and sign it.
pub fn sign_sha512(
    signature: &mut Signature,
    msg: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_digest::<NistP384, Sha512, LIMBS>(signature, msg, private_key, nonce)
}

/// Verify a signature over a message digest computed by the caller.
pub fn verify_prehash(
    prehash: &[u8],
    public_key: &RawPublicKey,
    r: &FieldBytes,
    s: &FieldBytes,
) -> bool {
    ecdsa::verify_prehash::<NistP384, LIMBS>(prehash, public_key, r, s)
}

/// Hash `msg` with SHA-256 and verify the signature `(r, s)` over it.
pub fn verify_sha256(msg: &[u8], public_key: &RawPublicKey, r: &FieldBytes, s: &FieldBytes) -> bool {
    ecdsa::verify_digest::<NistP384, Sha256, LIMBS>(msg, public_key, r, s)
}

/// Hash `msg` with SHA-384 and verify the signature `(r, s)` over it.
pub fn verify_sha384(msg: &[u8], public_key: &RawPublicKey, r: &FieldBytes, s: &FieldBytes) -> bool {
    ecdsa::verify_digest::<NistP384, Sha384, LIMBS>(msg, public_key, r, s)
}

/// Hash `msg` with SHA-512 and verify the signature `(r, s)` over it.
pub fn verify_sha512(msg: &[u8], public_key: &RawPublicKey, r: &FieldBytes, s: &FieldBytes) -> bool {
    ecdsa::verify_digest::<NistP384, Sha512, LIMBS>(msg, public_key, r, s)
}
