//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signatures are the raw concatenation `r‖s` of two 66-byte big-endian scalars. Public keys are
//! passed in their raw `x‖y` form; see [`crate::uncompressed_to_raw`] and
//! [`crate::compressed_to_raw`] to convert SEC1 encodings.
//!
//! The nonce is supplied by the caller, who must either draw it uniformly at random from
//! `[1, n)` or derive it deterministically as in RFC 6979. Reusing a nonce across two messages
//! reveals the private key.
//!
//! Prehashes of 66 bytes or more are truncated to their leftmost 521 bits, which shifts them
//! right by 7 bits. SHA-512 digests are shorter than that and are used as they are.
//!
//! ## Signing/Verification Example
//!
//! ```
//! # #[cfg(feature = "test-vectors")]
//! # {
//! use p521::{ecdh::secret_to_public, ecdsa::{sign_sha512, verify_sha512}};
//! # use p521::test_vectors::ecdsa::{SAMPLE_NONCE as nonce, SAMPLE_PRIVATE_KEY as secret_key};
//!
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//!
//! // Signing
//! let mut signature = [0u8; 132];
//! assert!(sign_sha512(&mut signature, message, &secret_key, &nonce));
//!
//! // Verification
//! let mut public_key = [0u8; 132];
//! assert!(secret_to_public(&mut public_key, &secret_key));
//! let (r, s) = signature.split_at(66);
//! assert!(verify_sha512(message, &public_key, r.try_into().unwrap(), s.try_into().unwrap()));
//! # }
//! ```

use crate::{FieldBytes, LIMBS, NistP521, RawPublicKey};
use primeorder::ecdsa;
use sha2::{Sha256, Sha384, Sha512};

/// ECDSA/P-521 signature: `r‖s`.
pub type Signature = [u8; 132];

/// Sign a message digest computed by the caller.
///
/// Returns `false` if the private key or nonce is out of range or the signature is degenerate;
/// the contents of `signature` must then be discarded.
pub fn sign_prehash(
    signature: &mut Signature,
    prehash: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_prehash::<NistP521, LIMBS>(signature, prehash, private_key, nonce)
}

/// Hash `msg` with SHA-256 and sign it.
pub fn sign_sha256(
    signature: &mut Signature,
    msg: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_digest::<NistP521, Sha256, LIMBS>(signature, msg, private_key, nonce)
}

/// Hash `msg` with SHA-384 and sign it.
pub fn sign_sha384(
    signature: &mut Signature,
    msg: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_digest::<NistP521, Sha384, LIMBS>(signature, msg, private_key, nonce)
}

/// Hash `msg` with SHA-512 and sign it.
pub fn sign_sha512(
    signature: &mut Signature,
    msg: &[u8],
    private_key: &FieldBytes,
    nonce: &FieldBytes,
) -> bool {
    ecdsa::sign_digest::<NistP521, Sha512, LIMBS>(signature, msg, private_key, nonce)
}

/// Verify a signature over a message digest computed by the caller.
pub fn verify_prehash(
    prehash: &[u8],
    public_key: &RawPublicKey,
    r: &FieldBytes,
    s: &FieldBytes,
) -> bool {
    ecdsa::verify_prehash::<NistP521, LIMBS>(prehash, public_key, r, s)
}

/// Hash `msg` with SHA-256 and verify the signature `(r, s)` over it.
pub fn verify_sha256(msg: &[u8], public_key: &RawPublicKey, r: &FieldBytes, s: &FieldBytes) -> bool {
    ecdsa::verify_digest::<NistP521, Sha256, LIMBS>(msg, public_key, r, s)
}

/// Hash `msg` with SHA-384 and verify the signature `(r, s)` over it.
pub fn verify_sha384(msg: &[u8], public_key: &RawPublicKey, r: &FieldBytes, s: &FieldBytes) -> bool {
    ecdsa::verify_digest::<NistP521, Sha384, LIMBS>(msg, public_key, r, s)
}

/// Hash `msg` with SHA-512 and verify the signature `(r, s)` over it.
pub fn verify_sha512(msg: &[u8], public_key: &RawPublicKey, r: &FieldBytes, s: &FieldBytes) -> bool {
    ecdsa::verify_digest::<NistP521, Sha512, LIMBS>(msg, public_key, r, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AffinePoint, SecretKey, SecretKeyArithmetic,
        test_vectors::{
            ecdsa::{
                SAMPLE_MESSAGE, SAMPLE_NONCE, SAMPLE_PRIVATE_KEY, SAMPLE_PUBLIC_KEY,
                SAMPLE_S_PLUS_ONE, SAMPLE_SIGNATURE_SHA256, SAMPLE_SIGNATURE_SHA512,
            },
            group::ORDER,
        },
    };
    use sha2::{Digest, Sha256, Sha512};

    fn split(signature: &Signature) -> (FieldBytes, FieldBytes) {
        let mut r = [0; 66];
        let mut s = [0; 66];
        r.copy_from_slice(&signature[..66]);
        s.copy_from_slice(&signature[66..]);
        (r, s)
    }

    // Test vector from RFC 6979 Appendix 2.7 (NIST P-521 + SHA-512)
    // <https://tools.ietf.org/html/rfc6979#appendix-A.2.7>
    #[test]
    fn rfc6979_sha512() {
        let mut signature = [0; 132];
        assert!(sign_sha512(
            &mut signature,
            SAMPLE_MESSAGE,
            &SAMPLE_PRIVATE_KEY,
            &SAMPLE_NONCE
        ));
        assert_eq!(signature, SAMPLE_SIGNATURE_SHA512);

        let (r, s) = split(&signature);
        assert!(verify_sha512(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &r, &s));
        assert!(!verify_sha512(b"test", &SAMPLE_PUBLIC_KEY, &r, &s));
        assert!(!verify_sha512(
            SAMPLE_MESSAGE,
            &SAMPLE_PUBLIC_KEY,
            &r,
            &SAMPLE_S_PLUS_ONE
        ));
    }

    #[test]
    fn sha256_with_fixed_nonce() {
        let mut signature = [0; 132];
        assert!(sign_sha256(
            &mut signature,
            SAMPLE_MESSAGE,
            &SAMPLE_PRIVATE_KEY,
            &SAMPLE_NONCE
        ));
        assert_eq!(signature, SAMPLE_SIGNATURE_SHA256);

        let (r, s) = split(&signature);
        assert!(verify_sha256(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &r, &s));
        assert!(!verify_sha512(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &r, &s));
    }

    #[test]
    fn sha384_round_trip() {
        let mut signature = [0; 132];
        assert!(sign_sha384(
            &mut signature,
            SAMPLE_MESSAGE,
            &SAMPLE_PRIVATE_KEY,
            &SAMPLE_NONCE
        ));

        let (r, s) = split(&signature);
        assert!(verify_sha384(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &r, &s));
    }

    #[test]
    fn prehash_matches_digest_variants() {
        let mut expected = [0; 132];
        let mut signature = [0; 132];

        assert!(sign_sha512(&mut expected, SAMPLE_MESSAGE, &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        let prehash = Sha512::digest(SAMPLE_MESSAGE);
        assert!(sign_prehash(&mut signature, &prehash, &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        assert_eq!(signature, expected);

        // leading zero bytes below 66 bytes do not change the integer
        let mut padded = [0; 65];
        padded[1..].copy_from_slice(&prehash);
        assert!(sign_prehash(&mut signature, &padded, &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        assert_eq!(signature, expected);

        let (r, s) = split(&signature);
        assert!(verify_prehash(&prehash, &SAMPLE_PUBLIC_KEY, &r, &s));
        assert!(verify_prehash(&padded, &SAMPLE_PUBLIC_KEY, &r, &s));
    }

    #[test]
    fn long_prehash_is_truncated_to_521_bits() {
        // 0x80 in the last of 66 bytes is bit 7 of a 528-bit integer, which becomes 1
        let mut long = [0; 66];
        long[65] = 0x80;

        let mut expected = [0; 132];
        let mut signature = [0; 132];
        assert!(sign_prehash(&mut expected, &[0x01], &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        assert!(sign_prehash(&mut signature, &long, &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        assert_eq!(signature, expected);

        // trailing bytes past the first 66 are ignored
        let mut longer = [0xff; 80];
        longer[..66].copy_from_slice(&long);
        assert!(sign_prehash(&mut signature, &longer, &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        assert_eq!(signature, expected);

        let (r, s) = split(&signature);
        assert!(verify_prehash(&long, &SAMPLE_PUBLIC_KEY, &r, &s));
    }

    #[test]
    fn short_prehash_is_left_padded() {
        let mut padded = [0; 65];
        padded[33..].copy_from_slice(&Sha256::digest(SAMPLE_MESSAGE));

        let mut expected = [0; 132];
        let mut signature = [0; 132];
        assert!(sign_prehash(&mut expected, &padded, &SAMPLE_PRIVATE_KEY, &SAMPLE_NONCE));
        assert!(sign_prehash(
            &mut signature,
            &padded[33..],
            &SAMPLE_PRIVATE_KEY,
            &SAMPLE_NONCE
        ));
        assert_eq!(signature, expected);
        assert_eq!(signature, SAMPLE_SIGNATURE_SHA256);
    }

    #[test]
    fn zero_nonce_is_rejected() {
        let mut first = [0; 132];
        let mut second = [0xaa; 132];
        assert!(!sign_sha512(&mut first, SAMPLE_MESSAGE, &SAMPLE_PRIVATE_KEY, &[0; 66]));
        assert!(!sign_sha512(&mut second, SAMPLE_MESSAGE, &SAMPLE_PRIVATE_KEY, &[0; 66]));
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_private_key_is_rejected() {
        let mut signature = [0; 132];
        assert!(!sign_sha512(&mut signature, SAMPLE_MESSAGE, &[0; 66], &SAMPLE_NONCE));
        assert!(!sign_sha512(&mut signature, SAMPLE_MESSAGE, &ORDER, &SAMPLE_NONCE));
        assert!(!sign_sha512(&mut signature, SAMPLE_MESSAGE, &[0xff; 66], &SAMPLE_NONCE));
    }

    #[test]
    fn verify_rejects_out_of_range_scalars() {
        let (r, s) = split(&SAMPLE_SIGNATURE_SHA512);

        assert!(!verify_sha512(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &[0; 66], &s));
        assert!(!verify_sha512(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &r, &[0; 66]));
        assert!(!verify_sha512(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &ORDER, &s));
        assert!(!verify_sha512(SAMPLE_MESSAGE, &SAMPLE_PUBLIC_KEY, &r, &ORDER));
    }

    #[test]
    fn verify_rejects_invalid_public_key() {
        let (r, s) = split(&SAMPLE_SIGNATURE_SHA512);
        let mut public_key = SAMPLE_PUBLIC_KEY;
        public_key[0] ^= 0x02;
        assert!(!verify_sha512(SAMPLE_MESSAGE, &public_key, &r, &s));
        assert!(!verify_sha512(SAMPLE_MESSAGE, &[0; 132], &r, &s));
    }

    #[test]
    fn verify_rejects_identity_commitment() {
        // Q = -G and e = r = s = 1 give R' = G + Q = O
        let mut public_key = [0; 132];
        (-AffinePoint::GENERATOR).write_raw_bytes(&mut public_key);

        let mut one = [0; 66];
        one[65] = 1;
        assert!(!verify_prehash(&[1], &public_key, &one, &one));
    }

    #[test]
    fn secret_key_signing() {
        let secret_key = SecretKey::from_slice(&SAMPLE_PRIVATE_KEY).unwrap();
        let prehash = Sha512::digest(SAMPLE_MESSAGE);

        let mut signature = [0; 132];
        secret_key
            .sign_prehash(&mut signature, &prehash, &SAMPLE_NONCE)
            .unwrap();
        assert_eq!(signature, SAMPLE_SIGNATURE_SHA512);

        assert!(
            secret_key
                .sign_prehash(&mut signature, &prehash, &[0; 66])
                .is_err()
        );
    }
}
