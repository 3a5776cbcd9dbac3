#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod arithmetic;

#[cfg(feature = "ecdh")]
pub mod ecdh;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use arithmetic::{
    AffinePoint, ProjectivePoint,
    field::{FieldElement, FieldParams},
    scalar::{Scalar, ScalarParams},
};
pub use elliptic_curve;
pub use primeorder::{self, Error, Result, SecretKeyArithmetic};

use elliptic_curve::{FieldBytesEncoding, bigint::U576, consts::U66};

/// Number of limbs used to represent field elements and scalars.
const LIMBS: usize = U576::LIMBS;

/// Order of NIST P-521's elliptic curve group (i.e. scalar modulus) serialized
/// as hexadecimal, zero-padded to nine limbs.
///
/// ```text
/// n = 01FF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF
///     FFFFFFFA 51868783 BF2F966B 7FCC0148 F709A5D0 3BB5C9B8 899C47AE BB6FB71E
///     91386409
/// ```
const ORDER_HEX: &str = "00000000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409";

/// NIST P-521 elliptic curve.
///
/// This curve is also known as secp521r1 (SECG)
/// and is specified in [NIST SP 800-186]:
/// Recommendations for Discrete Logarithm-based Cryptography:
/// Elliptic Curve Domain Parameters.
///
/// Its equation is `y² = x³ - 3x + b` over a 521-bit Mersenne prime field where `b` is
/// the constant:
///
/// ```text
/// b = 1093849038073734274511112390766805569936207598951683748994586394
///     4959531161507350160137087375737596232485921322967063133094384525
///     31591012912142327488478985984
/// ```
///
/// Field elements and scalars are encoded on 66 bytes: the top 7 bits of the
/// leading byte are always zero.
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP521;

impl elliptic_curve::Curve for NistP521 {
    /// 66-byte serialized field elements.
    type FieldBytesSize = U66;

    /// 521-bit field modulus, padded to nine 64-bit limbs.
    type Uint = U576;

    /// Order of NIST P-521's elliptic curve group (i.e. scalar modulus).
    const ORDER: U576 = U576::from_be_hex(ORDER_HEX);
}

impl elliptic_curve::PrimeCurve for NistP521 {}

/// Field bytes are shorter than the 72-byte integer encoding, so they are left-padded.
impl FieldBytesEncoding<NistP521> for U576 {
    fn decode_field_bytes(field_bytes: &elliptic_curve::FieldBytes<NistP521>) -> Self {
        primefield::uint_from_be_slice(field_bytes)
    }

    fn encode_field_bytes(&self) -> elliptic_curve::FieldBytes<NistP521> {
        let mut field_bytes = elliptic_curve::FieldBytes::<NistP521>::default();
        primefield::uint_write_be_bytes(self, &mut field_bytes);
        field_bytes
    }
}

/// NIST P-521 field element or scalar serialized as 66 big-endian bytes.
pub type FieldBytes = [u8; 66];

/// Raw NIST P-521 public key: `x‖y`.
pub type RawPublicKey = [u8; 132];

/// Uncompressed SEC1-encoded NIST P-521 curve point: `0x04‖x‖y`.
pub type UncompressedPoint = [u8; 133];

/// Compressed SEC1-encoded NIST P-521 curve point: `(0x02|0x03)‖x`.
pub type CompressedPoint = [u8; 67];

/// NIST P-521 secret key.
///
/// Curve arithmetic on secret keys is provided by [`SecretKeyArithmetic`].
pub type SecretKey = elliptic_curve::SecretKey<NistP521>;

/// Check that a raw public key is a valid point on the curve.
pub fn validate_public_key(public_key: &RawPublicKey) -> bool {
    primeorder::sec1::validate_public_key::<NistP521, LIMBS>(public_key)
}

/// Check that a private key lies in `[1, n)`.
pub fn validate_private_key(private_key: &FieldBytes) -> bool {
    primeorder::sec1::validate_private_key::<NistP521, LIMBS>(private_key)
}

/// Convert an uncompressed point into a raw public key.
///
/// Only the tag is checked; use [`validate_public_key`] on the result.
pub fn uncompressed_to_raw(point: &UncompressedPoint, public_key: &mut RawPublicKey) -> bool {
    primeorder::sec1::uncompressed_to_raw::<NistP521, LIMBS>(point, public_key)
}

/// Decompress a compressed point into a raw public key.
pub fn compressed_to_raw(point: &CompressedPoint, public_key: &mut RawPublicKey) -> bool {
    primeorder::sec1::compressed_to_raw::<NistP521, LIMBS>(point, public_key)
}

/// Convert a raw public key into an uncompressed point.
pub fn raw_to_uncompressed(public_key: &RawPublicKey, point: &mut UncompressedPoint) {
    primeorder::sec1::raw_to_uncompressed::<NistP521, LIMBS>(public_key, point)
}

/// Convert a raw public key into a compressed point.
pub fn raw_to_compressed(public_key: &RawPublicKey, point: &mut CompressedPoint) {
    primeorder::sec1::raw_to_compressed::<NistP521, LIMBS>(public_key, point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{
        ecdsa::SAMPLE_PUBLIC_KEY,
        group::{COMPRESSED_GENERATOR, ORDER, ORDER_MINUS_ONE},
    };

    #[test]
    fn private_key_range() {
        assert!(!validate_private_key(&[0; 66]));
        assert!(!validate_private_key(&ORDER));
        assert!(!validate_private_key(&[0xff; 66]));
        assert!(validate_private_key(&ORDER_MINUS_ONE));

        let mut one = [0; 66];
        one[65] = 1;
        assert!(validate_private_key(&one));
    }

    #[test]
    fn public_key_validation() {
        assert!(validate_public_key(&SAMPLE_PUBLIC_KEY));

        let mut off_curve = SAMPLE_PUBLIC_KEY;
        off_curve[131] ^= 1;
        assert!(!validate_public_key(&off_curve));

        assert!(!validate_public_key(&[0; 132]));
        assert!(!validate_public_key(&[0xff; 132]));
    }

    #[test]
    fn compressed_round_trip() {
        let mut generator = [0; 132];
        assert!(compressed_to_raw(&COMPRESSED_GENERATOR, &mut generator));

        let mut compressed = [0; 67];
        raw_to_compressed(&generator, &mut compressed);
        assert_eq!(compressed, COMPRESSED_GENERATOR);

        let mut expected = [0; 132];
        AffinePoint::GENERATOR.write_raw_bytes(&mut expected);
        assert_eq!(generator, expected);
    }

    #[test]
    fn compressed_round_trip_negated() {
        let mut compressed = COMPRESSED_GENERATOR;
        compressed[0] ^= 1;

        let mut raw = [0; 132];
        assert!(compressed_to_raw(&compressed, &mut raw));

        let mut expected = [0; 132];
        (-AffinePoint::GENERATOR).write_raw_bytes(&mut expected);
        assert_eq!(raw, expected);
    }

    #[test]
    fn compressed_rejects_invalid_input() {
        let mut raw = [0; 132];

        let mut bad_tag = COMPRESSED_GENERATOR;
        bad_tag[0] = 0x04;
        assert!(!compressed_to_raw(&bad_tag, &mut raw));

        let mut overflow = [0xff; 67];
        overflow[0] = 0x02;
        assert!(!compressed_to_raw(&overflow, &mut raw));
        assert_eq!(raw, [0; 132]);
    }

    #[test]
    fn uncompressed_round_trip() {
        let mut uncompressed = [0; 133];
        raw_to_uncompressed(&SAMPLE_PUBLIC_KEY, &mut uncompressed);
        assert_eq!(uncompressed[0], 0x04);

        let mut raw = [0; 132];
        assert!(uncompressed_to_raw(&uncompressed, &mut raw));
        assert_eq!(raw, SAMPLE_PUBLIC_KEY);

        uncompressed[0] = 0x02;
        assert!(!uncompressed_to_raw(&uncompressed, &mut [0; 132]));
    }

    #[test]
    fn sec1_decoding() {
        let mut uncompressed = [0; 133];
        raw_to_uncompressed(&SAMPLE_PUBLIC_KEY, &mut uncompressed);
        let point = AffinePoint::from_sec1_bytes(&uncompressed).unwrap();

        let mut compressed = [0; 67];
        raw_to_compressed(&SAMPLE_PUBLIC_KEY, &mut compressed);
        assert_eq!(AffinePoint::from_sec1_bytes(&compressed).unwrap(), point);

        assert!(AffinePoint::from_sec1_bytes(&[]).is_err());
        assert!(AffinePoint::from_sec1_bytes(&uncompressed[..132]).is_err());
    }

    #[test]
    fn secret_key_round_trip() {
        let secret_key = SecretKey::from_slice(&ORDER_MINUS_ONE).unwrap();
        assert_eq!(secret_key.to_bytes().as_slice(), &ORDER_MINUS_ONE);
        assert_eq!(secret_key.public_point(), -AffinePoint::GENERATOR);
        assert_eq!(secret_key.to_scalar(), -Scalar::ONE);

        assert!(SecretKey::from_slice(&ORDER).is_err());
        assert!(SecretKey::from_slice(&[0; 66]).is_err());
        assert!(SecretKey::from_slice(&[0xff; 66]).is_err());
        assert!(SecretKey::from_slice(&[1; 16]).is_err());
    }

    #[test]
    fn short_secret_key_is_left_padded() {
        let secret_key = SecretKey::from_slice(&ORDER_MINUS_ONE[2..]).unwrap();
        let mut expected = [0; 66];
        expected[2..].copy_from_slice(&ORDER_MINUS_ONE[2..]);
        assert_eq!(secret_key.to_bytes().as_slice(), &expected);
    }

    #[test]
    fn secret_key_generation() {
        use rand_core::OsRng;

        let secret_key = SecretKey::generate(&mut OsRng);
        let mut bytes = [0; 66];
        bytes.copy_from_slice(&secret_key.to_bytes());
        assert!(validate_private_key(&bytes));
        assert_eq!(SecretKey::from_slice(&bytes).unwrap(), secret_key);

        let mut public_key = [0; 132];
        secret_key.public_point().write_raw_bytes(&mut public_key);
        assert!(validate_public_key(&public_key));

        assert_ne!(SecretKey::generate(&mut OsRng), secret_key);
    }

    #[test]
    fn curve_order_matches_scalar_modulus() {
        use elliptic_curve::Curve;
        use primefield::MontyParams;

        assert_eq!(NistP521::ORDER, ScalarParams::MODULUS);
    }
}
