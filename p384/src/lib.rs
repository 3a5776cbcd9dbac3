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

use elliptic_curve::{
    FieldBytesEncoding,
    bigint::{ArrayEncoding, U384},
    consts::U48,
};

/// Number of limbs used to represent field elements and scalars.
const LIMBS: usize = U384::LIMBS;

/// Order of NIST P-384's elliptic curve group (i.e. scalar modulus) serialized
/// as hexadecimal.
///
/// ```text
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF
///     C7634D81 F4372DDF 581A0DB2 48B0A77A ECEC196A CCC52973
/// ```
const ORDER_HEX: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973";

/// NIST P-384 elliptic curve.
///
/// This curve is also known as secp384r1 (SECG)
/// and is specified in [NIST SP 800-186]:
/// Recommendations for Discrete Logarithm-based Cryptography:
/// Elliptic Curve Domain Parameters.
///
/// Its equation is `y² = x³ - 3x + b` over a ~384-bit prime field where `b` is
/// the constant:
///
/// ```text
/// b = 2758019355995970587784901184038904809305690585636156852142870730
///     1988689241309860865136260764883745107765439761230575
/// ```
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP384;

impl elliptic_curve::Curve for NistP384 {
    /// 48-byte serialized field elements.
    type FieldBytesSize = U48;

    /// 384-bit integer type used for internally representing field elements.
    type Uint = U384;

    /// Order of NIST P-384's elliptic curve group (i.e. scalar modulus).
    const ORDER: U384 = U384::from_be_hex(ORDER_HEX);
}

impl elliptic_curve::PrimeCurve for NistP384 {}

impl FieldBytesEncoding<NistP384> for U384 {
    fn decode_field_bytes(field_bytes: &elliptic_curve::FieldBytes<NistP384>) -> Self {
        U384::from_be_byte_array(*field_bytes)
    }

    fn encode_field_bytes(&self) -> elliptic_curve::FieldBytes<NistP384> {
        self.to_be_byte_array()
    }
}

/// NIST P-384 field element or scalar serialized as 48 big-endian bytes.
pub type FieldBytes = [u8; 48];

/// Raw NIST P-384 public key: `x‖y`.
pub type RawPublicKey = [u8; 96];

/// Uncompressed SEC1-encoded NIST P-384 curve point: `0x04‖x‖y`.
pub type UncompressedPoint = [u8; 97];

/// Compressed SEC1-encoded NIST P-384 curve point: `(0x02|0x03)‖x`.
pub type CompressedPoint = [u8; 49];

/// NIST P-384 secret key.
///
/// Curve arithmetic on secret keys is provided by [`SecretKeyArithmetic`].
pub type SecretKey = elliptic_curve::SecretKey<NistP384>;

/// Check that a raw public key is a valid point on the curve.
pub fn validate_public_key(public_key: &RawPublicKey) -> bool {
    primeorder::sec1::validate_public_key::<NistP384, LIMBS>(public_key)
}

/// Check that a private key lies in `[1, n)`.
pub fn validate_private_key(private_key: &FieldBytes) -> bool {
    primeorder::sec1::validate_private_key::<NistP384, LIMBS>(private_key)
}

/// Convert an uncompressed point into a raw public key.
///
/// Only the tag is checked; use [`validate_public_key`] on the result.
pub fn uncompressed_to_raw(point: &UncompressedPoint, public_key: &mut RawPublicKey) -> bool {
    primeorder::sec1::uncompressed_to_raw::<NistP384, LIMBS>(point, public_key)
}

/// Decompress a compressed point into a raw public key.
pub fn compressed_to_raw(point: &CompressedPoint, public_key: &mut RawPublicKey) -> bool {
    primeorder::sec1::compressed_to_raw::<NistP384, LIMBS>(point, public_key)
}

/// Convert a raw public key into an uncompressed point.
pub fn raw_to_uncompressed(public_key: &RawPublicKey, point: &mut UncompressedPoint) {
    primeorder::sec1::raw_to_uncompressed::<NistP384, LIMBS>(public_key, point)
}

/// Convert a raw public key into a compressed point.
pub fn raw_to_compressed(public_key: &RawPublicKey, point: &mut CompressedPoint) {
    primeorder::sec1::raw_to_compressed::<NistP384, LIMBS>(public_key, point)
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
        assert!(!validate_private_key(&[0; 48]));
        assert!(!validate_private_key(&ORDER));
        assert!(!validate_private_key(&[0xff; 48]));
        assert!(validate_private_key(&ORDER_MINUS_ONE));

        let mut one = [0; 48];
        one[47] = 1;
        assert!(validate_private_key(&one));
    }

    #[test]
    fn public_key_validation() {
        assert!(validate_public_key(&SAMPLE_PUBLIC_KEY));

        let mut off_curve = SAMPLE_PUBLIC_KEY;
        off_curve[95] ^= 1;
        assert!(!validate_public_key(&off_curve));

        assert!(!validate_public_key(&[0; 96]));
        assert!(!validate_public_key(&[0xff; 96]));
    }

    #[test]
    fn compressed_round_trip() {
        let mut generator = [0; 96];
        assert!(compressed_to_raw(&COMPRESSED_GENERATOR, &mut generator));

        let mut compressed = [0; 49];
        raw_to_compressed(&generator, &mut compressed);
        assert_eq!(compressed, COMPRESSED_GENERATOR);

        let mut expected = [0; 96];
        AffinePoint::GENERATOR.write_raw_bytes(&mut expected);
        assert_eq!(generator, expected);
    }

    #[test]
    fn compressed_round_trip_negated() {
        let mut compressed = COMPRESSED_GENERATOR;
        compressed[0] ^= 1;

        let mut raw = [0; 96];
        assert!(compressed_to_raw(&compressed, &mut raw));

        let mut expected = [0; 96];
        (-AffinePoint::GENERATOR).write_raw_bytes(&mut expected);
        assert_eq!(raw, expected);
    }

    #[test]
    fn compressed_rejects_invalid_input() {
        let mut raw = [0; 96];

        let mut bad_tag = COMPRESSED_GENERATOR;
        bad_tag[0] = 0x04;
        assert!(!compressed_to_raw(&bad_tag, &mut raw));

        let mut overflow = [0xff; 49];
        overflow[0] = 0x02;
        assert!(!compressed_to_raw(&overflow, &mut raw));
        assert_eq!(raw, [0; 96]);
    }

    #[test]
    fn uncompressed_round_trip() {
        let mut uncompressed = [0; 97];
        raw_to_uncompressed(&SAMPLE_PUBLIC_KEY, &mut uncompressed);
        assert_eq!(uncompressed[0], 0x04);

        let mut raw = [0; 96];
        assert!(uncompressed_to_raw(&uncompressed, &mut raw));
        assert_eq!(raw, SAMPLE_PUBLIC_KEY);

        uncompressed[0] = 0x02;
        assert!(!uncompressed_to_raw(&uncompressed, &mut [0; 96]));
    }

    #[test]
    fn sec1_decoding() {
        let mut uncompressed = [0; 97];
        raw_to_uncompressed(&SAMPLE_PUBLIC_KEY, &mut uncompressed);
        let point = AffinePoint::from_sec1_bytes(&uncompressed).unwrap();

        let mut compressed = [0; 49];
        raw_to_compressed(&SAMPLE_PUBLIC_KEY, &mut compressed);
        assert_eq!(AffinePoint::from_sec1_bytes(&compressed).unwrap(), point);

        assert!(AffinePoint::from_sec1_bytes(&[]).is_err());
        assert!(AffinePoint::from_sec1_bytes(&uncompressed[..96]).is_err());
    }

    #[test]
    fn secret_key_round_trip() {
        let secret_key = SecretKey::from_slice(&ORDER_MINUS_ONE).unwrap();
        assert_eq!(secret_key.to_bytes().as_slice(), &ORDER_MINUS_ONE);
        assert_eq!(secret_key.public_point(), -AffinePoint::GENERATOR);
        assert_eq!(secret_key.to_scalar(), -Scalar::ONE);

        assert!(SecretKey::from_slice(&ORDER).is_err());
        assert!(SecretKey::from_slice(&[0; 48]).is_err());
        assert!(SecretKey::from_slice(&[1; 16]).is_err());
    }

    #[test]
    fn secret_key_generation() {
        use rand_core::OsRng;

        let secret_key = SecretKey::generate(&mut OsRng);
        let mut bytes = [0; 48];
        bytes.copy_from_slice(&secret_key.to_bytes());
        assert!(validate_private_key(&bytes));
        assert_eq!(SecretKey::from_slice(&bytes).unwrap(), secret_key);

        let mut public_key = [0; 96];
        secret_key.public_point().write_raw_bytes(&mut public_key);
        assert!(validate_public_key(&public_key));

        assert_ne!(SecretKey::generate(&mut OsRng), secret_key);
    }

    #[test]
    fn curve_order_matches_scalar_modulus() {
        use elliptic_curve::Curve;
        use primefield::MontyParams;

        assert_eq!(NistP384::ORDER, ScalarParams::MODULUS);
    }
}
