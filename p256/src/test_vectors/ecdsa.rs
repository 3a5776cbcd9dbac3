//! ECDSA/secp256r1 test vectors.

use hex_literal::hex;

/// Private key from RFC 6979 § A.2: the "sample" key for P-256.
pub const SAMPLE_PRIVATE_KEY: [u8; 32] = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");

/// Raw public key `x‖y` matching [`SAMPLE_PRIVATE_KEY`].
pub const SAMPLE_PUBLIC_KEY: [u8; 64] = hex!(
    "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"
    "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"
);

/// Nonce which RFC 6979 derives for the message `"sample"` with SHA-256.
///
/// The signatures below all use this nonce, whatever the hash function.
pub const SAMPLE_NONCE: [u8; 32] = hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60");

/// Message signed by the vectors below.
pub const SAMPLE_MESSAGE: &[u8] = b"sample";

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-256.
pub const SAMPLE_SIGNATURE_SHA256: [u8; 64] = hex!(
    "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"
    "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"
);

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-512.
pub const SAMPLE_SIGNATURE_SHA512: [u8; 64] = hex!(
    "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"
    "7f9d8de7c18b3a815d51e51f9dcff36a7662071b9b023a8cc226e655daaebe3f"
);

/// `s + 1` for the SHA-256 signature, which must not verify.
pub const SAMPLE_S_PLUS_ONE: [u8; 32] = hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda9");
