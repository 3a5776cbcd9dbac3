//! ECDSA/secp384r1 test vectors.

use hex_literal::hex;

/// Private key from RFC 6979 § A.2: the "sample" key for P-384.
pub const SAMPLE_PRIVATE_KEY: [u8; 48] = hex!(
    "6b9d3dad2e1b8c1c05b19875b6659f4de23c3b667bf297ba9aa47740787137d8"
    "96d5724e4c70a825f872c9ea60d2edf5"
);

/// Raw public key `x‖y` matching [`SAMPLE_PRIVATE_KEY`].
pub const SAMPLE_PUBLIC_KEY: [u8; 96] = hex!(
    "ec3a4e415b4e19a4568618029f427fa5da9a8bc4ae92e02e06aae5286b300c64"
    "def8f0ea9055866064a254515480bc138015d9b72d7d57244ea8ef9ac0c62189"
    "6708a59367f9dfb9f54ca84b3f1c9db1288b231c3ae0d4fe7344fd2533264720"
);

/// Nonce which RFC 6979 derives for the message `"sample"` with SHA-384.
///
/// The signatures below all use this nonce, whatever the hash function.
pub const SAMPLE_NONCE: [u8; 48] = hex!(
    "94ed910d1a099dad3254e9242ae85abde4ba15168eaf0ca87a555fd56d10fbca"
    "2907e3e83ba95368623b8c4686915cf9"
);

/// Message signed by the vectors below.
pub const SAMPLE_MESSAGE: &[u8] = b"sample";

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-256.
pub const SAMPLE_SIGNATURE_SHA256: [u8; 96] = hex!(
    "94edbb92a5ecb8aad4736e56c691916b3f88140666ce9fa73d64c4ea95ad133c"
    "81a648152e44acf96e36dd1e80fabe46d16e0934d318117038e848a49b92b8fa"
    "885a3e3ab4119d29a2b0bcdad616c6231d18fdd14450a4c96ab8e6a9c2419d14"
);

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-384.
pub const SAMPLE_SIGNATURE_SHA384: [u8; 96] = hex!(
    "94edbb92a5ecb8aad4736e56c691916b3f88140666ce9fa73d64c4ea95ad133c"
    "81a648152e44acf96e36dd1e80fabe4699ef4aeb15f178cea1fe40db2603138f"
    "130e740a19624526203b6351d0a3a94fa329c145786e679e7b82c71a38628ac8"
);

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-512.
pub const SAMPLE_SIGNATURE_SHA512: [u8; 96] = hex!(
    "94edbb92a5ecb8aad4736e56c691916b3f88140666ce9fa73d64c4ea95ad133c"
    "81a648152e44acf96e36dd1e80fabe46b4f691e40a59b8f6c06665b2a90dd089"
    "febd458585f83ed7ea75ca733e171bd83e5ea3eeb04bac5f46419f6256501b93"
);

/// `s + 1` for the SHA-384 signature, which must not verify.
pub const SAMPLE_S_PLUS_ONE: [u8; 48] = hex!(
    "99ef4aeb15f178cea1fe40db2603138f130e740a19624526203b6351d0a3a94f"
    "a329c145786e679e7b82c71a38628ac9"
);
