//! ECDSA/secp521r1 test vectors.

use hex_literal::hex;

/// Private key from RFC 6979 § A.2: the "sample" key for P-521.
pub const SAMPLE_PRIVATE_KEY: [u8; 66] = hex!(
    "00fad06daa62ba3b25d2fb40133da757205de67f5bb0018fee8c86e1b68c7e75"
    "caa896eb32f1f47c70855836a6d16fcc1466f6d8fbec67db89ec0c08b0e996b8"
    "3538"
);

/// Raw public key `x‖y` matching [`SAMPLE_PRIVATE_KEY`].
pub const SAMPLE_PUBLIC_KEY: [u8; 132] = hex!(
    "01894550d0785932e00eaa23b694f213f8c3121f86dc97a04e5a7167db4e5bcd"
    "371123d46e45db6b5d5370a7f20fb633155d38ffa16d2bd761dcac474b9a2f50"
    "23a400493101c962cd4d2fddf782285e64584139c2f91b47f87ff82354d6630f"
    "746a28a0db25741b5b34a828008b22acc23f924faafbd4d33f81ea66956dfeaa"
    "2bfdfcf5"
);

/// Nonce which RFC 6979 derives for the message `"sample"` with SHA-512.
///
/// The signatures below all use this nonce, whatever the hash function.
pub const SAMPLE_NONCE: [u8; 66] = hex!(
    "01dae2ea071f8110dc26882d4d5eae0621a3256fc8847fb9022e2b7d28e6f101"
    "98b1574fdd03a9053c08a1854a168aa5a57470ec97dd5ce090124ef52a2f7ecb"
    "ffd3"
);

/// Message signed by the vectors below.
pub const SAMPLE_MESSAGE: &[u8] = b"sample";

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-256.
pub const SAMPLE_SIGNATURE_SHA256: [u8; 132] = hex!(
    "00c328fafcbd79dd77850370c46325d987cb525569fb63c5d3bc53950e6d4c5f"
    "174e25a1ee9017b5d450606add152b534931d7d4e8455cc91f9b15bf05ec36e3"
    "77fa001351212d396c6cf1418cdf4e635fba68b061a652709612b122e786eb04"
    "23ebe52712a04ba1809a0f8937d85d982dd2bd8119f8405cc8d81af44776057d"
    "0c9ef012"
);

/// Signature `r‖s` over [`SAMPLE_MESSAGE`] hashed with SHA-512.
pub const SAMPLE_SIGNATURE_SHA512: [u8; 132] = hex!(
    "00c328fafcbd79dd77850370c46325d987cb525569fb63c5d3bc53950e6d4c5f"
    "174e25a1ee9017b5d450606add152b534931d7d4e8455cc91f9b15bf05ec36e3"
    "77fa00617cce7cf5064806c467f678d3b4080d6f1cc50af26ca209417308281b"
    "68af282623eaa63e5b5c0723d8b8c37ff0777b1a20f8ccb1dccc43997f1ee0e4"
    "4da4a67a"
);

/// `s + 1` for the SHA-512 signature, which must not verify.
pub const SAMPLE_S_PLUS_ONE: [u8; 66] = hex!(
    "00617cce7cf5064806c467f678d3b4080d6f1cc50af26ca209417308281b68af"
    "282623eaa63e5b5c0723d8b8c37ff0777b1a20f8ccb1dccc43997f1ee0e44da4"
    "a67b"
);
