//! ECDSA tests.

#![cfg(all(feature = "ecdh", feature = "ecdsa"))]

use p384::{
    FieldBytes, Scalar,
    ecdh::secret_to_public,
    ecdsa::{sign_prehash, sign_sha384, verify_prehash, verify_sha384},
};
use primefield::uint_from_be_slice;
use proptest::prelude::*;

prop_compose! {
    fn nonzero_scalar()(bytes in proptest::collection::vec(any::<u8>(), 48)) -> FieldBytes {
        let scalar = Scalar::from_uint_reduced(&uint_from_be_slice(&bytes));
        let scalar = if bool::from(scalar.is_zero()) { Scalar::ONE } else { scalar };

        let mut out = [0u8; 48];
        scalar.write_be_bytes(&mut out);
        out
    }
}

fn split(signature: &[u8; 96]) -> (FieldBytes, FieldBytes) {
    let mut r = [0u8; 48];
    let mut s = [0u8; 48];
    r.copy_from_slice(&signature[..48]);
    s.copy_from_slice(&signature[48..]);
    (r, s)
}

proptest! {
    #[test]
    fn sign_and_verify(
        sk in nonzero_scalar(),
        nonce in nonzero_scalar(),
        msg in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let mut public_key = [0u8; 96];
        prop_assert!(secret_to_public(&mut public_key, &sk));

        let mut signature = [0u8; 96];
        prop_assert!(sign_sha384(&mut signature, &msg, &sk, &nonce));

        let (r, s) = split(&signature);
        prop_assert!(verify_sha384(&msg, &public_key, &r, &s));
    }

    #[test]
    fn reject_flipped_signature_bit(
        sk in nonzero_scalar(),
        nonce in nonzero_scalar(),
        prehash in proptest::collection::vec(any::<u8>(), 48),
        bit in 0usize..768,
    ) {
        let mut public_key = [0u8; 96];
        prop_assert!(secret_to_public(&mut public_key, &sk));

        let mut signature = [0u8; 96];
        prop_assert!(sign_prehash(&mut signature, &prehash, &sk, &nonce));

        signature[bit / 8] ^= 1 << (bit % 8);
        let (r, s) = split(&signature);
        prop_assert!(!verify_prehash(&prehash, &public_key, &r, &s));
    }

    #[test]
    fn reject_other_public_key(
        sk in nonzero_scalar(),
        other in nonzero_scalar(),
        nonce in nonzero_scalar(),
        prehash in proptest::collection::vec(any::<u8>(), 48),
    ) {
        prop_assume!(sk != other);

        let mut public_key = [0u8; 96];
        prop_assert!(secret_to_public(&mut public_key, &other));

        let mut signature = [0u8; 96];
        prop_assert!(sign_prehash(&mut signature, &prehash, &sk, &nonce));

        let (r, s) = split(&signature);
        prop_assert!(!verify_prehash(&prehash, &public_key, &r, &s));
    }
}
