//! ECDH tests.

#![cfg(feature = "ecdh")]

use p256::{
    FieldBytes, Scalar, compressed_to_raw,
    ecdh::{diffie_hellman, secret_to_public},
    raw_to_compressed, validate_public_key,
};
use primefield::uint_from_be_slice;
use proptest::prelude::*;

prop_compose! {
    fn nonzero_scalar()(bytes in any::<[u8; 32]>()) -> FieldBytes {
        let scalar = Scalar::from_uint_reduced(&uint_from_be_slice(&bytes));
        let scalar = if bool::from(scalar.is_zero()) { Scalar::ONE } else { scalar };

        let mut out = [0u8; 32];
        scalar.write_be_bytes(&mut out);
        out
    }
}

proptest! {
    #[test]
    fn shared_secret_is_symmetric(a in nonzero_scalar(), b in nonzero_scalar()) {
        let mut alice_public = [0u8; 64];
        let mut bob_public = [0u8; 64];
        prop_assert!(secret_to_public(&mut alice_public, &a));
        prop_assert!(secret_to_public(&mut bob_public, &b));

        let mut alice_shared = [0u8; 64];
        let mut bob_shared = [0u8; 64];
        prop_assert!(diffie_hellman(&mut alice_shared, &bob_public, &a));
        prop_assert!(diffie_hellman(&mut bob_shared, &alice_public, &b));
        prop_assert_eq!(alice_shared, bob_shared);
        prop_assert!(validate_public_key(&alice_shared));
    }

    #[test]
    fn compression_round_trip(sk in nonzero_scalar()) {
        let mut public_key = [0u8; 64];
        prop_assert!(secret_to_public(&mut public_key, &sk));

        let mut compressed = [0u8; 33];
        raw_to_compressed(&public_key, &mut compressed);

        let mut decompressed = [0u8; 64];
        prop_assert!(compressed_to_raw(&compressed, &mut decompressed));
        prop_assert_eq!(decompressed, public_key);
    }
}
