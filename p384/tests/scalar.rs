//! Scalar arithmetic tests.

use p384::Scalar;
use primefield::uint_from_be_slice;
use proptest::prelude::*;

prop_compose! {
    fn scalar()(bytes in proptest::collection::vec(any::<u8>(), 48)) -> Scalar {
        Scalar::from_uint_reduced(&uint_from_be_slice(&bytes))
    }
}

proptest! {
    #[test]
    fn invert_is_multiplicative_inverse(w in scalar()) {
        prop_assume!(!bool::from(w.is_zero()));
        let inv = w.invert().unwrap();
        prop_assert_eq!(w * inv, Scalar::ONE);
    }

    #[test]
    fn bytes_round_trip(w in scalar()) {
        let mut bytes = [0u8; 48];
        w.write_be_bytes(&mut bytes);
        prop_assert_eq!(Scalar::from_be_slice(&bytes).unwrap(), w);
    }

    #[test]
    fn distributive(a in scalar(), b in scalar(), c in scalar()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a - b) + b, a);
    }
}
