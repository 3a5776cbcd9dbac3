//! Scalar field arithmetic modulo n = 6864797660130609714981900799081393217269435300143305409394463459185543183397655394245057746333217197532963996371363321113864768612440380340372808892707005449

use crate::{LIMBS, NistP521, ORDER_HEX};
use elliptic_curve::bigint::U576;
use primefield::{MontyFieldElement, MontyParams};

/// Montgomery arithmetic parameters of the secp521r1 scalar field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScalarParams;

impl MontyParams<LIMBS> for ScalarParams {
    type Repr = elliptic_curve::FieldBytes<NistP521>;
    const MODULUS_HEX: &'static str = ORDER_HEX;
    const MULTIPLICATIVE_GENERATOR: u64 = 3;

    /// `3^((n - 1) / 8) mod n`
    const ROOT_OF_UNITY: Option<U576> = Some(U576::from_be_hex(
        "000000000000009a0a650d44b28c17f3d708ad2fa8c4fbc7e6000d7c12dafa92fcc5673a3055276d535f79ff391dcdbcd998b7836647d3a72472b3da861ac810a7f9c7b7b63e2205",
    ));
}

/// Scalars are elements in the finite field modulo n.
pub type Scalar = MontyFieldElement<ScalarParams, LIMBS>;
