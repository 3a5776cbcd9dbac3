//! Scalar field arithmetic modulo n = 115792089210356248762697446949407573529996955224135760342422259061068512044369

use crate::{LIMBS, NistP256, ORDER_HEX};
use elliptic_curve::bigint::U256;
use primefield::{MontyFieldElement, MontyParams};

/// Montgomery arithmetic parameters of the secp256r1 scalar field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScalarParams;

impl MontyParams<LIMBS> for ScalarParams {
    type Repr = elliptic_curve::FieldBytes<NistP256>;
    const MODULUS_HEX: &'static str = ORDER_HEX;
    const MULTIPLICATIVE_GENERATOR: u64 = 7;

    /// `7^((n - 1) / 16) mod n`
    const ROOT_OF_UNITY: Option<U256> = Some(U256::from_be_hex(
        "ffc97f062a770992ba807ace842a3dfc1546cad004378daf0592d7fbb41e6602",
    ));
}

/// Scalars are elements in the finite field modulo n.
pub type Scalar = MontyFieldElement<ScalarParams, LIMBS>;
