//! Field arithmetic modulo p = 2^{521} − 1
//!
//! Elements are kept in Montgomery form over nine 64-bit limbs like the other NIST curves,
//! rather than using a dedicated Mersenne reduction.

use crate::{LIMBS, NistP521};
use primefield::{MontyFieldElement, MontyParams};

/// Constant representing the modulus serialized as hex, zero-padded to nine limbs.
const MODULUS_HEX: &str = "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Montgomery arithmetic parameters of the secp521r1 base field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldParams;

impl MontyParams<LIMBS> for FieldParams {
    type Repr = elliptic_curve::FieldBytes<NistP521>;
    const MODULUS_HEX: &'static str = MODULUS_HEX;
    const MULTIPLICATIVE_GENERATOR: u64 = 3;
}

/// Element of the secp521r1 base field used for curve coordinates.
pub type FieldElement = MontyFieldElement<FieldParams, LIMBS>;
