//! Field arithmetic modulo p = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1

use crate::{LIMBS, NistP384};
use primefield::{MontyFieldElement, MontyParams};

/// Constant representing the modulus serialized as hex.
/// p = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1
const MODULUS_HEX: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff";

/// Montgomery arithmetic parameters of the secp384r1 base field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldParams;

impl MontyParams<LIMBS> for FieldParams {
    type Repr = elliptic_curve::FieldBytes<NistP384>;
    const MODULUS_HEX: &'static str = MODULUS_HEX;
    const MULTIPLICATIVE_GENERATOR: u64 = 19;
}

/// Element of the secp384r1 base field used for curve coordinates.
pub type FieldElement = MontyFieldElement<FieldParams, LIMBS>;
