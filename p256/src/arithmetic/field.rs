//! Field arithmetic modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1

use crate::{LIMBS, NistP256};
use primefield::{MontyFieldElement, MontyParams};

/// Constant representing the modulus serialized as hex.
const MODULUS_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Montgomery arithmetic parameters of the secp256r1 base field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldParams;

impl MontyParams<LIMBS> for FieldParams {
    type Repr = elliptic_curve::FieldBytes<NistP256>;
    const MODULUS_HEX: &'static str = MODULUS_HEX;
    const MULTIPLICATIVE_GENERATOR: u64 = 6;
}

/// Element of the secp256r1 base field used for curve coordinates.
pub type FieldElement = MontyFieldElement<FieldParams, LIMBS>;

#[cfg(test)]
mod tests {
    use super::{FieldElement, FieldParams};
    use hex_literal::hex;
    use primefield::{MontyParams, Uint};

    primefield::test_field!(FieldElement);

    #[test]
    fn montgomery_constants() {
        assert_eq!(
            FieldParams::R,
            Uint::from_be_hex("00000000fffffffeffffffffffffffffffffffff000000000000000000000001")
        );
        assert_eq!(
            FieldParams::R2,
            Uint::from_be_hex("00000004fffffffdfffffffffffffffefffffffbffffffff0000000000000003")
        );
        assert_eq!(FieldParams::MOD_NEG_INV, 1);
        assert_eq!(FieldParams::S, 1);
    }

    #[test]
    fn from_bytes_rejects_modulus() {
        let modulus = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
        assert!(bool::from(FieldElement::from_be_slice(&modulus).is_none()));
    }
}
