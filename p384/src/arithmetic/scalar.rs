//! Scalar field arithmetic modulo n = 39402006196394479212279040100143613805079739270465446667946905279627659399113263569398956308152294913554433653942643

use crate::{LIMBS, NistP384, ORDER_HEX};
use primefield::{MontyFieldElement, MontyParams};

/// Montgomery arithmetic parameters of the secp384r1 scalar field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScalarParams;

impl MontyParams<LIMBS> for ScalarParams {
    type Repr = elliptic_curve::FieldBytes<NistP384>;
    const MODULUS_HEX: &'static str = ORDER_HEX;
    const MULTIPLICATIVE_GENERATOR: u64 = 2;
}

/// Scalars are elements in the finite field modulo n.
pub type Scalar = MontyFieldElement<ScalarParams, LIMBS>;

#[cfg(test)]
mod tests {
    use super::{Scalar, ScalarParams};
    use primefield::MontyParams;

    primefield::test_field!(Scalar);

    #[test]
    fn order_bits() {
        assert_eq!(ScalarParams::MODULUS_BITS, 384);
        assert_eq!(ScalarParams::S, 1);
        assert_eq!(Scalar::BYTES, 48);
    }
}
