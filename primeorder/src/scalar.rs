//! Conversions into the scalar field.

use crate::{FieldElement, MontyParams, PrimeCurveParams, Scalar, field_bytes};
use primefield::{
    Uint,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess},
    uint_from_be_slice,
};

/// Load a big-endian scalar and check that it lies in `[1, q)`.
///
/// Always returns a usable scalar: when the check fails the value is replaced by `1`, and the
/// failure is only reported through the returned [`Choice`].
pub fn load_scalar_checked<C, const LIMBS: usize>(bytes: &[u8]) -> (Scalar<C, LIMBS>, Choice)
where
    C: PrimeCurveParams<LIMBS>,
{
    let uint = uint_from_be_slice::<LIMBS>(bytes);
    let valid = !uint.ct_eq(&Uint::ZERO)
        & uint.ct_lt(&<C::ScalarParams as MontyParams<LIMBS>>::MODULUS);
    let uint = Uint::conditional_select(&Uint::ONE, &uint, valid);

    (Scalar::<C, LIMBS>::from_uint_reduced(&uint), valid)
}

/// Reduce a base field element into the scalar field, e.g. the x-coordinate of a point.
pub fn reduce_field_to_scalar<C, const LIMBS: usize>(x: &FieldElement<C, LIMBS>) -> Scalar<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    Scalar::<C, LIMBS>::from_uint_reduced(&x.retrieve())
}

/// Convert a message digest into a scalar.
///
/// Follows `bits2int` from FIPS 186-5: a digest longer than the group order keeps only its
/// leftmost `bits(q)` bits, a shorter one is left-padded. The result is then reduced modulo `q`.
pub fn bits2field<C, const LIMBS: usize>(prehash: &[u8]) -> Scalar<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    let n = field_bytes::<C, LIMBS>();
    let order_bits = <C::ScalarParams as MontyParams<LIMBS>>::MODULUS_BITS as usize;

    let uint = if prehash.len() >= n {
        uint_from_be_slice::<LIMBS>(&prehash[..n]).shr_vartime(8 * n - order_bits)
    } else {
        uint_from_be_slice::<LIMBS>(prehash)
    };

    Scalar::<C, LIMBS>::from_uint_reduced(&uint)
}

#[cfg(test)]
mod tests {
    use super::{bits2field, load_scalar_checked, reduce_field_to_scalar};
    use crate::{
        FieldElement, MontyParams, PrimeCurveParams, Scalar,
        primefield::{bigint::U64, subtle::ConstantTimeEq},
    };

    const L: usize = U64::LIMBS;

    /// Toy curve `y² = x³ + 7` over a 64-bit prime, with a 64-bit scalar modulus standing in for
    /// the group order. Only used to exercise the byte conversions.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct Toy;

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct ToyField;

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct ToyOrder;

    impl MontyParams<L> for ToyField {
        type Repr = [u8; 8];
        const MODULUS_HEX: &'static str = "ffffffffffffffc5";
        const MULTIPLICATIVE_GENERATOR: u64 = 2;
    }

    impl MontyParams<L> for ToyOrder {
        type Repr = [u8; 8];
        const MODULUS_HEX: &'static str = "ffffffffffffff43";
        const MULTIPLICATIVE_GENERATOR: u64 = 2;
    }

    impl PrimeCurveParams<L> for Toy {
        type FieldParams = ToyField;
        type ScalarParams = ToyOrder;
        const EQUATION_A: FieldElement<Self, L> = FieldElement::<Self, L>::ZERO;
        const EQUATION_B: FieldElement<Self, L> = FieldElement::<Self, L>::from_u64(7);
        const GENERATOR: (FieldElement<Self, L>, FieldElement<Self, L>) = (
            FieldElement::<Self, L>::ONE,
            FieldElement::<Self, L>::ONE,
        );
    }

    #[test]
    fn load_scalar_checked_range() {
        let (one, valid) = load_scalar_checked::<Toy, L>(&[0u8; 8]);
        assert!(!bool::from(valid));
        assert_eq!(one, Scalar::<Toy, L>::ONE);

        let order = 0xffff_ffff_ffff_ff43u64.to_be_bytes();
        assert!(!bool::from(load_scalar_checked::<Toy, L>(&order).1));

        let max = 0xffff_ffff_ffff_ff42u64.to_be_bytes();
        let (scalar, valid) = load_scalar_checked::<Toy, L>(&max);
        assert!(bool::from(valid));
        assert_eq!(scalar, -Scalar::<Toy, L>::ONE);
    }

    #[test]
    fn bits2field_pads_short_digests() {
        let scalar = bits2field::<Toy, L>(&[0x01, 0x02]);
        assert!(bool::from(scalar.ct_eq(&Scalar::<Toy, L>::from_u64(0x0102))));
    }

    #[test]
    fn bits2field_truncates_long_digests() {
        let digest = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa];
        let scalar = bits2field::<Toy, L>(&digest);
        assert_eq!(scalar, Scalar::<Toy, L>::from_u64(0x1122_3344_5566_7788));
    }

    #[test]
    fn bits2field_reduces_modulo_order() {
        let scalar = bits2field::<Toy, L>(&[0xff; 8]);
        assert_eq!(scalar, Scalar::<Toy, L>::from_u64(0xbc));
    }

    #[test]
    fn field_elements_above_order_are_reduced() {
        let x = FieldElement::<Toy, L>::from_u64(0xffff_ffff_ffff_ff50);
        assert_eq!(reduce_field_to_scalar::<Toy, L>(&x), Scalar::<Toy, L>::from_u64(13));
    }
}
