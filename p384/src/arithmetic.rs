//! Pure Rust implementation of group operations on secp384r1.
//!
//! Curve parameters can be found in [NIST SP 800-186] § G.1.3: Curve P-384.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

pub(crate) mod field;
pub(crate) mod scalar;

use self::{field::FieldElement, field::FieldParams, scalar::ScalarParams};
use crate::{LIMBS, NistP384};
use primeorder::PrimeCurveParams;

#[cfg(feature = "precomputed-tables")]
use primeorder::{BasepointTable, LookupTable};

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<NistP384, LIMBS>;

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<NistP384, LIMBS>;

/// Lazily computed multiples of the generator: 48 tables covering the 96 windows of a scalar.
#[cfg(feature = "precomputed-tables")]
static BASEPOINT_TABLE: BasepointTable<NistP384, LIMBS, 48> = BasepointTable::new();

/// Adapted from [NIST SP 800-186] § G.1.3: Curve P-384.
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
impl PrimeCurveParams<LIMBS> for NistP384 {
    type FieldParams = FieldParams;
    type ScalarParams = ScalarParams;

    /// a = -3
    const EQUATION_A: FieldElement = FieldElement::neg(&FieldElement::from_u64(3));

    const EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    );

    /// Base point of P-384.
    ///
    /// ```text
    /// Gₓ = aa87ca22 be8b0537 8eb1c71e f320ad74 6e1d3b62 8ba79b98
    ///      59f741e0 82542a38 5502f25d bf55296c 3a545e38 72760ab7
    /// Gᵧ = 3617de4a 96262c6f 5d9e98bf 9292dc29 f8f41dbd 289a147c
    ///      e9da3113 b5f0b8c0 0a60b1ce 1d7e819d 7a431d7c 90ea0e5f
    /// ```
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        ),
        FieldElement::from_hex_vartime(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
        ),
    );

    #[cfg(feature = "precomputed-tables")]
    fn basepoint_table() -> Option<&'static [LookupTable<Self, LIMBS>]> {
        Some(BASEPOINT_TABLE.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, ProjectivePoint};
    use crate::{Scalar, test_vectors::group::MUL_TEST_VECTORS};

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(AffinePoint::GENERATOR.is_on_curve()));
        assert!(!bool::from(AffinePoint::GENERATOR.is_identity()));
    }

    #[test]
    fn mul_by_generator_matches_generic_mul() {
        for (k, _, _) in MUL_TEST_VECTORS {
            let k = Scalar::from_be_slice(k).unwrap();
            assert_eq!(
                ProjectivePoint::mul_by_generator(&k),
                ProjectivePoint::GENERATOR.mul_uint(&k.retrieve())
            );
        }
    }

    #[test]
    fn order_times_generator_is_identity() {
        let minus_one = -Scalar::ONE;
        let p = ProjectivePoint::GENERATOR * &minus_one + ProjectivePoint::GENERATOR;
        assert!(bool::from(p.is_identity()));
    }
}
