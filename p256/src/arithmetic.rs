//! Pure Rust implementation of group operations on secp256r1.
//!
//! Curve parameters can be found in [NIST SP 800-186] § G.1.2: Curve P-256.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

pub(crate) mod field;
pub(crate) mod scalar;

use self::{field::FieldElement, field::FieldParams, scalar::ScalarParams};
use crate::{LIMBS, NistP256};
use primeorder::PrimeCurveParams;

#[cfg(feature = "precomputed-tables")]
use primeorder::{BasepointTable, LookupTable};

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<NistP256, LIMBS>;

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<NistP256, LIMBS>;

/// Lazily computed multiples of the generator: 32 tables covering the 64 windows of a scalar.
#[cfg(feature = "precomputed-tables")]
static BASEPOINT_TABLE: BasepointTable<NistP256, LIMBS, 32> = BasepointTable::new();

/// Adapted from [NIST SP 800-186] § G.1.2: Curve P-256.
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
impl PrimeCurveParams<LIMBS> for NistP256 {
    type FieldParams = FieldParams;
    type ScalarParams = ScalarParams;

    /// a = -3
    const EQUATION_A: FieldElement = FieldElement::neg(&FieldElement::from_u64(3));

    const EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    );

    /// Base point of P-256.
    ///
    /// ```text
    /// Gₓ = 6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296
    /// Gᵧ = 4fe342e2 fe1a7f9b 8ee7eb4a 7c0f9e16 2bce3357 6b315ece cbb64068 37bf51f5
    /// ```
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        ),
        FieldElement::from_hex_vartime(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
        ),
    );

    #[cfg(feature = "precomputed-tables")]
    fn basepoint_table() -> Option<&'static [LookupTable<Self, LIMBS>]> {
        Some(BASEPOINT_TABLE.as_slice())
    }
}
