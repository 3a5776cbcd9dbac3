//! Pure Rust implementation of group operations on secp521r1.
//!
//! Curve parameters can be found in [NIST SP 800-186] § G.1.4: Curve P-521.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

pub(crate) mod field;
pub(crate) mod scalar;

use self::{field::FieldElement, field::FieldParams, scalar::ScalarParams};
use crate::{LIMBS, NistP521};
use primeorder::PrimeCurveParams;

#[cfg(feature = "precomputed-tables")]
use primeorder::{BasepointTable, LookupTable};

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<NistP521, LIMBS>;

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<NistP521, LIMBS>;

/// Lazily computed multiples of the generator: 66 tables covering the 132 windows of a scalar.
#[cfg(feature = "precomputed-tables")]
static BASEPOINT_TABLE: BasepointTable<NistP521, LIMBS, 66> = BasepointTable::new();

/// Adapted from [NIST SP 800-186] § G.1.4: Curve P-521.
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
impl PrimeCurveParams<LIMBS> for NistP521 {
    type FieldParams = FieldParams;
    type ScalarParams = ScalarParams;

    /// a = -3
    const EQUATION_A: FieldElement = FieldElement::neg(&FieldElement::from_u64(3));

    const EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
        "0000000000000051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    );

    /// Base point of P-521.
    ///
    /// ```text
    /// Gₓ = 00c6 858e06b7 0404e9cd 9e3ecb66 2395b442 9c648139 053fb521 f828af60
    ///      6b4d3dba a14b5e77 efe75928 fe1dc127 a2ffa8de 3348b3c1 856a429b
    ///      f97e7e31 c2e5bd66
    /// Gᵧ = 0118 39296a78 9a3bc004 5c8a5fb4 2c7d1bd9 98f54449 579b4468 17afbd17
    ///      273e662c 97ee7299 5ef42640 c550b901 3fad0761 353c7086 a272c240
    ///      88be9476 9fd16650
    /// ```
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "00000000000000c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        ),
        FieldElement::from_hex_vartime(
            "000000000000011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
        ),
    );

    #[cfg(feature = "precomputed-tables")]
    fn basepoint_table() -> Option<&'static [LookupTable<Self, LIMBS>]> {
        Some(BASEPOINT_TABLE.as_slice())
    }
}
