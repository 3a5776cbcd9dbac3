#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "dev")]
pub mod dev;
pub mod ecdh;
pub mod ecdsa;
pub mod sec1;

mod affine;
mod lookup_table;
mod mul;
mod point_arithmetic;
mod projective;
mod scalar;
mod secret_key;

pub use crate::{
    affine::AffinePoint,
    lookup_table::LookupTable,
    projective::ProjectivePoint,
    scalar::{bits2field, load_scalar_checked, reduce_field_to_scalar},
    secret_key::SecretKeyArithmetic,
};
pub use elliptic_curve::{self, Error, Result};
pub use group;
pub use primefield::{
    self, MontyFieldElement, MontyParams, Uint, ff, rand_core, subtle, zeroize,
};

#[cfg(feature = "basepoint-table")]
pub use crate::lookup_table::BasepointTable;
#[cfg(feature = "digest")]
pub use digest;

use core::fmt::Debug;

/// Element of the base field of the curve `C`.
pub type FieldElement<C, const LIMBS: usize> =
    MontyFieldElement<<C as PrimeCurveParams<LIMBS>>::FieldParams, LIMBS>;

/// Element of the scalar field of the curve `C`, i.e. an integer modulo the group order.
pub type Scalar<C, const LIMBS: usize> =
    MontyFieldElement<<C as PrimeCurveParams<LIMBS>>::ScalarParams, LIMBS>;

/// Parameters for elliptic curves of prime order which can be described by the
/// short Weierstrass equation `y² = x³ + a·x + b`.
///
/// The field and order moduli must both fit in `LIMBS` limbs and satisfy `q < p < 2q`, which
/// holds for the NIST curves.
pub trait PrimeCurveParams<const LIMBS: usize>:
    Copy + Clone + Debug + Default + Eq + PartialEq + Send + Sync + Sized + 'static
{
    /// Base field parameters (modulus `p`).
    type FieldParams: MontyParams<LIMBS>;

    /// Scalar field parameters (group order `q`).
    type ScalarParams: MontyParams<LIMBS>;

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: FieldElement<Self, LIMBS>;

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: FieldElement<Self, LIMBS>;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (FieldElement<Self, LIMBS>, FieldElement<Self, LIMBS>);

    /// Precomputed multiples of the generator used by [`ProjectivePoint::mul_by_generator`].
    ///
    /// Entry `i` must hold the table for `2^(8·i)·G`. When `None`, base point multiplication
    /// falls back to the generic fixed-window algorithm.
    fn basepoint_table() -> Option<&'static [LookupTable<Self, LIMBS>]> {
        None
    }
}

/// Size in bytes of a serialized field element or scalar of the curve `C`.
#[inline]
pub const fn field_bytes<C, const LIMBS: usize>() -> usize
where
    C: PrimeCurveParams<LIMBS>,
{
    <C::FieldParams as MontyParams<LIMBS>>::BYTES
}
