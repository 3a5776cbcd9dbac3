//! Jacobian point arithmetic for short Weierstrass curves with a generic 𝒂-coefficient.
//!
//! A point `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`; `Z = 0` is the identity.
//! Both formulas run the same sequence of field operations for every input, and the special
//! cases of addition are resolved with constant-time selection.

use crate::{FieldElement, PrimeCurveParams, ProjectivePoint};
use primefield::subtle::{Choice, ConditionallySelectable};

/// Returns `point + point`.
///
/// Implements the `dbl-2007-bl` doubling formula for Jacobian coordinates with arbitrary `a`:
/// <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html#doubling-dbl-2007-bl>
///
/// The identity maps to itself, since `Z3 = 2·Y1·Z1`.
pub(crate) fn double<C, const LIMBS: usize>(
    point: &ProjectivePoint<C, LIMBS>,
) -> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    let xx = point.x.square();
    let yy = point.y.square();
    let yyyy = yy.square();
    let zz = point.z.square();

    let s = ((point.x + yy).square() - xx - yyyy).double();
    let m = xx.double() + xx + C::EQUATION_A * zz.square();

    let x3 = m.square() - s.double();
    let y3 = m * (s - x3) - yyyy.double().double().double();
    let z3 = (point.y + point.z).square() - yy - zz;

    ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Returns `lhs + rhs`.
///
/// Implements the `add-2007-bl` addition formula for Jacobian coordinates:
/// <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html#addition-add-2007-bl>
///
/// The formula is incomplete: it fails when either input is the identity or when both inputs
/// are equal. The doubling of `lhs` is always computed alongside, and the correct result is
/// picked in constant time. Inverse inputs need no fixup since they yield `H = 0`, hence
/// `Z3 = 0`.
pub(crate) fn add<C, const LIMBS: usize>(
    lhs: &ProjectivePoint<C, LIMBS>,
    rhs: &ProjectivePoint<C, LIMBS>,
) -> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    let z1z1 = lhs.z.square();
    let z2z2 = rhs.z.square();
    let u1 = lhs.x * z2z2;
    let u2 = rhs.x * z1z1;
    let s1 = lhs.y * rhs.z * z2z2;
    let s2 = rhs.y * lhs.z * z1z1;

    let h = u2 - u1;
    let i = h.double().square();
    let j = h * i;
    let r = (s2 - s1).double();
    let v = u1 * i;

    let x3 = r.square() - j - v.double();
    let y3 = r * (v - x3) - (s1 * j).double();
    let z3 = ((lhs.z + rhs.z).square() - z1z1 - z2z2) * h;

    let mut sum = ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    };

    // lhs == rhs, both finite
    let same_point = h.is_zero() & r.is_zero();
    sum.conditional_assign(&double(lhs), same_point);

    // lhs is the identity
    sum.conditional_assign(rhs, lhs.z.is_zero());

    // rhs is the identity
    sum.conditional_assign(lhs, rhs.z.is_zero());

    sum
}

/// Returns `y² - (x³ + a·x + b)`, which is zero iff `(x, y)` is on the curve.
pub(crate) fn curve_equation_residual<C, const LIMBS: usize>(
    x: &FieldElement<C, LIMBS>,
    y: &FieldElement<C, LIMBS>,
) -> FieldElement<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    y.square() - curve_equation_rhs::<C, LIMBS>(x)
}

/// Returns `x³ + a·x + b`.
pub(crate) fn curve_equation_rhs<C, const LIMBS: usize>(
    x: &FieldElement<C, LIMBS>,
) -> FieldElement<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    (x.square() + C::EQUATION_A) * x + C::EQUATION_B
}

/// Returns `true` if the point's `Z` coordinate is zero.
#[inline]
pub(crate) fn is_identity<C, const LIMBS: usize>(point: &ProjectivePoint<C, LIMBS>) -> Choice
where
    C: PrimeCurveParams<LIMBS>,
{
    point.z.is_zero()
}
