//! Projective curve points.

#![allow(clippy::op_ref)]

use crate::{AffinePoint, FieldElement, PrimeCurveParams, Scalar, mul, point_arithmetic};
use core::{
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use group::{Curve, Group};
use primefield::{
    Uint,
    ff::Field,
    rand_core::RngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::DefaultIsZeroes,
};

/// Point on a Weierstrass curve in Jacobian projective coordinates.
///
/// `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    pub(crate) x: FieldElement<C, LIMBS>,
    pub(crate) y: FieldElement<C, LIMBS>,
    pub(crate) z: FieldElement<C, LIMBS>,
}

impl<C, const LIMBS: usize> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::<C, LIMBS>::ONE,
        y: FieldElement::<C, LIMBS>::ONE,
        z: FieldElement::<C, LIMBS>::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: FieldElement::<C, LIMBS>::ONE,
    };

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        point_arithmetic::is_identity(self)
    }

    /// Returns the affine representation of this point, or the affine identity if this point is
    /// the identity.
    pub fn to_affine(&self) -> AffinePoint<C, LIMBS> {
        let z_inv = self.z.invert().unwrap_or(FieldElement::<C, LIMBS>::ZERO);
        let z_inv2 = z_inv.square();

        let point = AffinePoint {
            x: self.x * z_inv2,
            y: self.y * z_inv2 * z_inv,
            infinity: 0,
        };

        AffinePoint::conditional_select(&point, &AffinePoint::IDENTITY, self.is_identity())
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        point_arithmetic::add(self, other)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        point_arithmetic::double(self)
    }

    /// Returns `[k] self` for a canonical scalar value `k < 2^bits(q)`.
    pub fn mul_uint(&self, k: &Uint<LIMBS>) -> Self {
        mul::mul(self, k)
    }

    /// Returns `[k] G` where `G` is the generator, using the precomputed base point table if the
    /// curve provides one.
    pub fn mul_by_generator(k: &Scalar<C, LIMBS>) -> Self {
        mul::mul_by_generator(&k.retrieve())
    }

    /// Returns `[k1] G + [k2] self`.
    ///
    /// Only intended for public scalars such as the ones used in signature verification.
    pub fn mul_by_generator_and_mul_add(
        &self,
        k1: &Scalar<C, LIMBS>,
        k2: &Scalar<C, LIMBS>,
    ) -> Self {
        mul::mul_double_generator(&k1.retrieve(), &k2.retrieve(), self)
    }
}

impl<C, const LIMBS: usize> ConditionallySelectable for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::<C, LIMBS>::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::<C, LIMBS>::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::<C, LIMBS>::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C, const LIMBS: usize> ConstantTimeEq for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Compares `X1·Z2² == X2·Z1²` and `Y1·Z2³ == Y2·Z1³`, treating any two identities as
    /// equal.
    fn ct_eq(&self, other: &Self) -> Choice {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let x_eq = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let y_eq = (self.y * z2z2 * other.z).ct_eq(&(other.y * z1z1 * self.z));

        let self_is_identity = self.is_identity();
        let other_is_identity = other.is_identity();

        (self_is_identity & other_is_identity)
            | (!self_is_identity & !other_is_identity & x_eq & y_eq)
    }
}

impl<C, const LIMBS: usize> Default for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C, const LIMBS: usize> DefaultIsZeroes for ProjectivePoint<C, LIMBS> where
    C: PrimeCurveParams<LIMBS>
{
}

impl<C, const LIMBS: usize> Eq for ProjectivePoint<C, LIMBS> where C: PrimeCurveParams<LIMBS> {}

impl<C, const LIMBS: usize> PartialEq for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C, const LIMBS: usize> From<AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn from(p: AffinePoint<C, LIMBS>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::<C, LIMBS>::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C, const LIMBS: usize> From<&AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn from(p: &AffinePoint<C, LIMBS>) -> Self {
        Self::from(*p)
    }
}

//
// `group` trait impls
//

impl<C, const LIMBS: usize> Group for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Scalar = Scalar<C, LIMBS>;

    fn random(mut rng: impl RngCore) -> Self {
        Self::mul_by_generator(&Scalar::<C, LIMBS>::random(&mut rng))
    }

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self::GENERATOR
    }

    fn is_identity(&self) -> Choice {
        Self::is_identity(self)
    }

    fn double(&self) -> Self {
        Self::double(self)
    }
}

impl<C, const LIMBS: usize> Curve for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type AffineRepr = AffinePoint<C, LIMBS>;

    fn to_affine(&self) -> AffinePoint<C, LIMBS> {
        Self::to_affine(self)
    }
}

//
// Arithmetic trait impls
//

impl<C, const LIMBS: usize> Add<ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn add(self, other: ProjectivePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C, const LIMBS: usize> Add<&ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn add(self, other: &ProjectivePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::add(&self, other)
    }
}

impl<C, const LIMBS: usize> Add<&ProjectivePoint<C, LIMBS>> for &ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn add(self, other: &ProjectivePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::add(self, other)
    }
}

impl<C, const LIMBS: usize> AddAssign<ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn add_assign(&mut self, rhs: ProjectivePoint<C, LIMBS>) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C, const LIMBS: usize> AddAssign<&ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn add_assign(&mut self, rhs: &ProjectivePoint<C, LIMBS>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C, const LIMBS: usize> Add<AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn add(self, other: AffinePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::add(&self, &ProjectivePoint::from(other))
    }
}

impl<C, const LIMBS: usize> Add<&AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn add(self, other: &AffinePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::add(&self, &ProjectivePoint::from(other))
    }
}

impl<C, const LIMBS: usize> AddAssign<AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn add_assign(&mut self, rhs: AffinePoint<C, LIMBS>) {
        *self = ProjectivePoint::add(self, &ProjectivePoint::from(rhs));
    }
}

impl<C, const LIMBS: usize> AddAssign<&AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn add_assign(&mut self, rhs: &AffinePoint<C, LIMBS>) {
        *self = ProjectivePoint::add(self, &ProjectivePoint::from(rhs));
    }
}

impl<C, const LIMBS: usize> Sum for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a, C, const LIMBS: usize> Sum<&'a ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C, LIMBS>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<C, const LIMBS: usize> Sub<ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn sub(self, other: ProjectivePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C, const LIMBS: usize> Sub<&ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn sub(self, other: &ProjectivePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<C, const LIMBS: usize> SubAssign<ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn sub_assign(&mut self, rhs: ProjectivePoint<C, LIMBS>) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C, const LIMBS: usize> SubAssign<&ProjectivePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C, LIMBS>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<C, const LIMBS: usize> Sub<AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn sub(self, other: AffinePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::sub(&self, &ProjectivePoint::from(other))
    }
}

impl<C, const LIMBS: usize> Sub<&AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn sub(self, other: &AffinePoint<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::sub(&self, &ProjectivePoint::from(other))
    }
}

impl<C, const LIMBS: usize> SubAssign<AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn sub_assign(&mut self, rhs: AffinePoint<C, LIMBS>) {
        *self = ProjectivePoint::sub(self, &ProjectivePoint::from(rhs));
    }
}

impl<C, const LIMBS: usize> SubAssign<&AffinePoint<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn sub_assign(&mut self, rhs: &AffinePoint<C, LIMBS>) {
        *self = ProjectivePoint::sub(self, &ProjectivePoint::from(rhs));
    }
}

impl<C, const LIMBS: usize> Mul<&Scalar<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn mul(self, scalar: &Scalar<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        mul::mul(&self, &scalar.retrieve())
    }
}

impl<C, const LIMBS: usize> Mul<Scalar<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn mul(self, scalar: Scalar<C, LIMBS>) -> ProjectivePoint<C, LIMBS> {
        mul::mul(&self, &scalar.retrieve())
    }
}

impl<C, const LIMBS: usize> MulAssign<Scalar<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn mul_assign(&mut self, scalar: Scalar<C, LIMBS>) {
        *self = mul::mul(self, &scalar.retrieve());
    }
}

impl<C, const LIMBS: usize> MulAssign<&Scalar<C, LIMBS>> for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn mul_assign(&mut self, scalar: &Scalar<C, LIMBS>) {
        *self = mul::mul(self, &scalar.retrieve());
    }
}

impl<C, const LIMBS: usize> Neg for ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn neg(self) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::neg(&self)
    }
}

impl<C, const LIMBS: usize> Neg for &ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = ProjectivePoint<C, LIMBS>;

    fn neg(self) -> ProjectivePoint<C, LIMBS> {
        ProjectivePoint::neg(self)
    }
}
