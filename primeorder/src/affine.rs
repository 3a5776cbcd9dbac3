//! Affine curve points.

#![allow(clippy::op_ref)]

use crate::{
    Error, FieldElement, PrimeCurveParams, ProjectivePoint, Result, field_bytes, point_arithmetic,
};
use core::ops::Neg;
use primefield::{
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

/// SEC1 tag for an uncompressed point.
pub(crate) const TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 tag for a compressed point with an even y-coordinate.
pub(crate) const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;

/// SEC1 tag for a compressed point with an odd y-coordinate.
pub(crate) const TAG_COMPRESSED_ODD_Y: u8 = 0x03;

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// x-coordinate
    pub(crate) x: FieldElement<C, LIMBS>,

    /// y-coordinate
    pub(crate) y: FieldElement<C, LIMBS>,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C, const LIMBS: usize> AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::<C, LIMBS>::ZERO,
        y: FieldElement::<C, LIMBS>::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Create a point from its coordinates, returning `None` if it is not on the curve.
    pub fn from_coordinates(x: FieldElement<C, LIMBS>, y: FieldElement<C, LIMBS>) -> CtOption<Self> {
        let point = Self { x, y, infinity: 0 };
        CtOption::new(point, point.is_on_curve())
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Get the x-coordinate.
    pub fn x(&self) -> FieldElement<C, LIMBS> {
        self.x
    }

    /// Get the y-coordinate.
    pub fn y(&self) -> FieldElement<C, LIMBS> {
        self.y
    }

    /// Does this point satisfy the curve equation? The identity is considered on the curve.
    pub fn is_on_curve(&self) -> Choice {
        point_arithmetic::curve_equation_residual::<C, LIMBS>(&self.x, &self.y).is_zero()
            | self.is_identity()
    }

    /// Decode a point from its raw `x‖y` encoding.
    ///
    /// Returns `None` if the input has the wrong length, either coordinate is not less than
    /// the field modulus, or the point is not on the curve.
    pub fn from_raw_bytes(bytes: &[u8]) -> CtOption<Self> {
        let n = field_bytes::<C, LIMBS>();
        if bytes.len() != 2 * n {
            return CtOption::new(Self::IDENTITY, Choice::from(0));
        }

        let (x_bytes, y_bytes) = bytes.split_at(n);
        let x = FieldElement::<C, LIMBS>::from_be_slice(x_bytes);
        let y = FieldElement::<C, LIMBS>::from_be_slice(y_bytes);

        x.and_then(|x| y.and_then(|y| Self::from_coordinates(x, y)))
    }

    /// Decode a compressed point from its x-coordinate and the parity of its y-coordinate.
    ///
    /// The y-coordinate is recovered as a square root of `x³ + a·x + b`. Returns `None` if `x`
    /// is not less than the field modulus or `x³ + a·x + b` is not a square.
    pub fn decompress(x_bytes: &[u8], y_is_odd: Choice) -> CtOption<Self> {
        FieldElement::<C, LIMBS>::from_be_slice(x_bytes).and_then(|x| {
            let alpha = point_arithmetic::curve_equation_rhs::<C, LIMBS>(&x);

            alpha.sqrt().map(|beta| {
                let y = FieldElement::<C, LIMBS>::conditional_select(
                    &-beta,
                    &beta,
                    beta.is_odd().ct_eq(&y_is_odd),
                );

                Self { x, y, infinity: 0 }
            })
        })
    }

    /// Decode a SEC1-encoded point: `0x04‖x‖y`, `0x02‖x` or `0x03‖x`.
    ///
    /// The identity encoding is not accepted.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let n = field_bytes::<C, LIMBS>();
        let (&tag, body) = bytes.split_first().ok_or(Error)?;

        let point = match tag {
            TAG_UNCOMPRESSED if body.len() == 2 * n => Self::from_raw_bytes(body),
            TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y if body.len() == n => {
                Self::decompress(body, Choice::from(tag & 1))
            }
            _ => return Err(Error),
        };

        Option::from(point).ok_or(Error)
    }

    /// Write the raw `x‖y` encoding of this point into `out`, which must be `2·N` bytes.
    ///
    /// The identity is written as all zeros.
    pub fn write_raw_bytes(&self, out: &mut [u8]) {
        let n = field_bytes::<C, LIMBS>();
        let (x_out, y_out) = out.split_at_mut(n);
        self.x.write_be_bytes(x_out);
        self.y.write_be_bytes(&mut y_out[..n]);
    }

    /// Write the uncompressed `0x04‖x‖y` encoding of this point into `out`, which must be
    /// `2·N + 1` bytes.
    pub fn write_uncompressed(&self, out: &mut [u8]) {
        out[0] = TAG_UNCOMPRESSED;
        self.write_raw_bytes(&mut out[1..]);
    }

    /// Write the compressed `(0x02|0x03)‖x` encoding of this point into `out`, which must be
    /// `N + 1` bytes.
    pub fn write_compressed(&self, out: &mut [u8]) {
        out[0] = TAG_COMPRESSED_EVEN_Y | self.y.is_odd().unwrap_u8();
        self.x.write_be_bytes(&mut out[1..]);
    }
}

impl<C, const LIMBS: usize> ConditionallySelectable for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::<C, LIMBS>::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::<C, LIMBS>::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C, const LIMBS: usize> ConstantTimeEq for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C, const LIMBS: usize> Default for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C, const LIMBS: usize> DefaultIsZeroes for AffinePoint<C, LIMBS> where
    C: PrimeCurveParams<LIMBS>
{
}

impl<C, const LIMBS: usize> Eq for AffinePoint<C, LIMBS> where C: PrimeCurveParams<LIMBS> {}

impl<C, const LIMBS: usize> PartialEq for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C, const LIMBS: usize> From<ProjectivePoint<C, LIMBS>> for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn from(p: ProjectivePoint<C, LIMBS>) -> AffinePoint<C, LIMBS> {
        p.to_affine()
    }
}

impl<C, const LIMBS: usize> From<&ProjectivePoint<C, LIMBS>> for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn from(p: &ProjectivePoint<C, LIMBS>) -> AffinePoint<C, LIMBS> {
        p.to_affine()
    }
}

impl<C, const LIMBS: usize> Neg for AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C, const LIMBS: usize> Neg for &AffinePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Output = AffinePoint<C, LIMBS>;

    fn neg(self) -> AffinePoint<C, LIMBS> {
        -(*self)
    }
}
