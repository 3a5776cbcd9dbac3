//! Arithmetic on [`elliptic_curve::SecretKey`].

use crate::{
    AffinePoint, Error, PrimeCurveParams, ProjectivePoint, Result, Scalar, bits2field, ecdsa,
    load_scalar_checked,
};
use elliptic_curve::{Curve, FieldBytes, SecretKey};
use primefield::{
    ff::Field, rand_core::CryptoRngCore, uint_from_be_slice, zeroize::Zeroize,
};

/// Curve arithmetic for secret keys, which are scalars in `[1, q)` zeroized on drop.
///
/// Implemented for [`SecretKey<C>`] of every curve which provides [`PrimeCurveParams`]. The
/// curve's [`Curve::ORDER`] must equal the modulus of its scalar field.
pub trait SecretKeyArithmetic<C, const LIMBS: usize>: Sized
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Generate a random secret key by rejection sampling.
    fn generate(rng: &mut impl CryptoRngCore) -> Self;

    /// Get the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    fn to_scalar(&self) -> Scalar<C, LIMBS>;

    /// Get the public key `[d] G` which corresponds to this secret key.
    fn public_point(&self) -> AffinePoint<C, LIMBS>;

    /// Sign a message digest with the given nonce, writing `r‖s` into `signature`.
    ///
    /// Returns an error if the nonce is not in `[1, q)` or the signature is degenerate, in which
    /// case a new nonce must be drawn.
    fn sign_prehash(&self, signature: &mut [u8], prehash: &[u8], nonce: &[u8]) -> Result<()>;
}

impl<C, const LIMBS: usize> SecretKeyArithmetic<C, LIMBS> for SecretKey<C>
where
    C: PrimeCurveParams<LIMBS> + Curve,
{
    fn generate(rng: &mut impl CryptoRngCore) -> Self {
        loop {
            let mut scalar = Scalar::<C, LIMBS>::random(&mut *rng);
            let mut bytes = FieldBytes::<C>::default();
            scalar.write_be_bytes(&mut bytes);

            // rejects zero
            let secret_key = Self::from_bytes(&bytes);
            scalar.zeroize();
            bytes.as_mut_slice().zeroize();

            if let Ok(secret_key) = secret_key {
                return secret_key;
            }
        }
    }

    fn to_scalar(&self) -> Scalar<C, LIMBS> {
        let mut bytes = self.to_bytes();
        let scalar = Scalar::<C, LIMBS>::from_uint_reduced(&uint_from_be_slice(&bytes));
        bytes.as_mut_slice().zeroize();
        scalar
    }

    fn public_point(&self) -> AffinePoint<C, LIMBS> {
        let mut d = self.to_scalar();
        let point = ProjectivePoint::<C, LIMBS>::mul_by_generator(&d).to_affine();
        d.zeroize();
        point
    }

    fn sign_prehash(&self, signature: &mut [u8], prehash: &[u8], nonce: &[u8]) -> Result<()> {
        let n = Scalar::<C, LIMBS>::BYTES;
        let mut d = self.to_scalar();
        let (k, k_valid) = load_scalar_checked::<C, LIMBS>(nonce);
        let z = bits2field::<C, LIMBS>(prehash);
        let (r, s) = ecdsa::sign_scalars::<C, LIMBS>(&d, &k, &z);
        d.zeroize();

        let (r_out, s_out) = signature.split_at_mut(n);
        r.write_be_bytes(r_out);
        s.write_be_bytes(&mut s_out[..n]);

        let valid: bool = (k_valid & !r.is_zero() & !s.is_zero()).into();
        if valid { Ok(()) } else { Err(Error) }
    }
}
