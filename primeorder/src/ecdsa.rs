//! Elliptic Curve Digital Signature Algorithm (ECDSA), generic over the curve.
//!
//! Signatures are the concatenation `r‖s` of two big-endian scalars, each `N` bytes wide where
//! `N` is the size of a serialized field element.
//!
//! Signing takes the nonce `k` from the caller, who is responsible for generating it either
//! uniformly at random or deterministically as in RFC 6979.
//!
//! ## Timing
//!
//! Signing never branches on secret data: the private key and nonce are range-checked in
//! constant time, invalid values are replaced by `1`, and the whole computation runs to
//! completion before the combined validity flag is returned. Verification only handles public
//! data and returns early as soon as an input fails validation.

use crate::{
    AffinePoint, PrimeCurveParams, ProjectivePoint, Scalar, bits2field, field_bytes,
    load_scalar_checked, reduce_field_to_scalar,
};
use primefield::subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "digest")]
use digest::Digest;

/// Sign a message digest which has already been computed by the caller.
///
/// The digest may have any length: it is truncated or left-padded to the size of the group
/// order as described in [`bits2field`].
///
/// Writes `r‖s` into `signature`, which must be `2·N` bytes long, and returns `true` if the
/// signature is valid. Returns `false` if the private key or the nonce is not in `[1, q)`, or
/// if `r` or `s` is zero, in which case `signature` still holds deterministic output which must
/// be discarded.
pub fn sign_prehash<C, const LIMBS: usize>(
    signature: &mut [u8],
    prehash: &[u8],
    private_key: &[u8],
    nonce: &[u8],
) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    let n = field_bytes::<C, LIMBS>();
    let (d, d_valid) = load_scalar_checked::<C, LIMBS>(private_key);
    let (k, k_valid) = load_scalar_checked::<C, LIMBS>(nonce);
    let z = bits2field::<C, LIMBS>(prehash);

    let (r, s) = sign_scalars::<C, LIMBS>(&d, &k, &z);

    let (r_out, s_out) = signature.split_at_mut(n);
    r.write_be_bytes(r_out);
    s.write_be_bytes(&mut s_out[..n]);

    (d_valid & k_valid & !r.is_zero() & !s.is_zero()).into()
}

/// Core of ECDSA signing: `r = x([k] G) mod q`, `s = k⁻¹ (z + r d) mod q`.
pub(crate) fn sign_scalars<C, const LIMBS: usize>(
    d: &Scalar<C, LIMBS>,
    k: &Scalar<C, LIMBS>,
    z: &Scalar<C, LIMBS>,
) -> (Scalar<C, LIMBS>, Scalar<C, LIMBS>)
where
    C: PrimeCurveParams<LIMBS>,
{
    let big_r = ProjectivePoint::<C, LIMBS>::mul_by_generator(k).to_affine();
    let r = reduce_field_to_scalar::<C, LIMBS>(&big_r.x);

    let k_inv = k.invert().unwrap_or(Scalar::<C, LIMBS>::ZERO);
    let s = k_inv * (*z + r * d);

    (r, s)
}

/// Verify a signature `(r, s)` over a message digest which has already been computed by the
/// caller.
///
/// `public_key` is the raw `x‖y` encoding of the signer's public key. Returns `false` if the
/// public key is invalid, if `r` or `s` is not in `[1, q)`, or if the signature does not match.
pub fn verify_prehash<C, const LIMBS: usize>(
    prehash: &[u8],
    public_key: &[u8],
    r: &[u8],
    s: &[u8],
) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    let Some(public_key) = Option::from(AffinePoint::<C, LIMBS>::from_raw_bytes(public_key))
    else {
        return false;
    };

    let (r, r_valid) = load_scalar_checked::<C, LIMBS>(r);
    let (s, s_valid) = load_scalar_checked::<C, LIMBS>(s);
    if !bool::from(r_valid & s_valid) {
        return false;
    }

    let z = bits2field::<C, LIMBS>(prehash);
    verify_scalars::<C, LIMBS>(&public_key, &z, &r, &s).into()
}

/// Core of ECDSA verification: checks `x([z s⁻¹] G + [r s⁻¹] Q) mod q == r`.
fn verify_scalars<C, const LIMBS: usize>(
    public_key: &AffinePoint<C, LIMBS>,
    z: &Scalar<C, LIMBS>,
    r: &Scalar<C, LIMBS>,
    s: &Scalar<C, LIMBS>,
) -> Choice
where
    C: PrimeCurveParams<LIMBS>,
{
    let s_inv = s.invert().unwrap_or(Scalar::<C, LIMBS>::ZERO);
    let u1 = *z * s_inv;
    let u2 = *r * s_inv;

    let big_r = ProjectivePoint::from(public_key).mul_by_generator_and_mul_add(&u1, &u2);
    if bool::from(big_r.is_identity()) {
        return Choice::from(0);
    }

    reduce_field_to_scalar::<C, LIMBS>(&big_r.to_affine().x).ct_eq(r)
}

/// Hash `msg` with the digest `D`, then sign it as in [`sign_prehash`].
#[cfg(feature = "digest")]
pub fn sign_digest<C, D, const LIMBS: usize>(
    signature: &mut [u8],
    msg: &[u8],
    private_key: &[u8],
    nonce: &[u8],
) -> bool
where
    C: PrimeCurveParams<LIMBS>,
    D: Digest,
{
    sign_prehash::<C, LIMBS>(signature, &D::digest(msg), private_key, nonce)
}

/// Hash `msg` with the digest `D`, then verify it as in [`verify_prehash`].
#[cfg(feature = "digest")]
pub fn verify_digest<C, D, const LIMBS: usize>(
    msg: &[u8],
    public_key: &[u8],
    r: &[u8],
    s: &[u8],
) -> bool
where
    C: PrimeCurveParams<LIMBS>,
    D: Digest,
{
    verify_prehash::<C, LIMBS>(&D::digest(msg), public_key, r, s)
}
