//! Elliptic Curve Diffie-Hellman (ECDH) key agreement, generic over the curve.
//!
//! Both operations always write their output buffer and report validity through the returned
//! `bool`, so that their cost does not depend on which input, if any, was invalid.

use crate::{AffinePoint, PrimeCurveParams, ProjectivePoint, load_scalar_checked};
use primefield::subtle::ConditionallySelectable;

/// Compute the public key `[d] G` for the private key `d`.
///
/// Writes the raw `x‖y` encoding into `public_key`, which must be `2·N` bytes long, and returns
/// `false` if `private_key` is not in `[1, q)`.
pub fn secret_to_public<C, const LIMBS: usize>(public_key: &mut [u8], private_key: &[u8]) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    let (d, d_valid) = load_scalar_checked::<C, LIMBS>(private_key);
    ProjectivePoint::<C, LIMBS>::mul_by_generator(&d)
        .to_affine()
        .write_raw_bytes(public_key);

    d_valid.into()
}

/// Compute the shared secret `[d] Q` for the private key `d` and the peer's public key `Q`,
/// given in raw `x‖y` encoding.
///
/// Writes the raw `x‖y` encoding of the shared point into `shared_secret`, which must be `2·N`
/// bytes long. Returns `false` if the public key is invalid or the private key is not in
/// `[1, q)`; the output then holds deterministic data derived from substitute inputs, which
/// must be discarded.
pub fn diffie_hellman<C, const LIMBS: usize>(
    shared_secret: &mut [u8],
    public_key: &[u8],
    private_key: &[u8],
) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    let public_key = AffinePoint::<C, LIMBS>::from_raw_bytes(public_key);
    let pk_valid = public_key.is_some();
    let point = AffinePoint::conditional_select(
        &AffinePoint::GENERATOR,
        &public_key.unwrap_or(AffinePoint::GENERATOR),
        pk_valid,
    );

    let (d, d_valid) = load_scalar_checked::<C, LIMBS>(private_key);
    let shared = ProjectivePoint::from(point) * &d;
    shared.to_affine().write_raw_bytes(shared_secret);

    (pk_valid & d_valid).into()
}
