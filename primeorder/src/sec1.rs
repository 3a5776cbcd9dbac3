//! Key validation and conversions between public key encodings.
//!
//! Three encodings of a public key are supported, with `N` the size of a field element:
//!
//! - raw: `x‖y`, `2·N` bytes
//! - uncompressed: `0x04‖x‖y`, `2·N + 1` bytes
//! - compressed: `0x02‖x` or `0x03‖x` depending on the parity of `y`, `N + 1` bytes

use crate::{
    AffinePoint, PrimeCurveParams,
    affine::{TAG_COMPRESSED_EVEN_Y, TAG_UNCOMPRESSED},
    field_bytes, load_scalar_checked,
};
use primefield::subtle::Choice;

/// Check that a raw `x‖y` public key has both coordinates below the field modulus and lies on
/// the curve.
pub fn validate_public_key<C, const LIMBS: usize>(public_key: &[u8]) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    AffinePoint::<C, LIMBS>::from_raw_bytes(public_key)
        .is_some()
        .into()
}

/// Check that a private key lies in `[1, q)`.
pub fn validate_private_key<C, const LIMBS: usize>(private_key: &[u8]) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    load_scalar_checked::<C, LIMBS>(private_key).1.into()
}

/// Strip the tag from an uncompressed public key.
///
/// Only the `0x04` tag is checked: the resulting raw key is not validated and should be passed
/// to [`validate_public_key`] before use. `raw` is left untouched when the tag is wrong.
pub fn uncompressed_to_raw<C, const LIMBS: usize>(uncompressed: &[u8], raw: &mut [u8]) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    let n = field_bytes::<C, LIMBS>();
    if uncompressed[0] != TAG_UNCOMPRESSED {
        return false;
    }

    raw[..2 * n].copy_from_slice(&uncompressed[1..2 * n + 1]);
    true
}

/// Decompress a compressed public key into its raw `x‖y` encoding.
///
/// Returns `false`, leaving `raw` untouched, if the tag is neither `0x02` nor `0x03`, if `x` is
/// not below the field modulus, or if no point with this x-coordinate exists.
pub fn compressed_to_raw<C, const LIMBS: usize>(compressed: &[u8], raw: &mut [u8]) -> bool
where
    C: PrimeCurveParams<LIMBS>,
{
    let n = field_bytes::<C, LIMBS>();
    let tag = compressed[0];
    if tag | 1 != TAG_COMPRESSED_EVEN_Y | 1 {
        return false;
    }

    let point = AffinePoint::<C, LIMBS>::decompress(&compressed[1..n + 1], Choice::from(tag & 1));
    match Option::<AffinePoint<C, LIMBS>>::from(point) {
        Some(point) => {
            point.write_raw_bytes(raw);
            true
        }
        None => false,
    }
}

/// Prepend the `0x04` tag to a raw public key.
pub fn raw_to_uncompressed<C, const LIMBS: usize>(raw: &[u8], uncompressed: &mut [u8])
where
    C: PrimeCurveParams<LIMBS>,
{
    let n = field_bytes::<C, LIMBS>();
    uncompressed[0] = TAG_UNCOMPRESSED;
    uncompressed[1..2 * n + 1].copy_from_slice(&raw[..2 * n]);
}

/// Compress a raw public key, keeping `x` and the parity of `y`.
pub fn raw_to_compressed<C, const LIMBS: usize>(raw: &[u8], compressed: &mut [u8])
where
    C: PrimeCurveParams<LIMBS>,
{
    let n = field_bytes::<C, LIMBS>();
    compressed[0] = TAG_COMPRESSED_EVEN_Y | (raw[2 * n - 1] & 1);
    compressed[1..n + 1].copy_from_slice(&raw[..n]);
}
