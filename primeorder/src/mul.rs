//! Fixed-window scalar multiplication.
//!
//! Scalars are consumed 4 bits at a time, most significant window first. Every window performs
//! the same doublings, one constant-time table lookup and one addition, whatever its value.

use crate::{
    LookupTable, MontyParams, PrimeCurveParams, ProjectivePoint, lookup_table::WINDOW_BITS,
};
use primefield::{Uint, uint_bits};

/// Number of 4-bit windows covering a scalar below the group order.
const fn num_windows<C, const LIMBS: usize>() -> u32
where
    C: PrimeCurveParams<LIMBS>,
{
    <C::ScalarParams as MontyParams<LIMBS>>::MODULUS_BITS.div_ceil(WINDOW_BITS)
}

/// Returns `[k] point`.
///
/// `k` must be less than `2^bits(q)`. `k = 0` yields the identity.
pub(crate) fn mul<C, const LIMBS: usize>(
    point: &ProjectivePoint<C, LIMBS>,
    k: &Uint<LIMBS>,
) -> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    let table = LookupTable::new(point);
    let mut acc = ProjectivePoint::IDENTITY;
    let mut window = num_windows::<C, LIMBS>();

    while window > 0 {
        window -= 1;

        for _ in 0..WINDOW_BITS {
            acc = acc.double();
        }

        let digit = uint_bits(k, window * WINDOW_BITS, WINDOW_BITS);
        acc = acc.add(&table.select(digit));
    }

    acc
}

/// Returns `[k] G`.
///
/// With a base point table, table `i` holds multiples of `2^(8·i)·G`: odd windows are summed
/// first and shifted into place with 4 doublings, then even windows are added.
pub(crate) fn mul_by_generator<C, const LIMBS: usize>(k: &Uint<LIMBS>) -> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    let Some(tables) = C::basepoint_table() else {
        return mul(&ProjectivePoint::GENERATOR, k);
    };

    let windows = num_windows::<C, LIMBS>();
    debug_assert!(tables.len() as u32 >= windows.div_ceil(2));

    let mut acc = ProjectivePoint::IDENTITY;

    for (i, table) in tables.iter().enumerate() {
        let digit = uint_bits(k, (2 * i as u32 + 1) * WINDOW_BITS, WINDOW_BITS);
        acc = acc.add(&table.select(digit));
    }

    for _ in 0..WINDOW_BITS {
        acc = acc.double();
    }

    for (i, table) in tables.iter().enumerate() {
        let digit = uint_bits(k, 2 * i as u32 * WINDOW_BITS, WINDOW_BITS);
        acc = acc.add(&table.select(digit));
    }

    acc
}

/// Returns `[k1] G + [k2] point`.
pub(crate) fn mul_double_generator<C, const LIMBS: usize>(
    k1: &Uint<LIMBS>,
    k2: &Uint<LIMBS>,
    point: &ProjectivePoint<C, LIMBS>,
) -> ProjectivePoint<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    mul_by_generator::<C, LIMBS>(k1).add(&mul(point, k2))
}
