use crate::{PrimeCurveParams, ProjectivePoint};
use primefield::{
    Word,
    subtle::{ConditionallySelectable, ConstantTimeEq},
};

#[cfg(all(
    feature = "basepoint-table",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`basepoint-table` feature requires either `critical-section` or `std`");

#[cfg(feature = "basepoint-table")]
use core::ops::Deref;

#[cfg(all(feature = "basepoint-table", feature = "critical-section"))]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(
    feature = "basepoint-table",
    all(feature = "std", not(feature = "critical-section"))
))]
use std::sync::LazyLock;

/// Width in bits of the scalar windows consumed by fixed-window multiplication.
pub(crate) const WINDOW_BITS: u32 = 4;

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 1 << WINDOW_BITS;

/// Lookup table containing precomputed values `[0, p, 2p, 3p, ..., 15p]`
#[derive(Clone, Copy, Debug)]
pub struct LookupTable<C, const LIMBS: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    points: [ProjectivePoint<C, LIMBS>; LUT_SIZE],
}

impl<C, const LIMBS: usize> LookupTable<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Compute a new lookup table from the given point.
    pub fn new(p: &ProjectivePoint<C, LIMBS>) -> Self {
        let mut points = [ProjectivePoint::IDENTITY; LUT_SIZE];
        points[1] = *p;

        for j in 2..LUT_SIZE {
            points[j] = if j % 2 == 0 {
                points[j / 2].double()
            } else {
                points[j - 1].add(p)
            };
        }

        Self { points }
    }

    /// Given `0 <= x < 16`, returns `x * p` in constant time.
    ///
    /// Every entry is read and masked, so the memory access pattern is independent of `x`.
    pub fn select(&self, x: Word) -> ProjectivePoint<C, LIMBS> {
        debug_assert!(x < LUT_SIZE as Word);

        let mut t = self.points[0];
        for j in 1..LUT_SIZE {
            let c = x.ct_eq(&(j as Word));
            t.conditional_assign(&self.points[j], c);
        }

        t
    }
}

impl<C, const LIMBS: usize> Default for LookupTable<C, LIMBS>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn default() -> Self {
        Self {
            points: [ProjectivePoint::IDENTITY; LUT_SIZE],
        }
    }
}

/// Precomputed lookup tables of multiples of the base point, a.k.a. generator.
///
/// Table `i` holds the multiples of `2^(8·i)·G`, so `N` must be at least half the number of
/// 4-bit windows in the group order.
#[cfg(feature = "basepoint-table")]
pub struct BasepointTable<C, const LIMBS: usize, const N: usize>
where
    C: PrimeCurveParams<LIMBS>,
{
    tables: LazyLock<[LookupTable<C, LIMBS>; N]>,
}

#[cfg(feature = "basepoint-table")]
impl<C, const LIMBS: usize, const N: usize> BasepointTable<C, LIMBS, N>
where
    C: PrimeCurveParams<LIMBS>,
{
    /// Create a new [`BasepointTable`] which is lazily initialized on first use and can be bound
    /// to a constant.
    ///
    /// Computed using [`ProjectivePoint::GENERATOR`] as the base point.
    pub const fn new() -> Self {
        /// Inner function to initialize the table.
        fn init_table<C, const LIMBS: usize, const N: usize>() -> [LookupTable<C, LIMBS>; N]
        where
            C: PrimeCurveParams<LIMBS>,
        {
            let mut generator = ProjectivePoint::<C, LIMBS>::GENERATOR;
            let mut res = [LookupTable::<C, LIMBS>::default(); N];

            for table in res.iter_mut() {
                *table = LookupTable::new(&generator);
                // We are storing tables spaced by two radix steps,
                // to decrease the size of the precomputed data.
                for _ in 0..(2 * WINDOW_BITS) {
                    generator = generator.double();
                }
            }

            res
        }

        Self {
            tables: LazyLock::new(init_table::<C, LIMBS, N>),
        }
    }
}

#[cfg(feature = "basepoint-table")]
impl<C, const LIMBS: usize, const N: usize> Default for BasepointTable<C, LIMBS, N>
where
    C: PrimeCurveParams<LIMBS>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "basepoint-table")]
impl<C, const LIMBS: usize, const N: usize> Deref for BasepointTable<C, LIMBS, N>
where
    C: PrimeCurveParams<LIMBS>,
{
    type Target = [LookupTable<C, LIMBS>; N];

    #[inline]
    fn deref(&self) -> &[LookupTable<C, LIMBS>; N] {
        &self.tables
    }
}
