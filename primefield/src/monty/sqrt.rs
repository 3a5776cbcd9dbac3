//! Modular square roots, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{MontyFieldElement, MontyParams};
use bigint::Uint;
use ff::PrimeField;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

impl<MOD, const LIMBS: usize> MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    /// Returns the square root of self mod p, or `None` if no square root exists.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        if MOD::MODULUS.as_words()[0] & 3 == 3 {
            self.sqrt_shanks()
        } else {
            self.sqrt_tonelli_shanks()
        }
    }

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    ///
    /// For `p ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((p + 1) / 4) (mod p)`. The candidate is squared and compared against `self` to
    /// detect non-residues.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_shanks(&self) -> CtOption<Self> {
        let mod_plus_1_over_4 = const { MOD::MODULUS.shr_vartime(2).wrapping_add(&Uint::ONE) };

        let sqrt = self.pow_vartime(&mod_plus_1_over_4);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Tonelli-Shanks algorithm, which works for every odd prime.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self) -> CtOption<Self> {
        let t_minus_1_over_2 = const { MOD::T.wrapping_sub(&Uint::ONE).shr_vartime(1) };
        let w = self.pow_vartime(&t_minus_1_over_2);

        let mut v = <Self as PrimeField>::S;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = <Self as PrimeField>::ROOT_OF_UNITY;

        for max_v in (1..=<Self as PrimeField>::S).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Self::ONE);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}
