//! Field elements which use an internal Montgomery form representation.
//!
//! A residue `a mod p` is stored as `a·R mod p` with `R = 2^(Word::BITS·LIMBS)`. All arithmetic operates
//! on this form, and conversions happen only when encoding or decoding.

mod sqrt;

use crate::uint::{uint_bits, uint_from_be_slice, uint_write_be_bytes};
use bigint::{Limb, Uint, Word};
use core::{
    fmt,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::{Field, PrimeField};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use zeroize::DefaultIsZeroes;

/// Parameters of a prime field in Montgomery form.
///
/// Implementors supply the modulus, a multiplicative generator and the serialized
/// representation. Every Montgomery constant is derived from the modulus at compile time.
pub trait MontyParams<const LIMBS: usize>:
    Copy + Clone + fmt::Debug + Default + Eq + PartialEq + Send + Sync + 'static
{
    /// Big-endian serialization of a field element, exactly [`MontyParams::BYTES`] long.
    type Repr: Copy + Default + Send + Sync + 'static + AsRef<[u8]> + AsMut<[u8]>;

    /// The field modulus as big-endian hex, `16 * LIMBS` digits long (zero-padded).
    const MODULUS_HEX: &'static str;

    /// Generator of the multiplicative group of the field.
    const MULTIPLICATIVE_GENERATOR: u64;

    /// Optional precomputed `2^S`-th root of unity (canonical, not Montgomery form). Computed at
    /// compile time when absent.
    const ROOT_OF_UNITY: Option<Uint<LIMBS>> = None;

    /// The field modulus, an odd prime.
    const MODULUS: Uint<LIMBS> = Uint::from_be_hex(Self::MODULUS_HEX);

    /// Bit length of the modulus.
    const MODULUS_BITS: u32 = Self::MODULUS.bits_vartime() as u32;

    /// Size of a field element when serialized as bytes.
    const BYTES: usize = (Self::MODULUS_BITS as usize).div_ceil(8);

    /// `-MODULUS^-1 mod 2^Word::BITS`, the Montgomery reduction constant.
    const MOD_NEG_INV: Word = compute_mod_neg_inv(Self::MODULUS.as_words()[0]);

    /// `R mod MODULUS`, the Montgomery form of one.
    const R: Uint<LIMBS> = compute_r(&Self::MODULUS);

    /// `R^2 mod MODULUS`, used to convert into Montgomery form.
    const R2: Uint<LIMBS> = compute_r2(&Self::MODULUS, &Self::R);

    /// `MODULUS - 2`.
    const INVERSION_EXPONENT: Uint<LIMBS> = Self::MODULUS.wrapping_sub(&Uint::from_u64(2));

    /// 2-adicity of the multiplicative group: `MODULUS - 1 = T * 2^S` with `T` odd.
    const S: u32 = compute_s(&Self::MODULUS);

    /// Odd part of `MODULUS - 1`.
    const T: Uint<LIMBS> = Self::MODULUS.shr_vartime(Self::S as usize);
}

/// Field element type which uses an internal Montgomery form representation.
#[derive(Clone, Copy)]
pub struct MontyFieldElement<MOD, const LIMBS: usize>
where
    MOD: MontyParams<LIMBS>,
{
    montgomery_form: Uint<LIMBS>,
    phantom: PhantomData<MOD>,
}

impl<MOD, const LIMBS: usize> MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    /// Zero element (additive identity).
    pub const ZERO: Self = Self::from_montgomery(Uint::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_montgomery(MOD::R);

    /// Number of limbs used by the internal integer representation.
    pub const LIMBS: usize = LIMBS;

    /// Size of a serialized field element in bytes.
    pub const BYTES: usize = MOD::BYTES;

    /// Decode a field element from hex-encoded bytes.
    ///
    /// This is primarily intended for defining constants using hex literals.
    ///
    /// # Panics
    ///
    /// - When hex is malformed or not `16 * LIMBS` digits long
    /// - If input overflows the modulus
    pub const fn from_hex_vartime(hex: &str) -> Self {
        let uint = Uint::from_be_hex(hex);
        let (_, borrow) = uint.sbb(&MOD::MODULUS, Limb::ZERO);
        assert!(borrow.0 != 0, "hex encoded field element overflows modulus");

        Self::from_uint_reduced(&uint)
    }

    /// Convert [`Uint`] into [`MontyFieldElement`], first converting it into Montgomery form:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    ///
    /// Any `LIMBS`-wide input is accepted and reduced modulo `p`.
    #[inline]
    pub const fn from_uint_reduced(uint: &Uint<LIMBS>) -> Self {
        let (lo, hi) = uint.mul_wide(&MOD::R2);
        Self::from_montgomery(montgomery_reduce::<MOD, LIMBS>(&lo, &hi))
    }

    /// Convert [`Uint`] into [`MontyFieldElement`], returning `None` if the input is not
    /// canonical, i.e. not less than the modulus.
    #[inline]
    pub fn from_uint(uint: &Uint<LIMBS>) -> CtOption<Self> {
        CtOption::new(Self::from_uint_reduced(uint), uint.ct_lt(&MOD::MODULUS))
    }

    /// Convert a `u64` into a [`MontyFieldElement`].
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_reduced(&Uint::from_u64(w))
    }

    /// Create a [`MontyFieldElement`] from a value which is already in Montgomery form.
    #[inline]
    pub const fn from_montgomery(uint: Uint<LIMBS>) -> Self {
        Self {
            montgomery_form: uint,
            phantom: PhantomData,
        }
    }

    /// Borrow the inner Montgomery form representation.
    #[inline]
    pub const fn as_montgomery(&self) -> &Uint<LIMBS> {
        &self.montgomery_form
    }

    /// Decode a field element from a big-endian byte slice of at most `Uint::<LIMBS>::BYTES`
    /// bytes, returning `None` if the encoded value is not less than the modulus.
    pub fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
        Self::from_uint(&uint_from_be_slice(bytes))
    }

    /// Encode the canonical value of this element as big endian into `out`, which is usually
    /// [`Self::BYTES`] long.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        uint_write_be_bytes(&self.retrieve(), out);
    }

    /// Translate out of Montgomery form, returning the canonical value in `[0, p)`.
    #[inline]
    pub const fn retrieve(&self) -> Uint<LIMBS> {
        montgomery_reduce::<MOD, LIMBS>(&self.montgomery_form, &Uint::ZERO)
    }

    /// Determine if this element is odd, using its canonical value.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.retrieve().as_words()[0] & 1) as u8)
    }

    /// Determine if this element is even, using its canonical value.
    #[inline]
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    /// Determine if this element is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.montgomery_form.ct_eq(&Uint::ZERO)
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::from_montgomery(
            self.montgomery_form
                .add_mod(&rhs.montgomery_form, &MOD::MODULUS),
        )
    }

    /// Double element (add it to itself).
    #[inline]
    pub const fn double(&self) -> Self {
        Self::add(self, self)
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::from_montgomery(
            self.montgomery_form
                .sub_mod(&rhs.montgomery_form, &MOD::MODULUS),
        )
    }

    /// Multiply elements.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        let (lo, hi) = self.montgomery_form.mul_wide(&rhs.montgomery_form);
        Self::from_montgomery(montgomery_reduce::<MOD, LIMBS>(&lo, &hi))
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self::sub(&Self::ZERO, self)
    }

    /// Compute field element squared.
    #[inline]
    pub const fn square(&self) -> Self {
        let (lo, hi) = self.montgomery_form.square_wide();
        Self::from_montgomery(montgomery_reduce::<MOD, LIMBS>(&lo, &hi))
    }

    /// Returns `self^(2^n)`, i.e. squares `self` `n` times.
    pub const fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// Uses a fixed window of 5 bits over a table of the first 32 powers of `self`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If the exponent is fixed, this operation is constant time.
    pub const fn pow_vartime(&self, exp: &Uint<LIMBS>) -> Self {
        const WINDOW: u32 = 5;

        let mut table = [Self::ONE; 1 << WINDOW];
        table[1] = *self;
        let mut i = 2;
        while i < table.len() {
            table[i] = if i % 2 == 0 {
                table[i / 2].square()
            } else {
                table[i - 1].multiply(self)
            };
            i += 1;
        }

        let mut acc = Self::ONE;
        let mut window = (exp.bits_vartime() as u32).div_ceil(WINDOW);

        while window > 0 {
            window -= 1;
            acc = acc.sqn_vartime(WINDOW as usize);

            let digit = uint_bits(exp, window * WINDOW, WINDOW);
            acc = acc.multiply(&table[digit as usize]);
        }

        acc
    }

    /// Compute [`MontyFieldElement`] inversion: `1 / self`, via Fermat's little theorem
    /// (`self^(p - 2)`).
    ///
    /// Returns `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.pow_vartime(&MOD::INVERSION_EXPONENT), !self.is_zero())
    }
}

/// Computes `-n^-1 mod 2^Word::BITS` for odd `n` by Newton iteration.
const fn compute_mod_neg_inv(n: Word) -> Word {
    assert!(n & 1 == 1, "modulus must be odd");

    // Each step doubles the number of correct low bits.
    let mut inv: Word = 1;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul((2 as Word).wrapping_sub(n.wrapping_mul(inv)));
        i += 1;
    }

    inv.wrapping_neg()
}

/// Computes `2^(Word::BITS * LIMBS) mod p` by doubling one, `Word::BITS * LIMBS` times.
const fn compute_r<const LIMBS: usize>(modulus: &Uint<LIMBS>) -> Uint<LIMBS> {
    let mut r = Uint::ONE;
    let mut i = 0;
    while i < Uint::<LIMBS>::BITS {
        r = r.add_mod(&r, modulus);
        i += 1;
    }
    r
}

/// Computes `R^2 mod p` by doubling `R mod p` another `Word::BITS * LIMBS` times.
const fn compute_r2<const LIMBS: usize>(modulus: &Uint<LIMBS>, r: &Uint<LIMBS>) -> Uint<LIMBS> {
    let mut r2 = *r;
    let mut i = 0;
    while i < Uint::<LIMBS>::BITS {
        r2 = r2.add_mod(&r2, modulus);
        i += 1;
    }
    r2
}

/// Counts the trailing zero bits of `p - 1`.
const fn compute_s<const LIMBS: usize>(modulus: &Uint<LIMBS>) -> u32 {
    let p_minus_one = modulus.wrapping_sub(&Uint::ONE);
    let words = p_minus_one.as_words();
    let mut s = 0;
    let mut i = 0;
    while i < LIMBS {
        if words[i] != 0 {
            return s + words[i].trailing_zeros();
        }
        s += Word::BITS;
        i += 1;
    }
    s
}

/// Montgomery reduction of the double-width value `(lo, hi)`, which must be less than `p·R`.
///
/// Returns `(lo + hi·R)·R^-1 mod p`.
const fn montgomery_reduce<MOD, const LIMBS: usize>(
    lo: &Uint<LIMBS>,
    hi: &Uint<LIMBS>,
) -> Uint<LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    let modulus = MOD::MODULUS.as_limbs();
    let hi = hi.as_limbs();
    let mut r = *lo.as_limbs();
    let mut top = Limb::ZERO;
    let mut i = 0;

    while i < LIMBS {
        let u = Limb(r[0].0.wrapping_mul(MOD::MOD_NEG_INV));
        let (_, mut carry) = r[0].mac(u, modulus[0], Limb::ZERO);

        let mut j = 1;
        while j < LIMBS {
            let (t, c) = r[j].mac(u, modulus[j], carry);
            r[j - 1] = t;
            carry = c;
            j += 1;
        }

        let (t, c) = hi[i].adc(top, carry);
        r[LIMBS - 1] = t;
        top = c;
        i += 1;
    }

    // `top·R + r < 2p`: one conditional subtraction brings it into range
    let (reduced, borrow) = Uint::new(r).sbb(&MOD::MODULUS, Limb::ZERO);
    let (_, borrow) = top.sbb(Limb::ZERO, borrow);
    reduced.wrapping_add(&MOD::MODULUS.bitand(&Uint::from_words([borrow.0; LIMBS])))
}

//
// `ff` trait impls
//

impl<MOD, const LIMBS: usize> Field for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    /// Generate a uniformly random field element by rejection sampling.
    fn random(mut rng: impl RngCore) -> Self {
        let top_bits = MOD::MODULUS_BITS - (LIMBS as u32 - 1) * Word::BITS;
        let top_mask = Word::MAX >> (Word::BITS - top_bits);

        loop {
            let mut words = [0 as Word; LIMBS];
            for word in words.iter_mut() {
                *word = rng.next_u64() as Word;
            }
            words[LIMBS - 1] &= top_mask;

            let uint = Uint::from_words(words);
            if bool::from(uint.ct_lt(&MOD::MODULUS)) {
                return Self::from_uint_reduced(&uint);
            }
        }
    }

    fn square(&self) -> Self {
        Self::square(self)
    }

    fn double(&self) -> Self {
        Self::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Self::invert(self)
    }

    fn sqrt(&self) -> CtOption<Self> {
        Self::sqrt(self)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl<MOD, const LIMBS: usize> PrimeField for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    type Repr = MOD::Repr;

    const MODULUS: &'static str = MOD::MODULUS_HEX;
    const NUM_BITS: u32 = MOD::MODULUS_BITS;
    const CAPACITY: u32 = MOD::MODULUS_BITS - 1;
    const TWO_INV: Self =
        Self::from_uint_reduced(&MOD::MODULUS.shr_vartime(1).wrapping_add(&Uint::ONE));
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(MOD::MULTIPLICATIVE_GENERATOR);
    const S: u32 = MOD::S;
    const ROOT_OF_UNITY: Self = match MOD::ROOT_OF_UNITY {
        Some(root_of_unity) => Self::from_uint_reduced(&root_of_unity),
        // a non-residue raised to `(p - 1) / 2` is always `-1`
        None if MOD::S == 1 => Self::neg(&Self::ONE),
        None => Self::MULTIPLICATIVE_GENERATOR.pow_vartime(&MOD::T),
    };
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY
        .pow_vartime(&Uint::ONE.shl_vartime(MOD::S as usize).wrapping_sub(&Uint::ONE));
    const DELTA: Self = Self::MULTIPLICATIVE_GENERATOR.sqn_vartime(MOD::S as usize);

    fn from_repr(repr: Self::Repr) -> CtOption<Self> {
        Self::from_be_slice(repr.as_ref())
    }

    fn to_repr(&self) -> Self::Repr {
        let mut repr = Self::Repr::default();
        self.write_be_bytes(repr.as_mut());
        repr
    }

    fn is_odd(&self) -> Choice {
        Self::is_odd(self)
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! monty_field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD, const LIMBS: usize> $op for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<&Self> for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<Self> for &MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

monty_field_op!(Add, add, add);
monty_field_op!(Sub, sub, sub);
monty_field_op!(Mul, mul, multiply);

/// Emit a `core::ops` assignment trait wrapper for an inherent method.
macro_rules! monty_field_assign_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD, const LIMBS: usize> $op for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, rhs: MontyFieldElement<MOD, LIMBS>) {
                *self = self.$inner_func(&rhs);
            }
        }

        impl<MOD, const LIMBS: usize> $op<&Self> for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, rhs: &MontyFieldElement<MOD, LIMBS>) {
                *self = self.$inner_func(rhs);
            }
        }
    };
}

monty_field_assign_op!(AddAssign, add_assign, add);
monty_field_assign_op!(SubAssign, sub_assign, sub);
monty_field_assign_op!(MulAssign, mul_assign, multiply);

impl<MOD, const LIMBS: usize> Neg for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        MontyFieldElement::neg(&self)
    }
}

impl<MOD, const LIMBS: usize> Neg for &MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    type Output = MontyFieldElement<MOD, LIMBS>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD, LIMBS> {
        MontyFieldElement::neg(self)
    }
}

impl<MOD, const LIMBS: usize> Sum for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, MOD, const LIMBS: usize> Sum<&'a Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<MOD, const LIMBS: usize> Product for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, MOD, const LIMBS: usize> Product<&'a Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl<MOD, const LIMBS: usize> ConditionallySelectable for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_montgomery(Uint::conditional_select(
            &a.montgomery_form,
            &b.montgomery_form,
            choice,
        ))
    }
}

impl<MOD, const LIMBS: usize> ConstantTimeEq for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.montgomery_form.ct_eq(&other.montgomery_form)
    }
}

//
// `core::fmt` trait impls
//

impl<MOD, const LIMBS: usize> fmt::Debug for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MontyFieldElement<p=0x{:X}>(0x{:X})",
            MOD::MODULUS,
            self.retrieve()
        )
    }
}

impl<MOD, const LIMBS: usize> fmt::LowerHex for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.retrieve(), f)
    }
}

impl<MOD, const LIMBS: usize> fmt::UpperHex for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.retrieve(), f)
    }
}

//
// Miscellaneous trait impls
//

impl<MOD, const LIMBS: usize> Default for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<MOD, const LIMBS: usize> DefaultIsZeroes for MontyFieldElement<MOD, LIMBS> where
    MOD: MontyParams<LIMBS>
{
}

impl<MOD: MontyParams<LIMBS>, const LIMBS: usize> Eq for MontyFieldElement<MOD, LIMBS> {}
impl<MOD: MontyParams<LIMBS>, const LIMBS: usize> PartialEq for MontyFieldElement<MOD, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<MOD, const LIMBS: usize> From<u64> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    #[inline]
    fn from(n: u64) -> MontyFieldElement<MOD, LIMBS> {
        Self::from_u64(n)
    }
}

impl<MOD, const LIMBS: usize> From<MontyFieldElement<MOD, LIMBS>> for Uint<LIMBS>
where
    MOD: MontyParams<LIMBS>,
{
    fn from(fe: MontyFieldElement<MOD, LIMBS>) -> Uint<LIMBS> {
        fe.retrieve()
    }
}

#[cfg(test)]
mod tests {
    use super::{MontyFieldElement, MontyParams};
    use bigint::{U192, U256, U64, Uint};
    use ff::{Field, PrimeField};

    /// The P-256 base field, small enough to check the Montgomery constants by hand.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct P256Field;

    impl MontyParams<{ U256::LIMBS }> for P256Field {
        type Repr = [u8; 32];
        const MODULUS_HEX: &'static str =
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
        const MULTIPLICATIVE_GENERATOR: u64 = 6;
    }

    /// The P-192 scalar field, whose modulus is `1 mod 4`.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct P192Scalar;

    impl MontyParams<{ U192::LIMBS }> for P192Scalar {
        type Repr = [u8; 24];
        const MODULUS_HEX: &'static str = "ffffffffffffffffffffffff99def836146bc9b1b4d22831";
        const MULTIPLICATIVE_GENERATOR: u64 = 3;
    }

    /// A tiny prime, to exercise a field with a single 64-bit integer.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct Small;

    impl MontyParams<{ U64::LIMBS }> for Small {
        type Repr = [u8; 3];
        const MODULUS_HEX: &'static str = "00000000000f4243";
        const MULTIPLICATIVE_GENERATOR: u64 = 2;
    }

    type Fe = MontyFieldElement<P256Field, { U256::LIMBS }>;
    type Ts = MontyFieldElement<P192Scalar, { U192::LIMBS }>;
    type Sfe = MontyFieldElement<Small, { U64::LIMBS }>;

    crate::test_field!(Fe);

    mod tonelli_shanks {
        use super::Ts;

        crate::test_field_constants!(Ts);
        crate::test_field_sqrt!(Ts);
    }

    #[test]
    fn montgomery_constants() {
        assert_eq!(P256Field::MOD_NEG_INV, 1);
        assert_eq!(P256Field::MODULUS_BITS, 256);
        assert_eq!(P256Field::BYTES, 32);
        assert_eq!(P256Field::S, 1);
        assert_eq!(P192Scalar::S, 4);
        assert_eq!(
            P256Field::R,
            U256::from_be_hex("00000000fffffffeffffffffffffffffffffffff000000000000000000000001")
        );
        assert_eq!(
            P256Field::R2,
            U256::from_be_hex("00000004fffffffdfffffffffffffffefffffffbffffffff0000000000000003")
        );
    }

    #[test]
    fn small_field_matches_integer_arithmetic() {
        let p = 1_000_003u64;
        let (a, b) = (987_654u64, 123_457u64);
        let x = Sfe::from_u64(a);
        let y = Sfe::from_u64(b);
        let word = |fe: Sfe| fe.retrieve().as_words()[0] as u64;

        assert_eq!(Small::BYTES, 3);
        assert_eq!(word(x + y), (a + b) % p);
        assert_eq!(word(y - x), (p + b - a) % p);
        assert_eq!(word(x * y), (a * b) % p);
        assert_eq!(word(x.square()), (a * a) % p);
        assert_eq!(x * x.invert().unwrap(), Sfe::ONE);
    }

    #[test]
    fn from_uint_rejects_modulus() {
        assert!(bool::from(Fe::from_uint(&P256Field::MODULUS).is_none()));
        let max = P256Field::MODULUS.wrapping_sub(&Uint::ONE);
        assert_eq!(Fe::from_uint(&max).unwrap() + Fe::ONE, Fe::ZERO);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(bool::from(Fe::ZERO.invert().is_none()));
    }

    #[test]
    fn repr_is_big_endian() {
        let repr = Fe::from_u64(0x0102).to_repr();
        assert_eq!(repr[30..], [1, 2]);
        assert!(repr[..30].iter().all(|&b| b == 0));
        assert_eq!(Fe::from_repr(repr).unwrap(), Fe::from_u64(0x0102));
        assert!(bool::from(Fe::from_u64(3).is_odd()));
        assert!(bool::from(Fe::from_u64(2).is_even()));
    }

    #[test]
    fn sum_and_product_of_references() {
        let xs = [Fe::from_u64(2), Fe::from_u64(3), Fe::from_u64(7)];
        assert_eq!(xs.iter().sum::<Fe>(), Fe::from_u64(12));
        assert_eq!(xs.iter().product::<Fe>(), Fe::from_u64(42));
    }

    #[test]
    fn random_elements_are_canonical() {
        use rand_core::OsRng;

        for _ in 0..16 {
            let x = Fe::random(&mut OsRng);
            assert_eq!(Fe::from_uint(&x.retrieve()).unwrap(), x);

            let y = Sfe::random(&mut OsRng);
            assert_eq!(Sfe::from_uint(&y.retrieve()).unwrap(), y);
        }
    }
}
