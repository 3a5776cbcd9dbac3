//! Big-endian byte codec and bit-window extraction for [`Uint`].
//!
//! These work for any `LIMBS` without requiring `Uint<LIMBS>: ArrayEncoding`, and accept inputs
//! shorter than the full integer width (e.g. a 66-byte P-521 encoding into nine limbs).

use bigint::{Limb, Uint, Word};

/// Decode a [`Uint`] from a big-endian byte slice of at most `Uint::<LIMBS>::BYTES` bytes.
///
/// Shorter inputs are treated as if left-padded with zeros.
///
/// # Panics
///
/// If `bytes` is longer than `Uint::<LIMBS>::BYTES`.
pub fn uint_from_be_slice<const LIMBS: usize>(bytes: &[u8]) -> Uint<LIMBS> {
    assert!(bytes.len() <= Uint::<LIMBS>::BYTES, "input too long");

    let mut words = [0 as Word; LIMBS];
    for (word, chunk) in words.iter_mut().zip(bytes.rchunks(Limb::BYTES)) {
        let mut buf = [0u8; Limb::BYTES];
        buf[Limb::BYTES - chunk.len()..].copy_from_slice(chunk);
        *word = Word::from_be_bytes(buf);
    }

    Uint::from_words(words)
}

/// Encode the low `out.len()` bytes of `uint` as big endian into `out`.
///
/// # Panics
///
/// If `out` is longer than `Uint::<LIMBS>::BYTES`.
pub fn uint_write_be_bytes<const LIMBS: usize>(uint: &Uint<LIMBS>, out: &mut [u8]) {
    assert!(out.len() <= Uint::<LIMBS>::BYTES, "output too long");

    for (word, chunk) in uint.as_words().iter().zip(out.rchunks_mut(Limb::BYTES)) {
        let bytes = word.to_be_bytes();
        chunk.copy_from_slice(&bytes[Limb::BYTES - chunk.len()..]);
    }
}

/// Returns the `width`-bit window of `uint` starting at bit `index`, zero-filled past the top.
///
/// Runs in constant time with respect to the value of `uint`.
#[inline]
pub const fn uint_bits<const LIMBS: usize>(uint: &Uint<LIMBS>, index: u32, width: u32) -> Word {
    debug_assert!(width > 0 && width < Word::BITS);

    let words = uint.as_words();
    let limb = index as usize / Limb::BITS;
    let shift = index as usize % Limb::BITS;

    if limb >= LIMBS {
        return 0;
    }

    let mut window = words[limb] >> shift;
    if shift + width as usize > Limb::BITS && limb + 1 < LIMBS {
        window |= words[limb + 1] << (Limb::BITS - shift);
    }

    window & ((1 << width) - 1)
}
