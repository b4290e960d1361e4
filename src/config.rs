//! [Config]: the word type and block span a [SparseSet] is built from.
//!
//! Increasing the block span trades memory for fewer, cheaper list-walk
//! steps on dense runs; decreasing it trades the other way for very sparse
//! data. See [configs] for ready-made presets.
//!
//! [SparseSet]: crate::set::SparseSet

use std::fmt::Debug;

use crate::primitive::Word;

/// Fixed-size word array backing one [Block]'s bits.
///
/// `std`'s blanket `Default` impl for arrays only goes up to a handful of
/// small lengths, so this trait carries its own `zeroed` constructor instead
/// of requiring `Default` as a supertrait.
///
/// [Block]: crate::block::Block
pub trait WordArray: AsRef<[Self::Item]> + AsMut<[Self::Item]> + Clone + Debug {
    type Item: Word;
    const LEN: usize;

    /// An all-zero array of `LEN` words.
    fn zeroed() -> Self;
}

impl<T, const N: usize> WordArray for [T; N]
where
    T: Word,
{
    type Item = T;
    const LEN: usize = N;

    fn zeroed() -> Self {
        std::array::from_fn(|_| T::ZERO)
    }
}

/// Block layout configuration: word width and block span (`B` in the design).
///
/// Hidden behind the `impl` feature — most users should pick one of the
/// [configs] presets rather than implement this directly.
#[cfg_attr(not(feature = "impl"), doc(hidden))]
pub trait Config: Clone + Default + 'static {
    type Word: Word;
    type Words: WordArray<Item = Self::Word>;

    /// Number of words per block. Block span in bits is `Self::Words::LEN * Self::Word::BITS`.
    const BLOCK_WORDS: usize = <Self::Words as WordArray>::LEN;

    /// Block span in bits (`B` in the design). Always a power of two in the
    /// provided presets, though nothing here requires that.
    #[inline]
    fn block_bits() -> usize {
        <Self::Words as WordArray>::LEN * (Self::Word::BITS as usize)
    }
}
