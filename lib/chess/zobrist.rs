use crate::chess::Color;
use bytemuck::{Pod, Zeroable};
use derive_more::with_trait::{Constructor, Debug, From};

/// A [zobrist hash] of some feature of a position.
///
/// [zobrist hash]: https://www.chessprogramming.org/Zobrist_Hashing
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Zeroable, Pod, Constructor, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug("Zobrist({_0:#018X})")]
#[repr(transparent)]
pub struct Zobrist(u64);

impl Zobrist {
    /// The raw 64-bit key.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The lowest `bits` bits of this key.
    #[inline(always)]
    pub const fn slice(self, bits: u32) -> usize {
        (self.0 & ((1u64 << bits) - 1)) as usize
    }
}

/// Trait for positions that can fingerprint their features by [`Zobrist`] keys.
pub trait Fingerprint {
    /// The key of the pawn structure.
    fn pawn_key(&self) -> Zobrist;

    /// The key of the placement of knights and bishops.
    fn minor_key(&self) -> Zobrist;

    /// The key of the placement of non-pawn pieces of a [`Color`].
    fn non_pawn_key(&self, c: Color) -> Zobrist;
}

impl<T: Fingerprint + ?Sized> Fingerprint for &T {
    #[inline(always)]
    fn pawn_key(&self) -> Zobrist {
        (*self).pawn_key()
    }

    #[inline(always)]
    fn minor_key(&self) -> Zobrist {
        (*self).minor_key()
    }

    #[inline(always)]
    fn non_pawn_key(&self, c: Color) -> Zobrist {
        (*self).non_pawn_key(c)
    }
}
