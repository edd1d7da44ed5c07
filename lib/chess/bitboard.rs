use crate::chess::Square;
use crate::util::Int;
use bytemuck::Zeroable;
use derive_more::with_trait::{Constructor, Debug, From};
use std::ops::{BitAnd, BitOr};

/// A set of squares on a chess board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Zeroable, Constructor, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug("Bitboard({_0:#018X})")]
#[repr(transparent)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// The squares a knight on `sq` attacks.
    #[inline(always)]
    pub fn knight(sq: Square) -> Self {
        static JUMPS: [u64; 64] = const {
            let steps: [(i8, i8); 8] =
                [(-2, 1), (-1, 2), (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1)];

            let mut jumps = [0u64; 64];
            let mut sq = 0;
            while sq < 64 {
                let (file, rank) = ((sq & 0b111) as i8, (sq >> 3) as i8);
                let mut i = 0;
                while i < steps.len() {
                    let (f, r) = (file + steps[i].0, rank + steps[i].1);
                    if 0 <= f && f < 8 && 0 <= r && r < 8 {
                        jumps[sq] |= 1u64 << (f + 8 * r);
                    }

                    i += 1;
                }

                sq += 1;
            }

            jumps
        };

        Bitboard(JUMPS[sq.index()])
    }

    /// Whether this bitboard contains a [`Square`].
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard().0 != 0
    }

    /// The number of [`Square`]s in this bitboard.
    #[inline(always)]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether this bitboard contains no [`Square`]s.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// An iterator over all subsets of this bitboard, starting from the empty set.
    #[inline(always)]
    pub fn subsets(self) -> impl Iterator<Item = Self> {
        let mask = self.0;
        let mut next = Some(0u64);
        std::iter::from_fn(move || {
            let subset = next?;
            let successor = subset.wrapping_sub(mask) & mask;
            next = (successor != 0).then_some(successor);
            Some(Bitboard(subset))
        })
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}
