use crate::chess::{Bitboard, Color, Fingerprint, Magic, Square, Zobrist};
use crate::util::{Assume, Int};

/// The number of buckets addressed by minor piece and non-pawn keys.
pub const CORRECTION_BUCKETS: usize = 32768;

/// The number of buckets addressed by the attack targets of a knight.
pub const KNIGHT_BUCKETS: usize = 256;

/// Trait for the ways of bucketing pawn structures.
pub trait PawnBuckets {
    /// The number of buckets, a power of two.
    const SIZE: usize;
}

/// Pawn structure buckets for move ordering.
#[derive(Debug)]
pub enum Normal {}

impl PawnBuckets for Normal {
    const SIZE: usize = 512;
}

/// Pawn structure buckets for evaluation correction.
#[derive(Debug)]
pub enum Correction {}

impl PawnBuckets for Correction {
    const SIZE: usize = CORRECTION_BUCKETS;
}

#[inline(always)]
fn bucket<const N: usize>(key: Zobrist) -> usize {
    const { assert!(N.is_power_of_two()) }
    let idx = key.slice(N.trailing_zeros());
    (idx < N).assume();
    idx
}

/// The bucket of a pawn structure.
#[inline(always)]
pub fn pawn_structure_index<B: PawnBuckets>(pawn_key: Zobrist) -> usize {
    const { assert!(B::SIZE.is_power_of_two()) }
    let idx = pawn_key.slice(B::SIZE.trailing_zeros());
    (idx < B::SIZE).assume();
    idx
}

/// The bucket of the placement of minor pieces.
#[inline(always)]
pub fn minor_piece_index(minor_key: Zobrist) -> usize {
    bucket::<CORRECTION_BUCKETS>(minor_key)
}

/// The bucket of the placement of non-pawn pieces of some color.
#[inline(always)]
pub fn non_pawn_index(non_pawn_key: Zobrist) -> usize {
    bucket::<CORRECTION_BUCKETS>(non_pawn_key)
}

/// The bucket of the `target`s attacked by a knight on `wc`.
#[inline(always)]
pub fn knight_attack_index(target: Bitboard, wc: Square) -> usize {
    let idx = Magic::knight(wc).hash(target, KNIGHT_BUCKETS.trailing_zeros());
    (idx < KNIGHT_BUCKETS).assume();
    idx
}

/// The index of a move from `wc` to `wt` on a [`Butterfly`][`crate::chess::Butterfly`] board.
#[inline(always)]
pub fn butterfly_index(wc: Square, wt: Square) -> usize {
    wc.index() * 64 + wt.index()
}

/// Extension trait that buckets the features of a [`Fingerprint`].
pub trait Buckets: Fingerprint {
    /// The bucket of this position's pawn structure.
    #[inline(always)]
    fn pawn_index<B: PawnBuckets>(&self) -> usize {
        pawn_structure_index::<B>(self.pawn_key())
    }

    /// The bucket of this position's minor pieces.
    #[inline(always)]
    fn minor_index(&self) -> usize {
        minor_piece_index(self.minor_key())
    }

    /// The bucket of this position's non-pawn pieces of [`Color`] `c`.
    #[inline(always)]
    fn non_pawn_index(&self, c: Color) -> usize {
        non_pawn_index(self.non_pawn_key(c))
    }
}

impl<T: Fingerprint + ?Sized> Buckets for T {}
