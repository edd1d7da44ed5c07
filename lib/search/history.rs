use crate::chess::{Butterfly, Color, Piece, PieceTo, Role, Square};
use crate::search::{Graviton, KNIGHT_BUCKETS, Normal, PawnBuckets, Statistics, Table, butterfly_index};
use crate::util::{Int, Primitive};

/// The number of plies from the root tracked by [`LowPlyHistory`].
pub const LOW_PLY_HISTORY_SIZE: usize = 5;

/// The stat of [`ButterflyHistory`] and [`LowPlyHistory`].
pub type ButterflyStat = Graviton<i16, 7183>;

/// The stat of [`CapturePieceToHistory`].
pub type CaptureStat = Graviton<i16, 10692>;

/// The stat of [`PieceToHistory`] and [`ContinuationHistory`].
pub type PieceToStat = Graviton<i16, 30000>;

/// The stat of [`PawnHistory`].
pub type PawnStat = Graviton<i16, 8192>;

/// The stat of [`KnightHistory`].
pub type KnightStat = Graviton<i16, 5000>;

/// How often quiet moves succeeded or failed, by side to move and [`butterfly_index`].
pub type ButterflyHistory = Table<[Butterfly<ButterflyStat>; Color::COUNT]>;

/// How often quiet moves succeeded or failed near the root, by ply and [`butterfly_index`].
pub type LowPlyHistory = Table<[Butterfly<ButterflyStat>; LOW_PLY_HISTORY_SIZE]>;

/// How often captures succeeded or failed, by moving piece, target square and captured role.
pub type CapturePieceToHistory = Table<PieceTo<[CaptureStat; Role::COUNT]>>;

/// The shape of [`PieceToHistory`].
pub type PieceToStats = PieceTo<PieceToStat>;

/// How often moves succeeded or failed, by moving piece and target square.
pub type PieceToHistory = Table<PieceToStats>;

/// How often moves succeeded or failed in reply to a previous move.
///
/// The outer [`PieceTo`] is addressed by the previous move, see [`Table::reply`], the inner by
/// the current move.
pub type ContinuationHistory = Table<PieceTo<PieceToStats>>;

/// How often moves succeeded or failed, by pawn structure, moving piece and target square.
pub type PawnHistory = Table<[PieceTo<PawnStat>; Normal::SIZE]>;

/// How often knight moves succeeded or failed, by color, origin square and attacked targets.
pub type KnightHistory = Table<[[[KnightStat; KNIGHT_BUCKETS]; 64]; Color::COUNT]>;

/// How often the transposition table move succeeded or failed.
pub type TtMoveHistory = Graviton<i16, 8192>;

/// Which kind of moves a [`ContinuationHistory`] tracks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum StatsType {
    NoCaptures,
    Captures,
}

unsafe impl Int for StatsType {
    const MIN: u8 = StatsType::NoCaptures as _;
    const MAX: u8 = StatsType::Captures as _;
}

impl From<bool> for StatsType {
    #[inline(always)]
    fn from(is_capture: bool) -> Self {
        Int::new(is_capture as _)
    }
}

/// Addressed by `(side, wc, wt)`, where `side` is either a [`Color`] or a ply.
impl<T: Primitive, const D: i32, const N: usize> Statistics<(usize, Square, Square)>
    for [Butterfly<Graviton<T, D>>; N]
{
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (side, wc, wt): (usize, Square, Square)) -> &Self::Stat {
        &self[side][butterfly_index(wc, wt)]
    }

    #[inline(always)]
    fn stat_mut(&mut self, (side, wc, wt): (usize, Square, Square)) -> &mut Self::Stat {
        &mut self[side][butterfly_index(wc, wt)]
    }
}

impl<T: Primitive, const D: i32> Statistics<(Piece, Square, Role)>
    for PieceTo<[Graviton<T, D>; Role::COUNT]>
{
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (piece, wt, captured): (Piece, Square, Role)) -> &Self::Stat {
        &self[piece.index()][wt.index()][captured.index()]
    }

    #[inline(always)]
    fn stat_mut(&mut self, (piece, wt, captured): (Piece, Square, Role)) -> &mut Self::Stat {
        &mut self[piece.index()][wt.index()][captured.index()]
    }
}

impl<T: Primitive, const D: i32> Statistics<(Piece, Square)> for PieceTo<Graviton<T, D>> {
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (piece, wt): (Piece, Square)) -> &Self::Stat {
        &self[piece.index()][wt.index()]
    }

    #[inline(always)]
    fn stat_mut(&mut self, (piece, wt): (Piece, Square)) -> &mut Self::Stat {
        &mut self[piece.index()][wt.index()]
    }
}

/// Addressed by `(bucket, piece, wt)`, where `bucket` is a [`pawn_structure_index`].
///
/// [`pawn_structure_index`]: crate::search::pawn_structure_index
impl<T: Primitive, const D: i32, const N: usize> Statistics<(usize, Piece, Square)>
    for [PieceTo<Graviton<T, D>>; N]
{
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (bucket, piece, wt): (usize, Piece, Square)) -> &Self::Stat {
        self[bucket].stat((piece, wt))
    }

    #[inline(always)]
    fn stat_mut(&mut self, (bucket, piece, wt): (usize, Piece, Square)) -> &mut Self::Stat {
        self[bucket].stat_mut((piece, wt))
    }
}

/// Addressed by `(color, wc, bucket)`, where `bucket` is a [`knight_attack_index`].
///
/// [`knight_attack_index`]: crate::search::knight_attack_index
impl<T: Primitive, const D: i32> Statistics<(Color, Square, usize)>
    for [[[Graviton<T, D>; KNIGHT_BUCKETS]; 64]; Color::COUNT]
{
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (color, wc, bucket): (Color, Square, usize)) -> &Self::Stat {
        &self[color.index()][wc.index()][bucket]
    }

    #[inline(always)]
    fn stat_mut(&mut self, (color, wc, bucket): (Color, Square, usize)) -> &mut Self::Stat {
        &mut self[color.index()][wc.index()][bucket]
    }
}
