use crate::chess::{self, Color};
use crate::search::{CORRECTION_BUCKETS, Graviton, Statistics, Table};
use crate::util::{Int, Primitive};
use bytemuck::Zeroable;

/// The bound on every correction statistic.
pub const CORRECTION_HISTORY_LIMIT: i32 = 1024;

/// The stat of every [`CorrectionHistory`].
pub type CorrectionStat = Graviton<i16, CORRECTION_HISTORY_LIMIT>;

/// Trait for the features that static evaluation errors are correlated with.
pub trait CorrectionKind {
    /// The shape of the [`CorrectionHistory`] of this kind.
    type Shape: Zeroable;
}

/// By pawn structure and side to move.
#[derive(Debug)]
pub enum Pawn {}

/// By placement of knights and bishops and side to move.
#[derive(Debug)]
pub enum Minor {}

/// By placement of non-pawn pieces of a color and side to move.
#[derive(Debug)]
pub enum NonPawn {}

/// By moving piece and target square.
#[derive(Debug)]
pub enum PieceTo {}

/// By a pair of moves, the current one in reply to a previous one.
#[derive(Debug)]
pub enum Continuation {}

impl CorrectionKind for Pawn {
    type Shape = [[CorrectionStat; Color::COUNT]; CORRECTION_BUCKETS];
}

impl CorrectionKind for Minor {
    type Shape = [[CorrectionStat; Color::COUNT]; CORRECTION_BUCKETS];
}

impl CorrectionKind for NonPawn {
    type Shape = [[[CorrectionStat; Color::COUNT]; Color::COUNT]; CORRECTION_BUCKETS];
}

impl CorrectionKind for PieceTo {
    type Shape = chess::PieceTo<CorrectionStat>;
}

impl CorrectionKind for Continuation {
    type Shape = chess::PieceTo<<PieceTo as CorrectionKind>::Shape>;
}

/// Differences between the static evaluation of positions and their search score.
///
/// See <https://www.chessprogramming.org/Static_Evaluation_Correction_History>.
pub type CorrectionHistory<K> = Table<<K as CorrectionKind>::Shape>;

/// Addressed by `(bucket, side)`, where `bucket` is a [`pawn_structure_index`] or a
/// [`minor_piece_index`].
///
/// [`pawn_structure_index`]: crate::search::pawn_structure_index
/// [`minor_piece_index`]: crate::search::minor_piece_index
impl<T: Primitive, const D: i32, const N: usize> Statistics<(usize, Color)>
    for [[Graviton<T, D>; Color::COUNT]; N]
{
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (bucket, side): (usize, Color)) -> &Self::Stat {
        &self[bucket][side.index()]
    }

    #[inline(always)]
    fn stat_mut(&mut self, (bucket, side): (usize, Color)) -> &mut Self::Stat {
        &mut self[bucket][side.index()]
    }
}

/// Addressed by `(bucket, color, side)`, where `bucket` is the [`non_pawn_index`] of the
/// pieces of `color`.
///
/// [`non_pawn_index`]: crate::search::non_pawn_index
impl<T: Primitive, const D: i32, const N: usize> Statistics<(usize, Color, Color)>
    for [[[Graviton<T, D>; Color::COUNT]; Color::COUNT]; N]
{
    type Stat = Graviton<T, D>;

    #[inline(always)]
    fn stat(&self, (bucket, color, side): (usize, Color, Color)) -> &Self::Stat {
        &self[bucket][color.index()][side.index()]
    }

    #[inline(always)]
    fn stat_mut(&mut self, (bucket, color, side): (usize, Color, Color)) -> &mut Self::Stat {
        &mut self[bucket][color.index()][side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Piece, Square, Zobrist};
    use crate::search::{Correction, Stat, minor_piece_index, non_pawn_index, pawn_structure_index};
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn correction_histories_have_the_expected_number_of_cells() {
        let cell = size_of::<CorrectionStat>();
        assert_eq!(size_of::<<Pawn as CorrectionKind>::Shape>(), cell * 32768 * 2);
        assert_eq!(size_of::<<Minor as CorrectionKind>::Shape>(), cell * 32768 * 2);
        assert_eq!(size_of::<<NonPawn as CorrectionKind>::Shape>(), cell * 32768 * 2 * 2);
        assert_eq!(size_of::<<PieceTo as CorrectionKind>::Shape>(), cell * 12 * 64);
        let nested = cell * 12 * 64 * 12 * 64;
        assert_eq!(size_of::<<Continuation as CorrectionKind>::Shape>(), nested);
    }

    #[test]
    fn correction_histories_are_bounded_by_the_limit() {
        assert_eq!(CorrectionStat::LIMIT, 1024);
    }

    #[proptest]
    fn pawn_correction_is_addressed_by_pawn_structure_and_side(k: Zobrist, c: Color) {
        let mut history = CorrectionHistory::<Pawn>::new();
        let bucket = pawn_structure_index::<Correction>(k);
        history.stat_mut((bucket, c)).update(i32::MIN);
        assert_eq!(history.stat((bucket, c)).get(), -1024);
        assert_eq!(history.stat((bucket, !c)).get(), 0);
    }

    #[proptest]
    fn minor_correction_is_addressed_by_minor_pieces_and_side(
        k: Zobrist,
        c: Color,
        #[strategy(-1024i32..=1024)] bonus: i32,
    ) {
        let mut history = CorrectionHistory::<Minor>::new();
        let bucket = minor_piece_index(k);
        history.stat_mut((bucket, c)).update(bonus);
        assert_eq!(history.stat((bucket, c)).get(), bonus as i16);
    }

    #[proptest]
    fn non_pawn_correction_is_addressed_per_color(k: Zobrist, color: Color, side: Color) {
        let mut history = CorrectionHistory::<NonPawn>::new();
        let bucket = non_pawn_index(k);
        history.stat_mut((bucket, color, side)).update(512);
        assert_eq!(history.stat((bucket, color, side)).get(), 512);
        assert_eq!(history.stat((bucket, !color, side)).get(), 0);
    }

    #[proptest]
    fn piece_to_correction_is_addressed_by_piece_and_target(p: Piece, wt: Square) {
        let mut history = CorrectionHistory::<PieceTo>::new();
        history.stat_mut((p, wt)).update(1024);
        history.stat_mut((p, wt)).update(-1024);
        assert_eq!(history.stat((p, wt)).get(), -1024);
    }

    #[proptest]
    fn continuation_correction_nests_piece_to_corrections(
        p: Piece,
        wt: Square,
        q: Piece,
        ws: Square,
    ) {
        let mut history = CorrectionHistory::<Continuation>::new();
        history.reply_mut(p, wt).stat_mut((q, ws)).update(300);
        assert_eq!(history.reply(p, wt).stat((q, ws)).get(), 300);

        history.clear();
        assert_eq!(history.reply(p, wt).stat((q, ws)).get(), 0);
    }
}
