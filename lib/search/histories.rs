use crate::search::*;
use crate::util::Int;
use derive_more::with_trait::Debug;

/// Every statistic a search worker learns from.
///
/// Each worker owns its own instance, the tables are not synchronized.
#[derive(Debug, Default)]
pub struct Histories {
    /// Quiet moves by side to move.
    pub butterfly: ButterflyHistory,
    /// Quiet moves near the root.
    pub low_ply: LowPlyHistory,
    /// Captures by captured role.
    pub capture: CapturePieceToHistory,
    /// Replies to previous moves, by whether in check and [`StatsType`].
    pub continuation: [[ContinuationHistory; StatsType::COUNT]; 2],
    /// Moves by pawn structure.
    pub pawn: PawnHistory,
    /// Knight moves by attacked targets.
    pub knight: KnightHistory,
    /// The transposition table move.
    pub tt_move: TtMoveHistory,
    /// Evaluation error by pawn structure.
    pub pawn_correction: CorrectionHistory<Pawn>,
    /// Evaluation error by minor piece placement.
    pub minor_correction: CorrectionHistory<Minor>,
    /// Evaluation error by non-pawn piece placement.
    pub non_pawn_correction: CorrectionHistory<NonPawn>,
    /// Evaluation error by the last two moves.
    pub continuation_correction: CorrectionHistory<Continuation>,
}

impl Histories {
    /// Allocates zeroed statistics.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// The [`ContinuationHistory`] for moves of a [`StatsType`], while in check or not.
    #[inline(always)]
    pub fn continuation(&self, in_check: bool, kind: StatsType) -> &ContinuationHistory {
        &self.continuation[in_check as usize][kind.index()]
    }

    /// The mutable [`ContinuationHistory`] for moves of a [`StatsType`], while in check or not.
    #[inline(always)]
    pub fn continuation_mut(&mut self, in_check: bool, kind: StatsType) -> &mut ContinuationHistory {
        &mut self.continuation[in_check as usize][kind.index()]
    }

    /// Zeroes every statistic in place.
    pub fn clear(&mut self) {
        log::debug!("clearing histories");

        self.butterfly.clear();
        self.low_ply.clear();
        self.capture.clear();
        self.continuation.iter_mut().flatten().for_each(Table::clear);
        self.pawn.clear();
        self.knight.clear();
        self.tt_move.set(0);
        self.pawn_correction.clear();
        self.minor_correction.clear();
        self.non_pawn_correction.clear();
        self.continuation_correction.clear();
    }
}
