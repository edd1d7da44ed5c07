use hindsight::chess::{Bitboard, Color, Fingerprint, Piece, Role, Square, Zobrist};
use hindsight::search::*;
use hindsight::util::Int;
use proptest::{collection::vec, prelude::*};
use std::thread;
use test_strategy::{Arbitrary, proptest};

fn color() -> impl Strategy<Value = Color> {
    any::<bool>().prop_map(Color::from)
}

fn square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(<Square as Int>::new)
}

fn piece() -> impl Strategy<Value = Piece> {
    (0u8..12).prop_map(<Piece as Int>::new)
}

fn zobrist() -> impl Strategy<Value = Zobrist> {
    any::<u64>().prop_map(Zobrist::new)
}

fn bitboard() -> impl Strategy<Value = Bitboard> {
    any::<u64>().prop_map(Bitboard::new)
}

#[derive(Debug, Clone, Arbitrary)]
struct Position {
    #[strategy(color())]
    turn: Color,
    #[strategy(zobrist())]
    pawns: Zobrist,
    #[strategy(zobrist())]
    minors: Zobrist,
    #[strategy([zobrist(), zobrist()])]
    non_pawns: [Zobrist; 2],
}

impl Fingerprint for Position {
    fn pawn_key(&self) -> Zobrist {
        self.pawns
    }

    fn minor_key(&self) -> Zobrist {
        self.minors
    }

    fn non_pawn_key(&self, c: Color) -> Zobrist {
        self.non_pawns[c.index()]
    }
}

#[derive(Debug, Copy, Clone, Arbitrary)]
struct Quiet {
    #[strategy(piece())]
    piece: Piece,
    #[strategy(square())]
    wc: Square,
    #[strategy(square())]
    wt: Square,
}

#[proptest]
fn quiet_move_histories_stay_bounded(
    pos: Position,
    prev: Quiet,
    #[strategy(vec(any::<(Quiet, i32)>(), 1..32))] updates: Vec<(Quiet, i32)>,
) {
    let mut h = Histories::new();
    let bucket = pos.pawn_index::<Normal>();

    for (m, bonus) in updates {
        h.butterfly.stat_mut((pos.turn.index(), m.wc, m.wt)).update(bonus);
        h.pawn.stat_mut((bucket, m.piece, m.wt)).update(bonus);
        let cont = h.continuation_mut(false, StatsType::NoCaptures);
        cont.reply_mut(prev.piece, prev.wt).stat_mut((m.piece, m.wt)).update(bonus);

        assert!(h.butterfly.stat((pos.turn.index(), m.wc, m.wt)).get().abs() <= 7183);
        assert!(h.pawn.stat((bucket, m.piece, m.wt)).get().abs() <= 8192);
        let cont = h.continuation(false, StatsType::NoCaptures);
        assert!(cont.reply(prev.piece, prev.wt).stat((m.piece, m.wt)).get().abs() <= 30000);
    }
}

#[proptest]
fn correction_histories_stay_bounded(
    pos: Position,
    #[strategy(vec(any::<i32>(), 1..32))] errors: Vec<i32>,
) {
    let mut h = Histories::new();
    let pawn = pos.pawn_index::<Correction>();
    let minor = pos.minor_index();

    for error in errors {
        h.pawn_correction.stat_mut((pawn, pos.turn)).update(error);
        h.minor_correction.stat_mut((minor, pos.turn)).update(error);

        for c in Color::iter() {
            let bucket = pos.non_pawn_index(c);
            h.non_pawn_correction.stat_mut((bucket, c, pos.turn)).update(error);
            assert!(h.non_pawn_correction.stat((bucket, c, pos.turn)).get().abs() <= 1024);
        }

        assert!(h.pawn_correction.stat((pawn, pos.turn)).get().abs() <= 1024);
        assert!(h.minor_correction.stat((minor, pos.turn)).get().abs() <= 1024);
    }
}

#[proptest]
fn positions_with_equal_low_pawn_bits_share_buckets(
    pos: Position,
    high: u64,
    #[strategy(1i32..=1024)] bonus: i32,
) {
    let mut h = Histories::new();
    let mut alias = pos.clone();
    alias.pawns = Zobrist::new((high << 15) | (pos.pawns.get() & 0x7FFF));

    let bucket = pos.pawn_index::<Correction>();
    h.pawn_correction.stat_mut((bucket, pos.turn)).update(bonus);

    let aliased = alias.pawn_index::<Correction>();
    assert_eq!(h.pawn_correction.stat((aliased, pos.turn)).get(), bonus as i16);
}

#[proptest]
fn knight_history_buckets_attacked_pieces(
    #[strategy(color())] c: Color,
    #[strategy(square())] wc: Square,
    #[strategy(bitboard())] theirs: Bitboard,
    #[strategy(1i32..=5000)] bonus: i32,
) {
    let mut h = Histories::new();
    let targets = Bitboard::knight(wc) & theirs;
    let bucket = knight_attack_index(targets, wc);
    h.knight.stat_mut((c, wc, bucket)).update(bonus);
    assert_eq!(h.knight.stat((c, wc, bucket)).get(), bonus as i16);
}

#[test]
fn capture_history_saturates_after_repeated_successes() {
    let mut h = Histories::new();
    let key = (Piece::WhiteKnight, Square::E5, Role::Queen);

    let mut last = 0;
    for _ in 0..64 {
        h.capture.stat_mut(key).update(2000);
        let value = h.capture.stat(key).get();
        assert!(value >= last);
        last = value;
    }

    assert!(last > 10000 && last <= 10692);
}

#[test]
fn histories_can_be_owned_by_worker_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let mut h = Histories::new();
                h.tt_move.update(1000 * (i + 1));
                h.tt_move.get()
            })
        })
        .collect();

    let values: Vec<_> = handles.into_iter().map(|t| t.join().unwrap()).collect();
    assert_eq!(values, [1000, 2000, 3000, 4000]);
}

#[test]
fn new_histories_are_zeroed() {
    let h = Histories::new();
    assert!(h.butterfly.as_flattened().iter().all(|s| s.get() == 0));
    assert!(h.low_ply.as_flattened().iter().all(|s| s.get() == 0));
    assert!(h.pawn_correction.as_flattened().iter().all(|s| s.get() == 0));
    assert!(h.knight.iter().flatten().flatten().all(|s| s.get() == 0));
    assert_eq!(h.tt_move.get(), 0);
}
