use crate::chess::Bitboard;
use crate::util::Int;
use derive_more::with_trait::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A square on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Constructs [`Square`] from a pair of file and rank, both in `0..8`.
    #[inline(always)]
    pub fn new(file: u8, rank: u8) -> Self {
        Int::new(file | (rank << 3))
    }

    /// This square's file, in `0..8`.
    #[inline(always)]
    pub fn file(self) -> u8 {
        self.get() & 0b111
    }

    /// This square's rank, in `0..8`.
    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.get() >> 3
    }

    /// Returns a [`Bitboard`] that only contains this square.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.get())
    }
}

unsafe impl Int for Square {
    const MIN: u8 = Square::A1 as _;
    const MAX: u8 = Square::H8 as _;
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.file()).into())?;
        f.write_char((b'1' + self.rank()).into())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse square")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::new(f - b'a', r - b'1')),
            _ => Err(ParseSquareError),
        }
    }
}
