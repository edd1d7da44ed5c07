use crate::util::Int;
use derive_more::with_trait::{Display, Error};
use std::{ops::Not, str::FromStr};

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display("w")]
    White,
    #[display("b")]
    Black,
}

unsafe impl Int for Color {
    const MIN: u8 = Color::White as _;
    const MAX: u8 = Color::Black as _;
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<bool> for Color {
    #[inline(always)]
    fn from(b: bool) -> Self {
        Int::new(b as _)
    }
}

impl From<Color> for bool {
    #[inline(always)]
    fn from(c: Color) -> Self {
        c == Color::Black
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse color")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}
