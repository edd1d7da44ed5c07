mod bitboard;
mod color;
mod magic;
mod piece;
mod role;
mod square;
mod zobrist;

pub use bitboard::*;
pub use color::*;
pub use magic::*;
pub use piece::*;
pub use role::*;
pub use square::*;
pub use zobrist::*;

/// The butterfly board.
pub type Butterfly<T> = [T; 64 * 64];

/// The piece-to board.
pub type PieceTo<T> = [[T; 64]; 12];
