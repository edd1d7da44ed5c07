/// Chess domain types.
pub mod chess;
/// Search statistics.
pub mod search;
/// Assorted utilities.
pub mod util;
