mod assume;
mod int;
mod primitive;

pub use assume::*;
pub use int::*;
pub use primitive::*;
