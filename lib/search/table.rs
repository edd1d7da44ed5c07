use crate::chess::{Piece, PieceTo, Square};
use crate::util::Int;
use bytemuck::{Zeroable, allocation::zeroed_box, write_zeroes};
use derive_more::with_trait::{Deref, DerefMut};
use std::any::type_name;
use std::fmt::{self, Debug, Formatter};

/// A fixed-shape table of statistics.
///
/// The shape `A` is usually a nested array of [`Graviton`][`crate::search::Graviton`]s. Tables
/// live on the heap and start out zeroed, they are never resized.
#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct Table<A>(Box<A>);

impl<A: Zeroable> Table<A> {
    /// Allocates a zeroed table.
    #[inline(always)]
    pub fn new() -> Self {
        log::debug!("allocating {} ({} bytes)", type_name::<A>(), size_of::<A>());
        Table(zeroed_box())
    }

    /// Zeroes every cell in place.
    #[inline(always)]
    pub fn clear(&mut self) {
        log::debug!("clearing {} ({} bytes)", type_name::<A>(), size_of::<A>());
        write_zeroes(&mut *self.0);
    }
}

impl<A: Zeroable> Default for Table<A> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debug for Table<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Table({} bytes)", size_of::<A>())
    }
}

impl<S> Table<PieceTo<S>> {
    /// The inner statistics that reply to a move of `piece` to `wt`.
    #[inline(always)]
    pub fn reply(&self, piece: Piece, wt: Square) -> &S {
        &self.0[piece.index()][wt.index()]
    }

    /// The mutable inner statistics that reply to a move of `piece` to `wt`.
    #[inline(always)]
    pub fn reply_mut(&mut self, piece: Piece, wt: Square) -> &mut S {
        &mut self.0[piece.index()][wt.index()]
    }
}
