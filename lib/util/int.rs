use crate::util::Assume;
use std::{mem::transmute_copy, ops::RangeInclusive};

/// Trait for types that can be represented by a contiguous range of [`u8`]s.
///
/// # Safety
///
/// Must only be implemented for `#[repr(u8)]` types whose every value in
/// [`Int::MIN`]..=[`Int::MAX`] is a valid bit pattern.
pub unsafe trait Int: 'static + Send + Sync + Copy {
    /// The minimum repr.
    const MIN: u8;

    /// The maximum repr.
    const MAX: u8;

    /// The number of distinct values.
    const COUNT: usize = (Self::MAX - Self::MIN) as usize + 1;

    /// Casts from the primitive representation.
    #[track_caller]
    #[inline(always)]
    fn new(i: u8) -> Self {
        const { assert!(size_of::<Self>() == size_of::<u8>()) }
        (Self::MIN..=Self::MAX).contains(&i).assume();
        unsafe { transmute_copy(&i) }
    }

    /// Casts to the primitive representation.
    #[track_caller]
    #[inline(always)]
    fn get(self) -> u8 {
        let repr: u8 = unsafe { transmute_copy(&self) };
        (Self::MIN..=Self::MAX).contains(&repr).assume();
        repr
    }

    /// Converts from the primitive representation, if not out of range.
    #[inline(always)]
    fn convert(i: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&i)
            .then(|| Self::new(i))
    }

    /// This value as an index into an array of length [`Int::COUNT`].
    #[inline(always)]
    fn index(self) -> usize {
        (self.get() - Self::MIN) as usize
    }

    /// An iterator over all values in the range [`Int::MIN`]..=[`Int::MAX`].
    #[inline(always)]
    fn iter() -> Ints<Self> {
        Ints(Self::MIN..=Self::MAX, Default::default())
    }
}

/// An iterator over every value of an [`Int`].
#[derive(Debug, Clone)]
pub struct Ints<I>(RangeInclusive<u8>, std::marker::PhantomData<I>);

impl<I: Int> Iterator for Ints<I> {
    type Item = I;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        Some(I::new(self.0.next()?))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: Int> DoubleEndedIterator for Ints<I> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some(I::new(self.0.next_back()?))
    }
}

impl<I: Int> ExactSizeIterator for Ints<I> {}
