use std::hint::assert_unchecked;

/// A trait for types that can be assumed to be another type.
pub trait Assume {
    /// The type of the assumed value.
    type Assumed;
    /// Assume `Self` represents a value of `Self::Assumed`.
    fn assume(self) -> Self::Assumed;
}

impl Assume for bool {
    type Assumed = ();

    #[track_caller]
    #[inline(always)]
    fn assume(self) -> Self::Assumed {
        debug_assert!(self);
        unsafe { assert_unchecked(self) }
    }
}

impl<T> Assume for Option<T> {
    type Assumed = T;

    #[track_caller]
    #[inline(always)]
    fn assume(self) -> Self::Assumed {
        debug_assert!(self.is_some());
        unsafe { self.unwrap_unchecked() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn assuming_some_yields_the_inner_value(v: u64) {
        assert_eq!(Some(v).assume(), v);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn assuming_false_panics_in_debug_builds() {
        false.assume();
    }
}
