use bytemuck::Pod;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Marker trait for signed primitive integers that fit in an [`i32`].
pub trait Primitive:
    'static + Send + Sync + Copy + Default + Eq + Ord + Hash + Debug + Display + Pod + Into<i32>
{
    /// The maximum value as an [`i32`].
    const MAX: i32;

    /// Converts from an [`i32`], saturating at the bounds of `Self`.
    fn saturate(i: i32) -> Self;
}

macro_rules! impl_primitive_for {
    ($i: ty) => {
        impl Primitive for $i {
            const MAX: i32 = <$i>::MAX as i32;

            #[inline(always)]
            fn saturate(i: i32) -> Self {
                i.clamp(<$i>::MIN as i32, <$i>::MAX as i32) as $i
            }
        }
    };
}

impl_primitive_for!(i8);
impl_primitive_for!(i16);
impl_primitive_for!(i32);

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn saturate_is_identity_within_bounds(i: i16) {
        assert_eq!(<i16 as Primitive>::saturate(i.into()), i);
    }

    #[proptest]
    fn saturate_clamps_out_of_bounds(i: i32) {
        assert_eq!(<i8 as Primitive>::saturate(i), i.clamp(-128, 127) as i8);
    }
}
