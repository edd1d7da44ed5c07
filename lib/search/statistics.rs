use crate::util::Primitive;
use bytemuck::Zeroable;
use derive_more::with_trait::Debug;

/// A trait for types that record statistics addressed by a key.
pub trait Statistics<K> {
    /// The stat type.
    type Stat: Stat;

    /// The [`Self::Stat`] addressed by `key`.
    fn stat(&self, key: K) -> &Self::Stat;

    /// The mutable [`Self::Stat`] addressed by `key`.
    fn stat_mut(&mut self, key: K) -> &mut Self::Stat;
}

/// A trait for statistics counters.
pub trait Stat {
    /// The value type.
    type Value: Primitive;

    /// Returns the current [`Self::Value`].
    fn get(&self) -> Self::Value;

    /// Accumulates a bonus into the current [`Self::Value`].
    fn update(&mut self, bonus: i32);
}

impl<T: Stat> Stat for &mut T {
    type Value = T::Value;

    #[inline(always)]
    fn get(&self) -> Self::Value {
        (**self).get()
    }

    #[inline(always)]
    fn update(&mut self, bonus: i32) {
        (**self).update(bonus);
    }
}

impl<T: Stat> Stat for Option<T> {
    type Value = T::Value;

    #[inline(always)]
    fn get(&self) -> Self::Value {
        self.as_ref().map_or_else(Default::default, Stat::get)
    }

    #[inline(always)]
    fn update(&mut self, bonus: i32) {
        if let Some(s) = self {
            s.update(bonus);
        }
    }
}

/// A counter that gravitates towards the bonuses it is updated with.
///
/// The value is always within `-D..=D`. Each update pulls it towards the bonus, clamped to the
/// same range, with a strength proportional to the magnitude of the bonus, so repeated bonuses of
/// the same sign approach the bound asymptotically and never overshoot it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Graviton<T, const D: i32>(T);

unsafe impl<T: Zeroable, const D: i32> Zeroable for Graviton<T, D> {}

impl<T: Primitive, const D: i32> Graviton<T, D> {
    /// The bound on the absolute value.
    pub const LIMIT: i32 = {
        assert!(D > 0, "the bound must be positive");
        assert!(D <= T::MAX, "the bound overflows the storage type");
        D
    };

    /// Overwrites the current value.
    ///
    /// Meant for initialization, the value is not checked against [`Self::LIMIT`].
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.0 = value;
    }
}

impl<T: Primitive, const D: i32> Stat for Graviton<T, D> {
    type Value = T;

    #[inline(always)]
    fn get(&self) -> Self::Value {
        self.0
    }

    #[inline(always)]
    fn update(&mut self, bonus: i32) {
        let limit = Self::LIMIT;
        let bonus = i64::from(bonus.clamp(-limit, limit));
        let value: i32 = self.0.into();
        let value = i64::from(value);
        let value = value + bonus - value * bonus.abs() / i64::from(limit);
        debug_assert!(value.abs() <= i64::from(limit), "{value} out of -{limit}..={limit}");
        self.0 = T::saturate(value as i32);
    }
}
