use std::{fmt::Debug, ops::Add};

/// Edge weight and path distance.
///
/// Weights are integers. The "infinite" distance is not a value of this type
/// but the absence of one (`Option::None`), so the whole range of the integer
/// is available for real weights and nothing overflows into the sentinel.
pub trait Weight: Copy + Ord + Add<Self, Output = Self> + Debug {
    fn zero() -> Self;

    /// Length of a single hop, used by breadth-first search.
    fn one() -> Self;

    /// Addition that reports overflow instead of wrapping or panicking.
    fn checked_add(self, other: Self) -> Option<Self>;

    fn is_unsigned() -> bool;

    fn is_negative(&self) -> bool {
        !Self::is_unsigned() && *self < Self::zero()
    }
}

/// Compares a candidate distance with the current one where `None` stands for
/// infinity.
pub(crate) fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    match current {
        Some(current) => candidate < current,
        None => true,
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other)
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(Weight::checked_add(i32::MAX, 1), None);
        assert_eq!(Weight::checked_add(i32::MAX - 1, 1), Some(i32::MAX));
    }

    #[test]
    fn improves_infinite() {
        assert!(improves(i32::MAX, None));
        assert!(improves(-5, Some(0)));
        assert!(!improves(3, Some(3)));
    }

    #[test]
    fn negativity() {
        assert!((-1i32).is_negative());
        assert!(!0i32.is_negative());
        assert!(!7u8.is_negative());
    }
}
