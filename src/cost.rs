use core::fmt::{Debug, Display};
use core::ops::{Add, Sub};

use num_traits::{Float, Zero};

/// A trait representing the value type of a cost matrix entry.
///
/// Besides ordinary arithmetic a cost type reserves one value that marks a forbidden pairing. The
/// solver never reduces, adjusts or selects a forbidden cell.
///
/// Reduction and adjustment work in the cost type itself. For integers every difference between
/// two finite entries of a row or column must fit the type, otherwise solving fails with
/// [`Error::ArithmeticOverflow`](crate::Error::ArithmeticOverflow) even when the optimal total
/// would fit. Use `i64` for entries spanning more than half the `i32` range.
pub trait Cost:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Zero + Debug + Display + Default
{
    /// The value marking a pairing that must never be chosen.
    fn forbidden() -> Self;

    fn is_forbidden(&self) -> bool;

    /// Whether the value may appear in a cost matrix at all.
    fn is_admissible(&self) -> bool;

    /// Checked addition. Returns `None` on overflow or if the result would be indistinguishable
    /// from the forbidden value.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction, see [`Cost::try_add`].
    fn try_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_int_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn forbidden() -> Self {
                    <$t>::MAX
                }

                fn is_forbidden(&self) -> bool {
                    *self == <$t>::MAX
                }

                fn is_admissible(&self) -> bool {
                    true
                }

                fn try_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs).filter(|v| !v.is_forbidden())
                }

                fn try_sub(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs).filter(|v| !v.is_forbidden())
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn forbidden() -> Self {
                    <$t as Float>::infinity()
                }

                fn is_forbidden(&self) -> bool {
                    *self == <$t as Float>::infinity()
                }

                // NaN breaks every comparison and -inf would dominate every row minimum
                fn is_admissible(&self) -> bool {
                    !self.is_nan() && *self != <$t as Float>::neg_infinity()
                }

                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs).filter(|v| v.is_finite())
                }

                fn try_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs).filter(|v| v.is_finite())
                }
            }
        )*
    };
}

impl_int_cost!(i32, i64);
impl_float_cost!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_forbidden_is_max() {
        assert!(i32::forbidden().is_forbidden());
        assert!(!0i32.is_forbidden());
        assert_eq!(i64::forbidden(), i64::MAX);
    }

    #[test]
    fn integer_arithmetic_never_yields_forbidden() {
        assert_eq!((i32::MAX - 1).try_add(1), None);
        assert_eq!(i32::MIN.try_sub(1), None);
        assert_eq!(3i32.try_sub(5), Some(-2));
    }

    #[test]
    fn float_admissibility() {
        assert!(f64::INFINITY.is_admissible());
        assert!(f64::INFINITY.is_forbidden());
        assert!(!f64::NAN.is_admissible());
        assert!(!f64::NEG_INFINITY.is_admissible());
        assert!((-1.5f32).is_admissible());
    }

    #[test]
    fn float_overflow_is_detected() {
        assert_eq!(f64::MAX.try_add(f64::MAX), None);
        assert_eq!(1.5f64.try_add(0.5), Some(2.0));
    }
}
