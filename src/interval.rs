use crate::{
    arange::{self, Arange},
    error::Result,
    num::{Element, Promote},
    scale::Linear,
};
use num_traits::Zero;
use std::{fmt, ops::RangeInclusive};

/// A closed pair of bounds `[min, max]`.
///
/// No ordering is enforced: `min > max` is a valid, reversed interval. Scaling
/// maps orientation through unchanged and range generation counts downward
/// for reversed intervals.
///
/// # Examples
///
/// ```
/// use rangekit::Interval;
///
/// let iv = Interval::new(10, 0);
/// assert!(iv.contains(3));
/// assert_eq!(iv.ordered(), Interval::new(0, 10));
/// assert_eq!(iv.to_string(), "From: 10 To: 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Copy> Interval<T> {
    #[inline]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.min, self.max)
    }
}

impl<T: Copy + PartialOrd> Interval<T> {
    /// Returns `true` when both bounds are equal.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns the same interval with its bounds in ascending order.
    pub fn ordered(&self) -> Self {
        if self.min <= self.max {
            *self
        } else {
            Self::new(self.max, self.min)
        }
    }

    /// Inclusive membership test that ignores orientation.
    pub fn contains(&self, value: T) -> bool {
        let lo_hi = self.ordered();
        value >= lo_hi.min && value <= lo_hi.max
    }

    /// Grows the interval so that it covers `value`.
    pub fn include(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

impl<T: Element> Interval<T> {
    /// Distance from `value` to the nearest bound, zero when inside.
    ///
    /// The distance is returned in the working type, so it is exact even
    /// when it does not fit in `T`.
    ///
    /// ```
    /// use rangekit::Interval;
    ///
    /// let iv = Interval::new(2u32, 8);
    /// assert_eq!(iv.distance_from(5), 0);
    /// assert_eq!(iv.distance_from(0), 2);
    /// assert_eq!(iv.distance_from(11), 3);
    /// ```
    pub fn distance_from(&self, value: T) -> T::Work
    where
        T: Promote<T>,
    {
        let lo_hi = self.ordered();
        let (min, max, value) = (lo_hi.min.lift(), lo_hi.max.lift(), value.lift());
        if value < min {
            min - value
        } else if value > max {
            value - max
        } else {
            Zero::zero()
        }
    }

    /// Maps `value` from this interval onto `to`.
    pub fn scale<Out>(&self, value: T, to: &Interval<Out>) -> Result<Out>
    where
        T: Promote<Out>,
        Out: Element,
    {
        Ok(Linear::new(*self, *to)?.apply(value))
    }

    /// Maps every element of `values` from this interval onto `to`.
    pub fn scale_slice<Out>(&self, values: &[T], to: &Interval<Out>) -> Result<Vec<Out>>
    where
        T: Promote<Out>,
        Out: Element,
    {
        Ok(Linear::new(*self, *to)?.apply_slice(values))
    }

    /// Unit-step values from `min` toward `max`, see [`arange::arange`].
    pub fn arange(&self) -> Vec<T>
    where
        T: Promote<T>,
    {
        arange::arange(self.min, self.max)
    }

    /// Lazy form of [`Interval::arange`].
    pub fn arange_iter(&self) -> Arange<T>
    where
        T: Promote<T>,
    {
        arange::arange_iter(self.min, self.max)
    }

    /// Stepped values from `min` toward `max`, see [`arange::arange_step`].
    pub fn arange_step<S>(&self, step: S) -> Result<Vec<T>>
    where
        S: Promote<T>,
    {
        arange::arange_step(self.min, self.max, step)
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From: {} To: {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_orientation() {
        let forward = Interval::new(0.0, 10.0);
        let reversed = Interval::new(10.0, 0.0);

        for v in [0.0, 2.5, 10.0] {
            assert!(forward.contains(v));
            assert!(reversed.contains(v));
        }
        assert!(!forward.contains(-0.1));
        assert!(!reversed.contains(10.1));
    }

    #[test]
    fn test_include_grows_bounds() {
        let mut iv = Interval::new(3, 3);
        iv.include(7);
        iv.include(-2);
        iv.include(5);
        assert_eq!(iv.into_pair(), (-2, 7));
    }

    #[test]
    fn test_distance_from_signed() {
        let iv: Interval<i32> = Interval::new(-5, 5);
        assert_eq!(iv.distance_from(0), 0);
        assert_eq!(iv.distance_from(-9), 4);
        assert_eq!(iv.distance_from(6), 1);
    }

    #[test]
    fn test_distance_from_unsigned_below_min() {
        // Must not underflow on the side that is not violated.
        let iv = Interval::new(10u8, 20u8);
        assert_eq!(iv.distance_from(3), 7);
        assert_eq!(iv.distance_from(255), 235);
    }

    #[test]
    fn test_distance_from_signed_extremes() {
        let iv = Interval::new(100i8, 127);
        assert_eq!(iv.distance_from(-128), 228);

        let iv = Interval::new(i64::MIN, -1);
        assert_eq!(iv.distance_from(i64::MAX), i64::MAX as i128 + 1);
    }

    #[test]
    fn test_degenerate() {
        assert!(Interval::new(1.5, 1.5).is_degenerate());
        assert!(!Interval::new(1.5, 1.6).is_degenerate());
    }

    #[test]
    fn test_conversions() {
        let iv: Interval<i64> = (4, -4).into();
        assert_eq!(iv.min(), 4);
        assert_eq!(iv.max(), -4);

        let iv = Interval::from(1..=9);
        assert_eq!(iv.into_pair(), (1, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(0.5, 2.0).to_string(), "From: 0.5 To: 2");
    }

    #[test]
    fn test_scale_through_interval() {
        let from = Interval::new(0.0, 100.0);
        let to = Interval::new(0u8, 200u8);
        assert_eq!(from.scale(50.0, &to), Ok(100));
        assert_eq!(from.scale_slice(&[0.0, 25.0, 100.0], &to), Ok(vec![0, 50, 200]));
    }

    #[test]
    fn test_arange_through_interval() {
        let iv = Interval::new(2, 6);
        assert_eq!(iv.arange(), vec![2, 3, 4, 5]);
        assert_eq!(iv.arange_iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
        assert_eq!(iv.arange_step(3u8), Ok(vec![2, 5]));
    }
}
