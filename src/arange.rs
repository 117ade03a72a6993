//! `arange`-style generation of evenly spaced values.
//!
//! Ranges run from `a` toward `b` and exclude `b`, counting downward when
//! `a > b`. A stepped range has `ceil(|b - a| / |step|)` elements; if the last
//! of them would land beyond `b` it is replaced by `b` itself.
//!
//! ```
//! use rangekit::{arange, arange_step};
//!
//! assert_eq!(arange(0, 5), vec![0, 1, 2, 3, 4]);
//! assert_eq!(arange(5, 0), vec![5, 4, 3, 2, 1]);
//! assert_eq!(arange_step(0, 10, 3), Ok(vec![0, 3, 6, 9]));
//! assert_eq!(arange_step(0.0, 1.0, 0.25), Ok(vec![0.0, 0.25, 0.5, 0.75]));
//! ```

use crate::{
    error::{Error, Result},
    num::{Element, Promote, Working},
};
use log::debug;
use num_traits::{NumCast, ToPrimitive, Zero};
use std::{iter::FusedIterator, marker::PhantomData};

/// Lazy sequence of evenly spaced values of `T`, stepping by an `S`.
///
/// Each element is computed from its index rather than by accumulating the
/// step, so long float ranges do not drift. Cloning yields an independent
/// cursor; nothing is shared between iterators.
#[derive(Debug, Clone)]
pub struct Arange<T, S = T>
where
    T: Element,
    S: Promote<T>,
{
    state: ArangeState<S::Work>,
    _marker: PhantomData<fn(S) -> T>,
}

#[derive(Debug, Clone)]
enum ArangeState<W> {
    Ready(Sweep<W>),
    Exhausted,
}

#[derive(Debug, Clone)]
struct Sweep<W> {
    start: W,
    step: W,
    bound: W,
    len: usize,
    front: usize,
    back: usize,
}

impl<W: Working> Sweep<W> {
    fn at(&self, index: usize) -> Option<W> {
        let offset: W = NumCast::from(index)?;
        let value = self.start + self.step * offset;
        if index + 1 == self.len {
            Some(self.clamp_last(value))
        } else {
            Some(value)
        }
    }

    fn clamp_last(&self, value: W) -> W {
        let zero = W::zero();
        if (self.step > zero && value > self.bound) || (self.step < zero && value < self.bound) {
            self.bound
        } else {
            value
        }
    }
}

impl<T, S> Arange<T, S>
where
    T: Element,
    S: Promote<T>,
{
    /// Creates a range from `a` toward `b` with spacing `step`.
    ///
    /// Descending ranges use `|step|`, so the sign of the step only matters
    /// for ascending ranges.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroStep`] when `step` is zero
    /// - [`Error::StepAgainstDirection`] when `a < b` and `step` is negative
    /// - [`Error::UnrepresentableLength`] when the element count is not a
    ///   finite `usize`, e.g. for NaN or infinite inputs
    pub fn new(a: T, b: T, step: S) -> Result<Self> {
        let step = step.lift();
        let zero = <S::Work as Zero>::zero();
        if step == zero {
            debug!("rejecting zero step for range {:?}..{:?}", a, b);
            return Err(Error::ZeroStep);
        }

        let start = S::lift_out(a);
        let bound = S::lift_out(b);
        if start < bound && step < zero {
            debug!("rejecting step {:?} for ascending range {:?}..{:?}", step, a, b);
            return Err(Error::StepAgainstDirection);
        }
        if start == bound {
            return Ok(Self::exhausted());
        }

        let stride = step.magnitude();
        let len = (bound - start)
            .magnitude()
            .ceil_quotient(stride)
            .to_usize()
            .ok_or(Error::UnrepresentableLength)?;
        let step = if start < bound { stride } else { zero - stride };

        Ok(Self {
            state: ArangeState::Ready(Sweep {
                start,
                step,
                bound,
                len,
                front: 0,
                back: len,
            }),
            _marker: PhantomData,
        })
    }

    fn exhausted() -> Self {
        Self {
            state: ArangeState::Exhausted,
            _marker: PhantomData,
        }
    }
}

impl<T> Arange<T>
where
    T: Promote<T>,
{
    /// Creates a unit-step range from `a` toward `b`.
    ///
    /// Bounds that do not yield a finite count (NaN, infinities) produce an
    /// empty range.
    pub fn unit(a: T, b: T) -> Self {
        Self::new(a, b, T::one()).unwrap_or_else(|_| Self::exhausted())
    }
}

impl<T, S> Iterator for Arange<T, S>
where
    T: Element,
    S: Promote<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let ArangeState::Ready(sweep) = &mut self.state else {
            return None;
        };
        if sweep.front == sweep.back {
            self.state = ArangeState::Exhausted;
            return None;
        }

        let value = sweep.at(sweep.front);
        sweep.front += 1;
        match value {
            Some(v) => Some(S::lower(v)),
            None => {
                self.state = ArangeState::Exhausted;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.state {
            ArangeState::Ready(sweep) => sweep.back - sweep.front,
            ArangeState::Exhausted => 0,
        };
        (n, Some(n))
    }
}

impl<T, S> DoubleEndedIterator for Arange<T, S>
where
    T: Element,
    S: Promote<T>,
{
    fn next_back(&mut self) -> Option<T> {
        let ArangeState::Ready(sweep) = &mut self.state else {
            return None;
        };
        if sweep.front == sweep.back {
            self.state = ArangeState::Exhausted;
            return None;
        }

        sweep.back -= 1;
        match sweep.at(sweep.back) {
            Some(v) => Some(S::lower(v)),
            None => {
                self.state = ArangeState::Exhausted;
                None
            }
        }
    }
}

impl<T, S> ExactSizeIterator for Arange<T, S>
where
    T: Element,
    S: Promote<T>,
{
}

impl<T, S> FusedIterator for Arange<T, S>
where
    T: Element,
    S: Promote<T>,
{
}

/// Unit-step values from `a` toward `b`, excluding `b`.
pub fn arange<T>(a: T, b: T) -> Vec<T>
where
    T: Promote<T>,
{
    Arange::unit(a, b).collect()
}

/// Lazy form of [`arange`].
pub fn arange_iter<T>(a: T, b: T) -> Arange<T>
where
    T: Promote<T>,
{
    Arange::unit(a, b)
}

/// Values from `a` toward `b` spaced by `step`, see [`Arange::new`].
pub fn arange_step<T, S>(a: T, b: T, step: S) -> Result<Vec<T>>
where
    T: Element,
    S: Promote<T>,
{
    Ok(Arange::new(a, b, step)?.collect())
}

/// Lazy form of [`arange_step`].
pub fn arange_step_iter<T, S>(a: T, b: T, step: S) -> Result<Arange<T, S>>
where
    T: Element,
    S: Promote<T>,
{
    Arange::new(a, b, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_ascending_and_descending() {
        assert_eq!(arange(0, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(arange(5, 0), vec![5, 4, 3, 2, 1]);
        assert_eq!(arange(-2i8, 2), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_unit_empty_when_bounds_equal() {
        assert!(arange(7u32, 7).is_empty());
        assert!(arange(1.5f64, 1.5).is_empty());
    }

    #[test]
    fn test_unit_float_rounds_count_up() {
        assert_eq!(arange(0.5f64, 3.0), vec![0.5, 1.5, 2.5]);
        assert_eq!(arange(3.0f32, 0.5), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_unit_unsigned_descending_to_zero() {
        assert_eq!(arange(3u8, 0), vec![3, 2, 1]);
    }

    #[test]
    fn test_unit_full_byte_range() {
        let all = arange(i8::MIN, i8::MAX);
        assert_eq!(all.len(), 255);
        assert_eq!(all.first(), Some(&i8::MIN));
        assert_eq!(all.last(), Some(&(i8::MAX - 1)));
    }

    #[test]
    fn test_unit_nan_bounds_are_empty() {
        assert!(arange(f64::NAN, 3.0).is_empty());
        assert!(arange(0.0, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_step_counts() {
        assert_eq!(arange_step(0, 10, 3), Ok(vec![0, 3, 6, 9]));
        assert_eq!(arange_step(0, 10, 4), Ok(vec![0, 4, 8]));
        assert_eq!(arange_step(0, 10, 5), Ok(vec![0, 5]));
    }

    #[test]
    fn test_step_descending_ignores_sign() {
        assert_eq!(arange_step(10, 0, 4), Ok(vec![10, 6, 2]));
        assert_eq!(arange_step(10, 0, -4), Ok(vec![10, 6, 2]));
    }

    #[test]
    fn test_step_errors() {
        assert_eq!(arange_step(0, 10, 0), Err(Error::ZeroStep));
        assert_eq!(arange_step(0, 10, -1), Err(Error::StepAgainstDirection));
        assert_eq!(arange_step(3, 3, 0), Err(Error::ZeroStep));
        assert_eq!(arange_step(0.0, 1.0, f64::NAN), Err(Error::UnrepresentableLength));
    }

    #[test]
    fn test_step_equal_bounds_is_empty() {
        assert_eq!(arange_step(4, 4, 2), Ok(vec![]));
        assert_eq!(arange_step(4, 4, -2), Ok(vec![]));
    }

    #[test]
    fn test_step_of_other_type() {
        // Float step over an integer range truncates each element.
        assert_eq!(arange_step(0i32, 10, 2.5f64), Ok(vec![0, 2, 5, 7]));
        // Integer step over a float range.
        assert_eq!(arange_step(0.5f64, 4.0, 2u8), Ok(vec![0.5, 2.5]));
    }

    #[test]
    fn test_float_step_no_drift() {
        let values = arange_step(0.0f64, 1.0, 0.1).unwrap();
        assert_eq!(values.len(), 10);
        assert_eq!(values[7], 0.1 * 7.0);
    }

    #[test]
    fn test_last_element_is_clamped_to_bound() {
        let sweep = Sweep {
            start: 0i128,
            step: 4,
            bound: 10,
            len: 4,
            front: 0,
            back: 4,
        };
        assert_eq!(sweep.at(2), Some(8));
        assert_eq!(sweep.at(3), Some(10));

        let descending = Sweep {
            start: 1.0f64,
            step: -0.6,
            bound: 0.0,
            len: 3,
            front: 0,
            back: 3,
        };
        assert_eq!(descending.at(2), Some(0.0));
    }

    #[test]
    fn test_rounded_up_count_clamps_to_bound() {
        // (0.9 - 0.3) / 0.1 rounds to just above 6, so a seventh element is
        // counted and 0.3 + 0.1 * 6 overshoots the bound.
        let values = arange_step(0.3f64, 0.9, 0.1).unwrap();
        assert_eq!(values.len(), 7);
        assert_eq!(values.last(), Some(&0.9));
        assert!(values.iter().all(|&v| v <= 0.9));

        let down = arange_step(0.4f64, 0.1, 0.1).unwrap();
        assert_eq!(down.len(), 4);
        assert_eq!(down.last(), Some(&0.1));
        assert_eq!(arange_step_iter(0.4f64, 0.1, 0.1).unwrap().next_back(), Some(0.1));
    }

    #[test]
    fn test_lazy_matches_eager() {
        let lazy: Vec<i64> = arange_step_iter(-7, 20, 6).unwrap().collect();
        assert_eq!(lazy, arange_step(-7, 20, 6).unwrap());
    }

    #[test]
    fn test_lazy_invocations_are_independent() {
        let mut first = arange_iter(0, 3);
        let mut second = arange_iter(0, 3);

        assert_eq!(first.next(), Some(0));
        assert_eq!(first.next(), Some(1));
        assert_eq!(second.next(), Some(0));
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.next(), None);
        assert_eq!(first.next(), None);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_lazy_exact_size_and_reverse() {
        let mut iter = arange_iter(0u16, 5);
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
