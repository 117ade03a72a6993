//! Numeric traits shared by scaling and range generation.
//!
//! Every algorithm in this crate is written once against these traits. The
//! concrete behaviour of a source/target pair (which type the arithmetic runs
//! in and how the result is narrowed) lives in the [`Promote`] impls below.

use num_traits::{Num, NumCast};
use std::fmt::Debug;

/// A numeric value that can flow through the crate's algorithms.
pub trait Element: Copy + PartialOrd + Num + NumCast + Debug {}

/// A type wide enough to carry intermediate results.
///
/// `i128` is a working type only and never an input or output.
pub trait Working: Copy + PartialOrd + Num + NumCast + Debug {
    /// Absolute value.
    fn magnitude(self) -> Self;

    /// `ceil(self / rhs)` for non-negative operands.
    ///
    /// Integer working types must round up here; plain division would
    /// truncate the step count.
    fn ceil_quotient(self, rhs: Self) -> Self;

    /// `self * mul / div + add`.
    ///
    /// Integer working types truncate the quotient toward zero before `add`
    /// and must not overflow in the product. The final sum wraps.
    fn mul_div_add(self, mul: Self, div: Self, add: Self) -> Self;
}

/// Describes how values of `Self` are mapped into `Out`.
///
/// Arithmetic runs in [`Promote::Work`] and the result is narrowed with
/// [`Promote::lower`], which follows the output type's `as` cast rules:
/// integer narrowing wraps, float to integer truncates toward zero.
///
/// | Pair | Work |
/// |---|---|
/// | integer, integer | `i128` |
/// | `f32`, `f32` | `f32` |
/// | any other pair with a float | `f64` |
pub trait Promote<Out: Element>: Element {
    type Work: Working;

    fn lift(self) -> Self::Work;

    fn lift_out(value: Out) -> Self::Work;

    fn lower(work: Self::Work) -> Out;
}

macro_rules! element {
    ($($t:ty),*) => {
        $(impl Element for $t {})*
    };
}

element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Working for i128 {
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    #[inline]
    fn ceil_quotient(self, rhs: Self) -> Self {
        let quotient = self / rhs;
        if quotient * rhs < self {
            quotient + 1
        } else {
            quotient
        }
    }

    fn mul_div_add(self, mul: Self, div: Self, add: Self) -> Self {
        if let Some(quotient) = self.checked_mul(mul).and_then(|p| p.checked_div(div)) {
            return quotient.wrapping_add(add);
        }

        // Operands are differences of 64-bit values, so their magnitudes
        // multiply within u128. The result is exact modulo 2^128, which is
        // all a narrowing cast to a 64-bit output observes.
        let negative = (self < 0) ^ (mul < 0) ^ (div < 0);
        let magnitude = self
            .unsigned_abs()
            .wrapping_mul(mul.unsigned_abs())
            .checked_div(div.unsigned_abs())
            .unwrap_or(0) as i128;
        let quotient = if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };
        quotient.wrapping_add(add)
    }
}

macro_rules! working_float {
    ($($t:ty),*) => {
        $(
            impl Working for $t {
                #[inline]
                fn magnitude(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn ceil_quotient(self, rhs: Self) -> Self {
                    (self / rhs).ceil()
                }

                #[inline]
                fn mul_div_add(self, mul: Self, div: Self, add: Self) -> Self {
                    mul * self / div + add
                }
            }
        )*
    };
}

working_float!(f32, f64);

macro_rules! promote {
    (@row $work:ty, $from:ty, [$($to:ty),*]) => {
        $(
            impl Promote<$to> for $from {
                type Work = $work;

                #[inline]
                fn lift(self) -> $work {
                    self as $work
                }

                #[inline]
                fn lift_out(value: $to) -> $work {
                    value as $work
                }

                #[inline]
                fn lower(work: $work) -> $to {
                    work as $to
                }
            }
        )*
    };
    ($work:ty => [$($from:ty),*] x $to:tt) => {
        $(promote!(@row $work, $from, $to);)*
    };
}

promote!(i128 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
    x [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
promote!(f32 => [f32] x [f32]);
promote!(f64 => [f64] x [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64]);
promote!(f64 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32] x [f64]);
promote!(f64 => [f32] x [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]);
promote!(f64 => [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize] x [f32]);

#[cfg(feature = "decimal")]
mod decimal {
    use super::{Element, Promote, Working};
    use fastnum::decimal::D128;
    use num_traits::Float;

    impl Element for D128 {}

    impl Working for D128 {
        fn magnitude(self) -> Self {
            Float::abs(self)
        }

        fn ceil_quotient(self, rhs: Self) -> Self {
            Float::ceil(self / rhs)
        }

        fn mul_div_add(self, mul: Self, div: Self, add: Self) -> Self {
            mul * self / div + add
        }
    }

    impl Promote<D128> for D128 {
        type Work = D128;

        fn lift(self) -> D128 {
            self
        }

        fn lift_out(value: D128) -> D128 {
            value
        }

        fn lower(work: D128) -> D128 {
            work
        }
    }
}
