//! Linear rescaling of values and slices between intervals.
//!
//! The free functions here cover the usual call shapes; each one builds a
//! [`Linear`] mapping and hands the work to it. Build a [`Linear`] directly
//! when the same bounds are applied repeatedly.

use crate::{
    error::Result,
    extent::get_range,
    interval::Interval,
    num::{Element, Promote},
};

pub mod linear;

pub use linear::Linear;

/// Maps `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// ```
/// use rangekit::scale;
///
/// assert_eq!(scale(5, 0, 10, 0u8, 255u8), Ok(127));
/// assert_eq!(scale(0.25, 0.0, 1.0, -1.0, 1.0), Ok(-0.5));
/// ```
pub fn scale<In, Out>(value: In, from_min: In, from_max: In, to_min: Out, to_max: Out) -> Result<Out>
where
    In: Promote<Out>,
    Out: Element,
{
    Ok(Linear::from_bounds(from_min, from_max, to_min, to_max)?.apply(value))
}

/// Maps every element of `values` into a new vector.
pub fn scale_slice<In, Out>(
    values: &[In],
    from_min: In,
    from_max: In,
    to_min: Out,
    to_max: Out,
) -> Result<Vec<Out>>
where
    In: Promote<Out>,
    Out: Element,
{
    Ok(Linear::from_bounds(from_min, from_max, to_min, to_max)?.apply_slice(values))
}

/// Maps every element of `values` into the front of `result`.
pub fn scale_into<'a, In, Out>(
    values: &[In],
    from_min: In,
    from_max: In,
    to_min: Out,
    to_max: Out,
    result: &'a mut [Out],
) -> Result<&'a mut [Out]>
where
    In: Promote<Out>,
    Out: Element,
{
    Linear::from_bounds(from_min, from_max, to_min, to_max)?.apply_into(values, result)
}

/// Maps every element of `values` in place.
pub fn scale_in_place<T>(values: &mut [T], from_min: T, from_max: T, to_min: T, to_max: T) -> Result<()>
where
    T: Promote<T>,
{
    Linear::from_bounds(from_min, from_max, to_min, to_max)?.apply_in_place(values);
    Ok(())
}

/// Maps `values` onto `[to_min, to_max]`, using their own extent as source.
///
/// One pass finds the extent, a second pass maps.
///
/// ```
/// use rangekit::scale_fit;
///
/// let unit = scale_fit(&[2.0, 4.0, 6.0], 0.0, 1.0).unwrap();
/// assert_eq!(unit, vec![0.0, 0.5, 1.0]);
/// ```
pub fn scale_fit<In, Out>(values: &[In], to_min: Out, to_max: Out) -> Result<Vec<Out>>
where
    In: Promote<Out>,
    Out: Element,
{
    Ok(fit(values, to_min, to_max)?.apply_slice(values))
}

/// Like [`scale_fit`], writing into `result`.
pub fn scale_fit_into<'a, In, Out>(
    values: &[In],
    to_min: Out,
    to_max: Out,
    result: &'a mut [Out],
) -> Result<&'a mut [Out]>
where
    In: Promote<Out>,
    Out: Element,
{
    fit(values, to_min, to_max)?.apply_into(values, result)
}

fn fit<In, Out>(values: &[In], to_min: Out, to_max: Out) -> Result<Linear<In, Out>>
where
    In: Promote<Out>,
    Out: Element,
{
    Linear::new(get_range(values)?, Interval::new(to_min, to_max))
}
