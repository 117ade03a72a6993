use crate::{
    error::{Error, Result},
    interval::Interval,
    num::{Element, Promote, Working},
};
use log::{debug, trace};

/// Linear mapping from a source interval onto a target interval.
///
/// `Linear` evaluates
///
/// ```text
/// (to_max - to_min) * (value - from_min) / (from_max - from_min) + to_min
/// ```
///
/// in the working type chosen by [`Promote`] and narrows the result into
/// `Out` afterwards. The bounds are lifted once at construction, so mapping a
/// slice costs a single pass with no per-element conversions of the bounds.
///
/// # Type Parameters
///
/// - `In`: Source element type
/// - `Out`: Target element type
///
/// # Features
///
/// - **Mixed types**: any primitive pair, e.g. `f64` samples into `u8` pixels
/// - **Reversed intervals**: either side may have `min > max`
/// - **No clamping**: values outside the source map beyond the target
/// - **Integer semantics**: integer pairs divide before adding `to_min`, so
///   the quotient truncates toward zero first
///
/// # Degenerate Intervals
///
/// When all four bounds are equal the mapping is the identity and every value
/// is passed through with a plain cast. A source that collapses to a point
/// while the target does not has no linear mapping; construction fails with
/// [`Error::DegenerateSource`].
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use rangekit::{Interval, Linear};
///
/// let map = Linear::new(Interval::new(0.0, 100.0), Interval::new(0.0, 1.0)).unwrap();
///
/// assert_eq!(map.apply(0.0), 0.0);
/// assert_eq!(map.apply(50.0), 0.5);
/// assert_eq!(map.apply(150.0), 1.5);
/// ```
///
/// ## Mixed Type Precision
///
/// ```rust
/// use rangekit::Linear;
///
/// let to_byte = Linear::from_bounds(-1.0f64, 1.0, 0u8, 255u8).unwrap();
/// assert_eq!(to_byte.apply_slice(&[-1.0, 0.0, 1.0]), vec![0, 127, 255]);
/// ```
///
/// ## Reversed Target
///
/// ```rust
/// use rangekit::Linear;
///
/// let flip = Linear::from_bounds(0, 10, 10, 0).unwrap();
/// assert_eq!(flip.apply(0), 10);
/// assert_eq!(flip.apply(3), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Linear<In, Out>
where
    In: Promote<Out>,
    Out: Element,
{
    source: Interval<In>,
    target: Interval<Out>,
    from_min: In::Work,
    from_span: In::Work,
    to_min: In::Work,
    to_span: In::Work,
    passthrough: bool,
}

impl<In, Out> Linear<In, Out>
where
    In: Promote<Out>,
    Out: Element,
{
    /// Creates a mapping from `source` onto `target`.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateSource`] when `source.min() == source.max()` unless
    /// both target bounds equal that same value.
    pub fn new(source: Interval<In>, target: Interval<Out>) -> Result<Self> {
        let from_min = source.min().lift();
        let from_max = source.max().lift();
        let to_min = In::lift_out(target.min());
        let to_max = In::lift_out(target.max());

        let passthrough = from_min == from_max && from_min == to_min && from_min == to_max;
        if passthrough {
            trace!("all bounds equal {:?}, mapping passes values through", from_min);
        } else if from_min == from_max {
            debug!(
                "rejecting degenerate source {:?} for target {:?}",
                source, target
            );
            return Err(Error::DegenerateSource);
        }

        Ok(Self {
            source,
            target,
            from_min,
            from_span: from_max - from_min,
            to_min,
            to_span: to_max - to_min,
            passthrough,
        })
    }

    /// Creates a mapping from four scalar bounds.
    pub fn from_bounds(from_min: In, from_max: In, to_min: Out, to_max: Out) -> Result<Self> {
        Self::new(Interval::new(from_min, from_max), Interval::new(to_min, to_max))
    }

    pub fn source(&self) -> Interval<In> {
        self.source
    }

    pub fn target(&self) -> Interval<Out> {
        self.target
    }

    /// Returns `true` when all four bounds coincide.
    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    /// Maps a single value.
    #[inline]
    pub fn apply(&self, value: In) -> Out {
        let value = value.lift();
        if self.passthrough {
            return In::lower(value);
        }
        In::lower((value - self.from_min).mul_div_add(self.to_span, self.from_span, self.to_min))
    }

    /// Maps every element into a freshly allocated vector.
    pub fn apply_slice(&self, values: &[In]) -> Vec<Out> {
        values.iter().map(|&v| self.apply(v)).collect()
    }

    /// Maps every element into the front of `result` and returns it.
    ///
    /// Elements of `result` past `values.len()` are left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] when `result` is shorter than `values`;
    /// nothing is written in that case.
    pub fn apply_into<'a>(&self, values: &[In], result: &'a mut [Out]) -> Result<&'a mut [Out]> {
        if result.len() < values.len() {
            return Err(Error::BufferTooSmall {
                required: values.len(),
                actual: result.len(),
            });
        }
        for (slot, &v) in result.iter_mut().zip(values) {
            *slot = self.apply(v);
        }
        Ok(result)
    }

    /// Builds the mapping from the target back onto the source.
    pub fn inverse(&self) -> Result<Linear<Out, In>>
    where
        Out: Promote<In>,
    {
        Linear::new(self.target, self.source)
    }
}

impl<T> Linear<T, T>
where
    T: Promote<T>,
{
    /// Maps every element of `values` in place.
    pub fn apply_in_place(&self, values: &mut [T]) {
        for v in values.iter_mut() {
            *v = self.apply(*v);
        }
    }
}
