//! Numeric range toolkit
//!
//! `rangekit` provides the small set of numeric utilities that sit underneath
//! plotting, optimisation and signal code: rescaling values between intervals,
//! generating `arange`-style sequences, and finding the extent of data.
//! Every algorithm is written once and works for every primitive numeric type
//! pair (and `fastnum` decimals with the `decimal` feature).
//!
//! # Core Concepts
//!
//! ## Scaling
//!
//! A [`Linear`] mapping takes values from a source [`Interval`] onto a target
//! interval. Source and target may use different types; the arithmetic runs in
//! a working type wide enough for both and the result is narrowed with the
//! target type's cast rules (see [`Promote`]).
//!
//! - [`scale`], [`scale_slice`], [`scale_into`], [`scale_in_place`] - explicit bounds
//! - [`scale_fit`], [`scale_fit_into`] - source bounds taken from the data
//!
//! ## Ranges
//!
//! [`arange`] and [`arange_step`] produce evenly spaced values from `a` toward
//! `b`, excluding `b`, counting downward when `a > b`. [`Arange`] is the lazy
//! form.
//!
//! ## Extents
//!
//! [`get_range`] and friends scan slices, jagged rows and `nalgebra`
//! matrices for their `(min, max)`.
//!
//! # Examples
//!
//! ## Scaling to Bytes
//!
//! ```rust
//! use rangekit::{scale, scale_fit};
//!
//! assert_eq!(scale(0.5f64, 0.0, 1.0, 0u8, 255u8), Ok(127));
//!
//! let bytes: Vec<u8> = scale_fit(&[-1.0, 0.0, 1.0], 0u8, 255u8).unwrap();
//! assert_eq!(bytes, vec![0, 127, 255]);
//! ```
//!
//! ## Reusing a Mapping
//!
//! ```rust
//! use rangekit::{Interval, Linear};
//!
//! let celsius = Interval::new(0.0, 100.0);
//! let fahrenheit = Interval::new(32.0, 212.0);
//! let to_f = Linear::new(celsius, fahrenheit).unwrap();
//!
//! assert_eq!(to_f.apply(100.0), 212.0);
//! assert_eq!(to_f.inverse().unwrap().apply(32.0), 0.0);
//! ```
//!
//! ## Generating Ranges
//!
//! ```rust
//! use rangekit::{arange, arange_step, arange_step_iter, Error};
//!
//! assert_eq!(arange(0, 5), vec![0, 1, 2, 3, 4]);
//! assert_eq!(arange_step(10, 0, 4), Ok(vec![10, 6, 2]));
//! assert_eq!(arange_step(0, 10, -1), Err(Error::StepAgainstDirection));
//!
//! for x in arange_step_iter(0.0, 1.0, 0.25).unwrap() {
//!     println!("sample at {x}");
//! }
//! ```
//!
//! ## Finding Extents
//!
//! ```rust
//! use rangekit::{get_range, Interval};
//!
//! assert_eq!(get_range(&[3.0, -1.5, 8.0]), Ok(Interval::new(-1.5, 8.0)));
//! ```
//!

pub mod arange;
pub mod error;
pub mod extent;
pub mod interval;
pub mod num;
pub mod scale;

#[cfg(feature = "decimal")]
pub use fastnum::decimal::D128;

pub use arange::{arange, arange_iter, arange_step, arange_step_iter, Arange};
pub use error::{Error, Result};
pub use extent::{get_range, get_range_along, get_range_matrix, get_range_rows, Axis};
pub use interval::Interval;
pub use num::{Element, Promote, Working};
pub use scale::{scale, scale_fit, scale_fit_into, scale_in_place, scale_into, scale_slice, Linear};
