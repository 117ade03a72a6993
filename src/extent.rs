//! Single-pass `(min, max)` scans over slices, jagged rows and matrices.

use crate::{
    error::{Error, Result},
    interval::Interval,
};
use log::debug;
use nalgebra::{Dim, Matrix, Scalar, Storage};

/// Direction of a per-dimension scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// One extent per column (dimension `0`).
    Columns,
    /// One extent per row (dimension `1`).
    Rows,
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(dimension: usize) -> Result<Self> {
        match dimension {
            0 => Ok(Axis::Columns),
            1 => Ok(Axis::Rows),
            other => Err(Error::InvalidDimension(other)),
        }
    }
}

fn fold_extent<T, I>(values: I) -> Option<Interval<T>>
where
    T: Copy + PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter();
    let first = values.next()?;
    let mut extent = Interval::new(first, first);
    for v in values {
        extent.include(v);
    }
    Some(extent)
}

fn require<T>(extent: Option<Interval<T>>) -> Result<Interval<T>> {
    extent.ok_or_else(|| {
        debug!("extent requested for an empty input");
        Error::EmptyInput
    })
}

/// Smallest and largest element of `values`.
///
/// ```
/// use rangekit::{get_range, Interval};
///
/// assert_eq!(get_range(&[3, -1, 7, 2]), Ok(Interval::new(-1, 7)));
/// ```
///
/// # Errors
///
/// [`Error::EmptyInput`] when `values` is empty.
pub fn get_range<T>(values: &[T]) -> Result<Interval<T>>
where
    T: Copy + PartialOrd,
{
    require(fold_extent(values.iter().copied()))
}

/// Extent over every element of a jagged grid.
pub fn get_range_rows<T, R>(rows: &[R]) -> Result<Interval<T>>
where
    T: Copy + PartialOrd,
    R: AsRef<[T]>,
{
    require(fold_extent(rows.iter().flat_map(|row| row.as_ref().iter().copied())))
}

/// Extent over every element of a matrix.
pub fn get_range_matrix<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Result<Interval<T>>
where
    T: Scalar + Copy + PartialOrd,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    require(fold_extent(matrix.iter().copied()))
}

/// One extent per column or per row of `matrix`.
///
/// ```
/// use nalgebra::DMatrix;
/// use rangekit::{get_range_along, Axis, Interval};
///
/// let m = DMatrix::from_row_slice(2, 2, &[1.0, 5.0, 4.0, 0.0]);
/// let columns = get_range_along(&m, Axis::Columns).unwrap();
/// assert_eq!(columns, vec![Interval::new(1.0, 4.0), Interval::new(0.0, 5.0)]);
/// ```
///
/// # Errors
///
/// [`Error::EmptyInput`] when the scanned lines are empty, i.e. the matrix
/// has columns but no rows (or the other way around).
pub fn get_range_along<T, R, C, S>(matrix: &Matrix<T, R, C, S>, axis: Axis) -> Result<Vec<Interval<T>>>
where
    T: Scalar + Copy + PartialOrd,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    match axis {
        Axis::Columns => matrix
            .column_iter()
            .map(|column| require(fold_extent(column.iter().copied())))
            .collect(),
        Axis::Rows => matrix
            .row_iter()
            .map(|row| require(fold_extent(row.iter().copied())))
            .collect(),
    }
}
