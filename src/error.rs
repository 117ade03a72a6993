use thiserror::Error;

/// Errors raised by scaling, range generation and extent scanning.
///
/// Every check runs before any output is produced, so a failed call never
/// leaves a partially written result behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("step size must not be zero")]
    ZeroStep,
    #[error("step size must be positive for an ascending range")]
    StepAgainstDirection,
    #[error("cannot compute the extent of an empty input")]
    EmptyInput,
    #[error("source interval collapses to a single point but the target interval does not")]
    DegenerateSource,
    #[error("result buffer holds {actual} elements but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("dimension {0} is not valid, expected 0 (columns) or 1 (rows)")]
    InvalidDimension(usize),
    #[error("range length is not a finite element count")]
    UnrepresentableLength,
}

pub type Result<T> = std::result::Result<T, Error>;
