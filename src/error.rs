//! Errors returned by the fenwick trees when called with indices outside their bounds.

use std::fmt;

/// A violated index precondition. Returned before anything is mutated,
/// so the tree is unchanged after an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenwickError {
    /// `index` is not in `min..=max`.
    IndexOutOfBounds {
        index: usize,
        min: usize,
        max: usize,
    },
    /// A range whose start lies after its end.
    InvalidRange { start: usize, end: usize },
}

impl fmt::Display for FenwickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, min, max } if min > max => {
                write!(f, "index {index} is out of bounds of an empty fenwick tree")
            }
            Self::IndexOutOfBounds { index, min, max } => {
                write!(f, "index {index} is out of bounds {min}..={max}")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "start of range {start} is bigger than end of range {end}")
            }
        }
    }
}

impl std::error::Error for FenwickError {}

pub type Result<T> = std::result::Result<T, FenwickError>;
