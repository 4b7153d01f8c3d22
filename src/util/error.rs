//! Error types for voxmatch.

use crate::volume::{Dims, Layout};
use thiserror::Error;

/// Result alias for voxmatch operations.
pub type VoxMatchResult<T> = std::result::Result<T, VoxMatchError>;

/// Spatial axis of a volume, used to report which bound was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when validating or matching volumes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VoxMatchError {
    /// A dimension is zero or the cell count overflows `usize`.
    #[error("invalid dimensions {width}x{height}x{length}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        length: usize,
    },
    /// A buffer length does not equal the product of its dimensions.
    #[error("{buffer} buffer has {got} cells, expected {needed}")]
    BufferSizeMismatch {
        buffer: &'static str,
        needed: usize,
        got: usize,
    },
    /// A buffer has the right kind but the wrong 3D extent.
    #[error("{buffer} has shape {got}, expected {expected}")]
    ShapeMismatch {
        buffer: &'static str,
        expected: Dims,
        got: Dims,
    },
    /// A view is linearized with a different convention than the operation reads.
    #[error("{buffer} uses {got:?} layout, expected {expected:?}")]
    LayoutMismatch {
        buffer: &'static str,
        expected: Layout,
        got: Layout,
    },
    /// The pattern extent at the given offset leaves the grid along `axis`.
    #[error("placement {offset}+{extent} exceeds grid extent {grid_extent} on the {axis} axis")]
    PlacementOutOfBounds {
        axis: Axis,
        offset: usize,
        extent: usize,
        grid_extent: usize,
    },
    /// The pattern has more cells than a match count can represent.
    #[error("pattern has {cells} cells, at most {max} are supported")]
    PatternTooLarge { cells: usize, max: usize },
    /// The correlation result buffer holds a non-zero count before accumulation.
    #[error("result buffer is not zeroed (first non-zero at index {index})")]
    ResultNotZeroed { index: usize },
}
