//! Exact-label search over 3D grids.
//!
//! `single` checks one placement by extracting the grid sub-volume;
//! `correlate` scores every placement at once by scatter accumulation.

use crate::util::{Axis, VoxMatchError, VoxMatchResult};
use crate::volume::{Dims, Layout};

pub(crate) mod correlate;
pub(crate) mod single;

/// Largest supported pattern cell count.
///
/// Counts are `u32` in results and are widened through `i32` lanes by the
/// SIMD kernel, so both must hold a full-match count.
pub const MAX_PATTERN_CELLS: usize = i32::MAX as usize;

/// Grid coordinates of the pattern origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Offset {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl From<(usize, usize, usize)> for Offset {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}

pub(crate) fn check_layout(
    buffer: &'static str,
    expected: Layout,
    got: Layout,
) -> VoxMatchResult<()> {
    if expected != got {
        return Err(VoxMatchError::LayoutMismatch {
            buffer,
            expected,
            got,
        });
    }
    Ok(())
}

pub(crate) fn check_pattern_cells(cells: usize) -> VoxMatchResult<()> {
    if cells > MAX_PATTERN_CELLS {
        return Err(VoxMatchError::PatternTooLarge {
            cells,
            max: MAX_PATTERN_CELLS,
        });
    }
    Ok(())
}

/// Fails if the pattern placed at `offset` does not fit inside the grid.
pub(crate) fn check_placement(grid: Dims, pattern: Dims, offset: Offset) -> VoxMatchResult<()> {
    let axes = [
        (Axis::X, offset.x, pattern.width, grid.width),
        (Axis::Y, offset.y, pattern.height, grid.height),
        (Axis::Z, offset.z, pattern.length, grid.length),
    ];
    for (axis, offset, extent, grid_extent) in axes {
        let fits = offset
            .checked_add(extent)
            .is_some_and(|end| end <= grid_extent);
        if !fits {
            return Err(VoxMatchError::PlacementOutOfBounds {
                axis,
                offset,
                extent,
                grid_extent,
            });
        }
    }
    Ok(())
}
