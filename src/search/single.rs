//! Single-placement exact matching.

use crate::search::{check_layout, check_pattern_cells, check_placement, Offset};
use crate::util::{VoxMatchError, VoxMatchResult};
use crate::volume::layout::{grid_index, match_pattern_index};
use crate::volume::{Count, Label, Layout, VolumeView};

/// Counts pattern cells equal to the grid cells under them at `offset`.
///
/// Both `grid` and `pattern` must use the `Xzy` layout. The result lies in
/// `[0, pattern cells]` and equals the pattern cell count iff the placement
/// is an exact match.
pub fn match_at(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    offset: Offset,
) -> VoxMatchResult<Count> {
    let mut scratch = vec![0; pattern.len()];
    match_at_with(grid, pattern, offset, &mut scratch)
}

/// Same as [`match_at`], extracting into a caller-owned `scratch` buffer.
///
/// `scratch` must hold exactly one cell per pattern cell; it is overwritten
/// with the grid sub-volume in pattern order.
pub fn match_at_with(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    offset: Offset,
    scratch: &mut [Label],
) -> VoxMatchResult<Count> {
    check_layout("grid", Layout::Xzy, grid.layout())?;
    check_layout("pattern", Layout::Xzy, pattern.layout())?;
    let grid_dims = grid.dims();
    let pat_dims = pattern.dims();
    grid_dims.require_non_empty()?;
    pat_dims.require_non_empty()?;
    check_pattern_cells(pattern.len())?;
    if scratch.len() != pattern.len() {
        return Err(VoxMatchError::BufferSizeMismatch {
            buffer: "scratch",
            needed: pattern.len(),
            got: scratch.len(),
        });
    }
    check_placement(grid_dims, pat_dims, offset)?;

    let cells = grid.as_slice();
    let run = pat_dims.width;
    for j in 0..pat_dims.height {
        for k in 0..pat_dims.length {
            let dst = match_pattern_index(pat_dims, 0, j, k);
            let src = grid_index(grid_dims, offset.x, offset.y + j, offset.z + k);
            scratch[dst..dst + run].copy_from_slice(&cells[src..src + run]);
        }
    }

    let matching = scratch
        .iter()
        .zip(pattern.as_slice())
        .filter(|(a, b)| a == b)
        .count();
    Count::try_from(matching).map_err(|_| VoxMatchError::PatternTooLarge {
        cells: pattern.len(),
        max: crate::search::MAX_PATTERN_CELLS,
    })
}
