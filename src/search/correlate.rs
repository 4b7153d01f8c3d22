//! Exhaustive correlation by scatter accumulation.
//!
//! Instead of extracting the grid sub-volume for each placement, the loops
//! run over pattern cells outermost. For a pattern cell `p` with value `pv`
//! the grid cells it is compared against, across all placements `o`, are
//! `grid[o + p]`; along x these form a contiguous run that lines up with a
//! contiguous run of result counts, so each step is one kernel call.

use std::ops::Range;

use crate::kernel::{DefaultKernel, Kernel};
use crate::search::{check_layout, check_pattern_cells};
use crate::trace::{trace_event, trace_span};
use crate::util::{VoxMatchError, VoxMatchResult};
use crate::volume::layout::{grid_index, result_index};
use crate::volume::{Count, Dims, Label, Layout, Volume, VolumeView, VolumeViewMut};

/// Adds, for every valid placement, the number of matching pattern cells
/// to `result`.
///
/// `grid` must use `Xzy`, `pattern` and `result` must use `Xyz`, and
/// `result` must have the placement extent
/// `(width-pw+1, height-ph+1, length-pl+1)` and hold only zeros. If the
/// pattern does not fit along some axis there are no placements; the call
/// succeeds and leaves the (empty) result untouched.
pub fn correlate_all(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    result: VolumeViewMut<'_, Count>,
) -> VoxMatchResult<()> {
    correlate_all_with::<DefaultKernel>(grid, pattern, result)
}

/// [`correlate_all`] with an explicit row kernel.
pub fn correlate_all_with<K: Kernel>(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    mut result: VolumeViewMut<'_, Count>,
) -> VoxMatchResult<()> {
    let _span = trace_span!(
        "correlate_all",
        grid = %grid.dims(),
        pattern = %pattern.dims()
    )
    .entered();
    let placements = validate(grid, pattern, &result)?;
    trace_event!(
        "correlate_plan",
        placements = placements.cells().unwrap_or(0),
        pattern_cells = pattern.len()
    );
    if placements.is_empty() {
        return Ok(());
    }
    accumulate_slab::<K>(
        grid,
        pattern,
        placements,
        0..placements.length,
        result.as_mut_slice(),
    );
    Ok(())
}

/// Allocates a zeroed result volume and correlates into it.
pub fn correlate(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
) -> VoxMatchResult<Volume<Count>> {
    let mut result = Volume::zeros(grid.dims().placements(pattern.dims()), Layout::Xyz)?;
    correlate_all(grid, pattern, result.view_mut())?;
    Ok(result)
}

/// Checks every precondition of the correlator and returns the placement
/// extent.
pub(crate) fn validate(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    result: &VolumeViewMut<'_, Count>,
) -> VoxMatchResult<Dims> {
    check_layout("grid", Layout::Xzy, grid.layout())?;
    check_layout("pattern", Layout::Xyz, pattern.layout())?;
    check_layout("result", Layout::Xyz, result.layout())?;
    grid.dims().require_non_empty()?;
    pattern.dims().require_non_empty()?;
    check_pattern_cells(pattern.len())?;

    let placements = grid.dims().placements(pattern.dims());
    // An empty range has no meaningful shape; only its size matters.
    let shape_ok = if placements.is_empty() {
        result.is_empty()
    } else {
        result.dims() == placements
    };
    if !shape_ok {
        return Err(VoxMatchError::ShapeMismatch {
            buffer: "result",
            expected: placements,
            got: result.dims(),
        });
    }
    if let Some(index) = result.as_slice().iter().position(|&c| c != 0) {
        return Err(VoxMatchError::ResultNotZeroed { index });
    }
    Ok(placements)
}

/// Accumulates counts for placements with `oz` in `oz_range` into `out`,
/// which holds exactly those z-planes of the result.
pub(crate) fn accumulate_slab<K: Kernel>(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    placements: Dims,
    oz_range: Range<usize>,
    out: &mut [Count],
) {
    let grid_dims = grid.dims();
    let pat_dims = pattern.dims();
    let cells = grid.as_slice();
    let run = placements.width;
    let oz0 = oz_range.start;

    let pattern_cells = pattern.as_slice();
    for (p, &pv) in pattern_cells.iter().enumerate() {
        let (px, py, pz) = pattern.layout().coords(pat_dims, p);
        for oz in oz_range.clone() {
            for oy in 0..placements.height {
                let src = grid_index(grid_dims, px, oy + py, oz + pz);
                let dst = result_index(placements, 0, oy, oz - oz0);
                K::accumulate_row(&mut out[dst..dst + run], &cells[src..src + run], pv);
            }
        }
    }
}
