//! Rayon-parallel correlation (feature-gated).
//!
//! The result is split into its z-planes (one per `oz`); every worker owns
//! a disjoint plane and runs the full pattern loop over it, so no counts are
//! shared between threads and no merge step is needed.

use crate::kernel::{DefaultKernel, Kernel};
use crate::search::correlate::{accumulate_slab, validate};
use crate::trace::{trace_event, trace_span};
use crate::util::VoxMatchResult;
use crate::volume::{Count, Label, VolumeView, VolumeViewMut};
use rayon::prelude::*;

/// Parallel [`correlate_all`](crate::correlate_all); produces identical counts.
pub fn correlate_all_par(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    result: VolumeViewMut<'_, Count>,
) -> VoxMatchResult<()> {
    correlate_all_par_with::<DefaultKernel>(grid, pattern, result)
}

/// [`correlate_all_par`] with an explicit row kernel.
pub fn correlate_all_par_with<K: Kernel>(
    grid: VolumeView<'_, Label>,
    pattern: VolumeView<'_, Label>,
    mut result: VolumeViewMut<'_, Count>,
) -> VoxMatchResult<()> {
    let _span = trace_span!(
        "correlate_all_par",
        grid = %grid.dims(),
        pattern = %pattern.dims()
    )
    .entered();
    let placements = validate(grid, pattern, &result)?;
    if placements.is_empty() {
        return Ok(());
    }
    let plane = placements.width * placements.height;
    trace_event!("correlate_par_split", planes = placements.length, plane = plane);

    result
        .as_mut_slice()
        .par_chunks_mut(plane)
        .enumerate()
        .for_each(|(oz, out)| {
            accumulate_slab::<K>(grid, pattern, placements, oz..oz + 1, out);
        });
    Ok(())
}
