//! SIMD row kernel using the `wide` crate.
//!
//! Eight lanes are compared per step; equal lanes come back as `-1`, so
//! subtracting the mask from the running counts adds one per match.

use crate::kernel::Kernel;
use crate::volume::{Count, Label};
use wide::i32x8;

const LANES: usize = 8;

#[inline]
fn load_labels(slice: &[Label]) -> i32x8 {
    i32x8::from([
        slice[0], slice[1], slice[2], slice[3], slice[4], slice[5], slice[6], slice[7],
    ])
}

/// Counts never exceed the pattern cell count, which the correlator caps at
/// `i32::MAX` before any kernel runs.
#[inline]
fn load_counts(slice: &[Count]) -> i32x8 {
    i32x8::from([
        slice[0] as i32,
        slice[1] as i32,
        slice[2] as i32,
        slice[3] as i32,
        slice[4] as i32,
        slice[5] as i32,
        slice[6] as i32,
        slice[7] as i32,
    ])
}

/// SIMD-accelerated accumulation kernel.
pub struct SimdKernel;

impl Kernel for SimdKernel {
    fn accumulate_row(counts: &mut [Count], cells: &[Label], value: Label) {
        debug_assert_eq!(counts.len(), cells.len());
        let needle = i32x8::splat(value);
        let simd_end = counts.len() / LANES * LANES;

        let mut i = 0;
        while i < simd_end {
            let mask = load_labels(&cells[i..]).simd_eq(needle);
            let updated = load_counts(&counts[i..]) - mask;
            for (count, lane) in counts[i..i + LANES].iter_mut().zip(updated.to_array()) {
                *count = lane as Count;
            }
            i += LANES;
        }

        // Scalar remainder
        for (count, &cell) in counts[i..].iter_mut().zip(&cells[i..]) {
            *count += Count::from(cell == value);
        }
    }
}
