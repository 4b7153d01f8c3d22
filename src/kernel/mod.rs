//! Row accumulation kernels for the exhaustive correlator.
//!
//! The correlator reduces to one primitive: for a fixed pattern value,
//! walk a run of grid cells and the matching run of result counts in
//! lockstep, incrementing each count whose cell equals the value. Both runs
//! are unit stride along x, so the primitive vectorizes well.

use crate::volume::{Count, Label};

/// Accumulation primitive used by the correlator's innermost loop.
pub trait Kernel {
    /// Adds one to `counts[i]` for every `i` with `cells[i] == value`.
    ///
    /// `counts` and `cells` have the same length.
    fn accumulate_row(counts: &mut [Count], cells: &[Label], value: Label);
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use scalar::ScalarKernel;
#[cfg(feature = "simd")]
pub use simd::SimdKernel;

/// Kernel used by [`correlate_all`](crate::correlate_all).
#[cfg(feature = "simd")]
pub type DefaultKernel = SimdKernel;

/// Kernel used by [`correlate_all`](crate::correlate_all).
#[cfg(not(feature = "simd"))]
pub type DefaultKernel = ScalarKernel;
