//! Low-level building blocks for custom correlation pipelines.
//!
//! Exposes the addressing functions, row kernels and the top-K collector.
//! Most users only need [`match_at`](crate::match_at) and
//! [`correlate_all`](crate::correlate_all).

pub use crate::candidate::topk::TopK;
#[cfg(feature = "simd")]
pub use crate::kernel::SimdKernel;
pub use crate::kernel::{DefaultKernel, Kernel, ScalarKernel};
pub use crate::search::correlate::correlate_all_with;
pub use crate::volume::layout::{
    correlate_pattern_index, grid_index, match_pattern_index, result_index,
};

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::correlate_all_par_with;
