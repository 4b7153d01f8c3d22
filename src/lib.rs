//! voxmatch locates a labeled 3D pattern inside a larger labeled grid by
//! exact value comparison.
//!
//! Two operations make up the core: [`match_at`] counts matching cells for
//! one placement, and [`correlate_all`] counts them for every placement at
//! once using scatter accumulation. Optional features add a rayon-parallel
//! correlator (`rayon`), a SIMD row kernel (`simd`) and tracing spans
//! (`tracing`).
//!
//! Buffers are borrowed through [`VolumeView`] / [`VolumeViewMut`], which
//! carry their dimensions and flattening [`Layout`]. Note that the two
//! operations expect the pattern in different layouts; see
//! [`volume::layout`].

mod candidate;
pub mod kernel;
pub mod lowlevel;
pub mod search;
mod trace;
pub mod util;
pub mod volume;

pub use candidate::hits::{exact_hits, find_hits, Hit, HitConfig};
pub use candidate::topk::best_hits;
pub use search::correlate::{correlate, correlate_all};
pub use search::single::{match_at, match_at_with};
pub use search::Offset;
pub use util::{Axis, VoxMatchError, VoxMatchResult};
pub use volume::{Count, Dims, Label, Layout, Volume, VolumeView, VolumeViewMut};

#[cfg(feature = "rayon")]
pub use kernel::rayon::correlate_all_par;
