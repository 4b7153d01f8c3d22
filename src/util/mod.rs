//! Shared utility helpers.

pub mod error;

pub use error::{Axis, VoxMatchError, VoxMatchResult};
