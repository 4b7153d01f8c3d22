//! Scalar reference kernel.

use crate::kernel::Kernel;
use crate::volume::{Count, Label};

/// Plain element-wise kernel.
pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    #[inline]
    fn accumulate_row(counts: &mut [Count], cells: &[Label], value: Label) {
        debug_assert_eq!(counts.len(), cells.len());
        for (count, &cell) in counts.iter_mut().zip(cells) {
            *count += Count::from(cell == value);
        }
    }
}
