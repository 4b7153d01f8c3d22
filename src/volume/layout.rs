//! Flattening conventions for 3D label buffers.
//!
//! Every buffer is a flat slice with x as the fastest-varying axis. The
//! buffers disagree on which axis comes next:
//!
//! | buffer                        | convention | linear index              |
//! |-------------------------------|------------|---------------------------|
//! | grid                          | `Xzy`      | `x + z*w + y*w*l`         |
//! | pattern for `match_at`        | `Xzy`      | `x + z*pw + y*pw*pl`      |
//! | pattern for `correlate_all`   | `Xyz`      | `x + y*pw + z*pw*ph`      |
//! | correlation result            | `Xyz`      | `x + y*rw + z*rw*rh`      |
//!
//! The two pattern conventions are both kept as-is so existing producers of
//! either layout keep working; use [`Volume::to_layout`](crate::Volume::to_layout)
//! to convert between them.

use super::Dims;

/// Axis order of a linearized volume, fastest axis first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// x fastest, then z, then y.
    Xzy,
    /// x fastest, then y, then z.
    Xyz,
}

impl Layout {
    /// Linear index of `(x, y, z)` in a buffer of `dims` using this layout.
    #[inline]
    pub fn index(self, dims: Dims, x: usize, y: usize, z: usize) -> usize {
        match self {
            Layout::Xzy => x + z * dims.width + y * dims.width * dims.length,
            Layout::Xyz => x + y * dims.width + z * dims.width * dims.height,
        }
    }

    /// Inverse of [`Layout::index`].
    pub fn coords(self, dims: Dims, index: usize) -> (usize, usize, usize) {
        let x = index % dims.width;
        let rest = index / dims.width;
        match self {
            Layout::Xzy => (x, rest / dims.length, rest % dims.length),
            Layout::Xyz => (x, rest % dims.height, rest / dims.height),
        }
    }
}

/// Grid addressing: `x + z*width + y*width*length`.
#[inline]
pub fn grid_index(dims: Dims, x: usize, y: usize, z: usize) -> usize {
    Layout::Xzy.index(dims, x, y, z)
}

/// Pattern addressing used by the single-placement matcher.
#[inline]
pub fn match_pattern_index(dims: Dims, x: usize, y: usize, z: usize) -> usize {
    Layout::Xzy.index(dims, x, y, z)
}

/// Pattern addressing used by the exhaustive correlator.
#[inline]
pub fn correlate_pattern_index(dims: Dims, x: usize, y: usize, z: usize) -> usize {
    Layout::Xyz.index(dims, x, y, z)
}

/// Correlation result addressing, `dims` being the placement extent.
#[inline]
pub fn result_index(dims: Dims, x: usize, y: usize, z: usize) -> usize {
    Layout::Xyz.index(dims, x, y, z)
}

#[cfg(test)]
mod tests {
    use super::{correlate_pattern_index, grid_index, result_index, Layout};
    use crate::volume::Dims;

    #[test]
    fn grid_index_puts_z_in_the_middle() {
        let dims = Dims::new(3, 2, 4);
        assert_eq!(grid_index(dims, 0, 0, 0), 0);
        assert_eq!(grid_index(dims, 1, 0, 0), 1);
        assert_eq!(grid_index(dims, 0, 0, 1), 3);
        assert_eq!(grid_index(dims, 0, 1, 0), 12);
        assert_eq!(grid_index(dims, 2, 1, 3), 2 + 9 + 12);
    }

    #[test]
    fn correlate_and_result_index_put_y_in_the_middle() {
        let dims = Dims::new(3, 2, 4);
        assert_eq!(correlate_pattern_index(dims, 0, 1, 0), 3);
        assert_eq!(correlate_pattern_index(dims, 0, 0, 1), 6);
        assert_eq!(result_index(dims, 2, 1, 3), 2 + 3 + 18);
    }

    #[test]
    fn coords_inverts_index_for_both_layouts() {
        let dims = Dims::new(3, 2, 4);
        for layout in [Layout::Xzy, Layout::Xyz] {
            for idx in 0..dims.width * dims.height * dims.length {
                let (x, y, z) = layout.coords(dims, idx);
                assert!(x < dims.width && y < dims.height && z < dims.length);
                assert_eq!(layout.index(dims, x, y, z), idx);
            }
        }
    }
}
