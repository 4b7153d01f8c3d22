//! Bounds-carrying 3D volumes.
//!
//! A volume is a flat buffer together with its `Dims` and the `Layout` used
//! to linearize it. Views borrow caller-owned buffers for the duration of a
//! call; `Volume` owns its cells. Constructors check that the buffer length
//! equals `width * height * length`, so every operation downstream can index
//! without re-validating the buffer itself.

use crate::util::{VoxMatchError, VoxMatchResult};

pub mod layout;

pub use layout::Layout;

/// Cell label stored in grids and patterns.
pub type Label = i32;

/// Per-placement match count.
pub type Count = u32;

/// Extent of a volume along x (width), y (height) and z (length).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dims {
    pub width: usize,
    pub height: usize,
    pub length: usize,
}

impl Dims {
    pub const fn new(width: usize, height: usize, length: usize) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Number of cells, or `None` if the product overflows.
    pub fn cells(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.length)
    }

    /// True if any axis has zero extent.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.length == 0
    }

    /// Extent of the valid placement range of `pattern` inside `self`.
    ///
    /// An axis on which the pattern is larger than the grid has zero
    /// placements, which makes the whole range empty.
    pub fn placements(&self, pattern: Dims) -> Dims {
        let axis = |grid: usize, pat: usize| {
            if pat > grid {
                0
            } else {
                grid - pat + 1
            }
        };
        Dims::new(
            axis(self.width, pattern.width),
            axis(self.height, pattern.height),
            axis(self.length, pattern.length),
        )
    }

    fn checked_cells(&self) -> VoxMatchResult<usize> {
        self.cells().ok_or(VoxMatchError::InvalidDimensions {
            width: self.width,
            height: self.height,
            length: self.length,
        })
    }

    pub(crate) fn require_non_empty(&self) -> VoxMatchResult<()> {
        if self.is_empty() {
            return Err(VoxMatchError::InvalidDimensions {
                width: self.width,
                height: self.height,
                length: self.length,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.length)
    }
}

fn check_len(buffer: &'static str, dims: Dims, got: usize) -> VoxMatchResult<()> {
    let needed = dims.checked_cells()?;
    if got != needed {
        return Err(VoxMatchError::BufferSizeMismatch {
            buffer,
            needed,
            got,
        });
    }
    Ok(())
}

/// Borrowed read-only 3D volume.
#[derive(Copy, Clone, Debug)]
pub struct VolumeView<'a, T> {
    data: &'a [T],
    dims: Dims,
    layout: Layout,
}

impl<'a, T> VolumeView<'a, T> {
    /// Wraps `data` as a volume of `dims` linearized with `layout`.
    pub fn new(data: &'a [T], dims: Dims, layout: Layout) -> VoxMatchResult<Self> {
        Self::named("volume", data, dims, layout)
    }

    /// Wraps a grid buffer (`Xzy`).
    pub fn grid(data: &'a [T], dims: Dims) -> VoxMatchResult<Self> {
        Self::named("grid", data, dims, Layout::Xzy)
    }

    /// Wraps a pattern buffer for [`match_at`](crate::match_at) (`Xzy`).
    pub fn match_pattern(data: &'a [T], dims: Dims) -> VoxMatchResult<Self> {
        Self::named("pattern", data, dims, Layout::Xzy)
    }

    /// Wraps a pattern buffer for [`correlate_all`](crate::correlate_all) (`Xyz`).
    pub fn correlate_pattern(data: &'a [T], dims: Dims) -> VoxMatchResult<Self> {
        Self::named("pattern", data, dims, Layout::Xyz)
    }

    fn named(
        buffer: &'static str,
        data: &'a [T],
        dims: Dims,
        layout: Layout,
    ) -> VoxMatchResult<Self> {
        check_len(buffer, dims, data.len())?;
        Ok(Self { data, dims, layout })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the cell at `(x, y, z)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&'a T> {
        if x >= self.dims.width || y >= self.dims.height || z >= self.dims.length {
            return None;
        }
        self.data.get(self.layout.index(self.dims, x, y, z))
    }
}

/// Borrowed mutable 3D volume, used for correlation results.
#[derive(Debug)]
pub struct VolumeViewMut<'a, T> {
    data: &'a mut [T],
    dims: Dims,
    layout: Layout,
}

impl<'a, T> VolumeViewMut<'a, T> {
    pub fn new(data: &'a mut [T], dims: Dims, layout: Layout) -> VoxMatchResult<Self> {
        check_len("volume", dims, data.len())?;
        Ok(Self { data, dims, layout })
    }

    /// Wraps a correlation result buffer sized for `pattern` placements in `grid`.
    pub fn correlation(data: &'a mut [T], grid: Dims, pattern: Dims) -> VoxMatchResult<Self> {
        let dims = grid.placements(pattern);
        check_len("result", dims, data.len())?;
        Ok(Self {
            data,
            dims,
            layout: Layout::Xyz,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..]
    }

    /// Reborrows as a read-only view.
    pub fn view(&self) -> VolumeView<'_, T> {
        VolumeView {
            data: &self.data[..],
            dims: self.dims,
            layout: self.layout,
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut T> {
        if x >= self.dims.width || y >= self.dims.height || z >= self.dims.length {
            return None;
        }
        let idx = self.layout.index(self.dims, x, y, z);
        self.data.get_mut(idx)
    }
}

/// Owned 3D volume in a contiguous buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume<T> {
    data: Vec<T>,
    dims: Dims,
    layout: Layout,
}

impl<T> Volume<T> {
    /// Takes ownership of `data` laid out with `layout`.
    pub fn new(data: Vec<T>, dims: Dims, layout: Layout) -> VoxMatchResult<Self> {
        check_len("volume", dims, data.len())?;
        Ok(Self { data, dims, layout })
    }

    /// Builds a volume by evaluating `f(x, y, z)` for every cell.
    pub fn from_fn<F>(dims: Dims, layout: Layout, mut f: F) -> VoxMatchResult<Self>
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let cells = dims.checked_cells()?;
        let data = (0..cells)
            .map(|idx| {
                let (x, y, z) = layout.coords(dims, idx);
                f(x, y, z)
            })
            .collect();
        Ok(Self { data, dims, layout })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn view(&self) -> VolumeView<'_, T> {
        VolumeView {
            data: &self.data,
            dims: self.dims,
            layout: self.layout,
        }
    }

    pub fn view_mut(&mut self) -> VolumeViewMut<'_, T> {
        VolumeViewMut {
            data: &mut self.data,
            dims: self.dims,
            layout: self.layout,
        }
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if x >= self.dims.width || y >= self.dims.height || z >= self.dims.length {
            return None;
        }
        self.data.get(self.layout.index(self.dims, x, y, z))
    }
}

impl<T: Copy> Volume<T> {
    /// Returns a copy of the same logical volume linearized with `layout`.
    pub fn to_layout(&self, layout: Layout) -> Volume<T> {
        if layout == self.layout {
            return self.clone();
        }
        let dims = self.dims;
        let data = (0..self.data.len())
            .map(|idx| {
                let (x, y, z) = layout.coords(dims, idx);
                self.data[self.layout.index(dims, x, y, z)]
            })
            .collect();
        Volume { data, dims, layout }
    }
}

impl<T: Copy + Default> Volume<T> {
    /// Zero-filled volume.
    pub fn zeros(dims: Dims, layout: Layout) -> VoxMatchResult<Self> {
        let cells = dims.checked_cells()?;
        Ok(Self {
            data: vec![T::default(); cells],
            dims,
            layout,
        })
    }
}
