//! Threshold filtering of correlation counts.

use crate::search::{check_layout, Offset};
use crate::util::{VoxMatchError, VoxMatchResult};
use crate::volume::{Count, Dims, Layout, VolumeView};

/// Selection parameters for turning a correlation result into hits.
#[derive(Clone, Copy, Debug)]
pub struct HitConfig {
    /// Minimum match ratio; a hit must lie strictly above it.
    pub threshold: f64,
    /// Maximum number of hits returned by [`best_hits`](crate::best_hits).
    pub topk: usize,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            threshold: 0.9,
            topk: 16,
        }
    }
}

/// A placement together with its match count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Placement of the pattern origin in grid coordinates.
    pub offset: Offset,
    /// Number of matching pattern cells.
    pub count: Count,
    /// `count` divided by the pattern cell count, in `[0, 1]`.
    pub ratio: f64,
}

impl Hit {
    /// True if every pattern cell matched.
    pub fn is_exact(&self, pattern: Dims) -> bool {
        pattern.cells() == Some(self.count as usize)
    }
}

pub(crate) fn pattern_cells(pattern: Dims) -> VoxMatchResult<usize> {
    pattern.require_non_empty()?;
    pattern.cells().ok_or(VoxMatchError::InvalidDimensions {
        width: pattern.width,
        height: pattern.height,
        length: pattern.length,
    })
}

/// Yields every placement of `result` whose ratio is above `threshold`.
pub(crate) fn hits_above(
    result: VolumeView<'_, Count>,
    pattern: Dims,
    threshold: f64,
) -> VoxMatchResult<impl Iterator<Item = Hit> + '_> {
    check_layout("result", Layout::Xyz, result.layout())?;
    let total = pattern_cells(pattern)? as f64;
    let dims = result.dims();

    Ok(result
        .as_slice()
        .iter()
        .enumerate()
        .filter_map(move |(idx, &count)| {
            let ratio = f64::from(count) / total;
            if ratio <= threshold {
                return None;
            }
            let (x, y, z) = Layout::Xyz.coords(dims, idx);
            Some(Hit {
                offset: Offset::new(x, y, z),
                count,
                ratio,
            })
        }))
}

/// Returns every placement whose match ratio is strictly above
/// `config.threshold`, in result order (x fastest, then y, then z).
///
/// `pattern` is the extent of the pattern that produced `result`. A
/// threshold of `1.0` or more never matches; use [`exact_hits`] for full
/// matches. `config.topk` is not applied here.
pub fn find_hits(
    result: VolumeView<'_, Count>,
    pattern: Dims,
    config: HitConfig,
) -> VoxMatchResult<Vec<Hit>> {
    Ok(hits_above(result, pattern, config.threshold)?.collect())
}

/// Returns every placement where all pattern cells matched.
pub fn exact_hits(result: VolumeView<'_, Count>, pattern: Dims) -> VoxMatchResult<Vec<Hit>> {
    check_layout("result", Layout::Xyz, result.layout())?;
    let total = pattern_cells(pattern)?;
    let dims = result.dims();
    Ok(result
        .as_slice()
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count as usize == total)
        .map(|(idx, &count)| {
            let (x, y, z) = Layout::Xyz.coords(dims, idx);
            Hit {
                offset: Offset::new(x, y, z),
                count,
                ratio: 1.0,
            }
        })
        .collect())
}
