//! Top-K selection of the best placements.

use std::cmp::Ordering;

use crate::candidate::hits::{hits_above, Hit, HitConfig};
use crate::util::VoxMatchResult;
use crate::volume::{Count, Dims, VolumeView};

/// Higher count first; ties broken by z, then y, then x ascending.
fn hit_cmp_desc(a: &Hit, b: &Hit) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.offset.z.cmp(&b.offset.z))
        .then_with(|| a.offset.y.cmp(&b.offset.y))
        .then_with(|| a.offset.x.cmp(&b.offset.x))
}

/// Top-K container with O(k) insertion cost.
pub struct TopK {
    k: usize,
    items: Vec<Hit>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            // `k` may be a "no limit" sentinel such as `usize::MAX`.
            items: Vec::with_capacity(k.min(256)),
        }
    }

    /// Pushes a hit, evicting the worst one if at capacity.
    pub fn push(&mut self, hit: Hit) {
        if self.k == 0 {
            return;
        }
        if self.items.len() < self.k {
            self.items.push(hit);
            return;
        }

        let mut worst_idx = 0usize;
        for (idx, item) in self.items.iter().enumerate().skip(1) {
            if hit_cmp_desc(item, &self.items[worst_idx]) == Ordering::Greater {
                worst_idx = idx;
            }
        }

        if hit_cmp_desc(&hit, &self.items[worst_idx]) == Ordering::Less {
            self.items[worst_idx] = hit;
        }
    }

    /// Returns hits best first.
    pub fn into_sorted_desc(mut self) -> Vec<Hit> {
        self.items.sort_by(hit_cmp_desc);
        self.items
    }
}

/// Returns up to `config.topk` placements above `config.threshold`, best
/// first.
pub fn best_hits(
    result: VolumeView<'_, Count>,
    pattern: Dims,
    config: HitConfig,
) -> VoxMatchResult<Vec<Hit>> {
    let mut topk = TopK::new(config.topk);
    for hit in hits_above(result, pattern, config.threshold)? {
        topk.push(hit);
    }
    Ok(topk.into_sorted_desc())
}
