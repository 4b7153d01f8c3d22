use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use voxmatch::{correlate, match_at, Dims, Layout, Offset, Volume};

fn make_grid(dims: Dims) -> Volume<i32> {
    Volume::from_fn(dims, Layout::Xzy, |x, y, z| {
        ((x * 13) ^ (y * 7) ^ (z * 3) ^ (x * z)) as i32 & 0x0F
    })
    .unwrap()
}

fn extract_pattern(grid: &Volume<i32>, at: Offset, dims: Dims) -> Volume<i32> {
    Volume::from_fn(dims, Layout::Xzy, |x, y, z| {
        *grid.get(at.x + x, at.y + y, at.z + z).unwrap()
    })
    .unwrap()
}

fn bench_matchers(c: &mut Criterion) {
    let grid_dims = Dims::new(96, 48, 96);
    let grid = make_grid(grid_dims);
    let pattern_dims = Dims::new(8, 6, 8);
    let at = Offset::new(40, 20, 33);
    let pattern = extract_pattern(&grid, at, pattern_dims);
    let scatter = pattern.to_layout(Layout::Xyz);

    c.bench_function("match_at_single", |b| {
        b.iter(|| black_box(match_at(grid.view(), pattern.view(), at).unwrap()));
    });

    c.bench_function("correlate_all", |b| {
        b.iter(|| black_box(correlate(grid.view(), scatter.view()).unwrap()));
    });

    #[cfg(feature = "rayon")]
    c.bench_function("correlate_all_par", |b| {
        b.iter(|| {
            let mut result =
                Volume::<u32>::zeros(grid_dims.placements(pattern_dims), Layout::Xyz).unwrap();
            voxmatch::correlate_all_par(grid.view(), scatter.view(), result.view_mut()).unwrap();
            black_box(result)
        });
    });
}

criterion_group!(benches, bench_matchers);
criterion_main!(benches);
