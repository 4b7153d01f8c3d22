use voxmatch::{
    match_at, Axis, Dims, Layout, Offset, Volume, VolumeView, VolumeViewMut, VoxMatchError,
};

#[test]
fn volume_view_rejects_length_mismatch() {
    let data = [0i32; 5];
    let err = VolumeView::grid(&data, Dims::new(2, 2, 1)).err().unwrap();
    assert_eq!(
        err,
        VoxMatchError::BufferSizeMismatch {
            buffer: "grid",
            needed: 4,
            got: 5,
        }
    );

    let err = VolumeView::correlate_pattern(&data, Dims::new(3, 1, 1))
        .err()
        .unwrap();
    assert_eq!(
        err,
        VoxMatchError::BufferSizeMismatch {
            buffer: "pattern",
            needed: 3,
            got: 5,
        }
    );
}

#[test]
fn volume_view_rejects_overflowing_dimensions() {
    let data = [0i32; 1];
    let err = VolumeView::grid(&data, Dims::new(usize::MAX, usize::MAX, 2))
        .err()
        .unwrap();
    assert_eq!(
        err,
        VoxMatchError::InvalidDimensions {
            width: usize::MAX,
            height: usize::MAX,
            length: 2,
        }
    );
}

#[test]
fn volume_view_get_follows_layout() {
    // Grid 2x2x2 holding its own linear index.
    let data: Vec<i32> = (0..8).collect();
    let grid = VolumeView::grid(&data, Dims::new(2, 2, 2)).unwrap();
    assert_eq!(grid.get(1, 0, 0).copied(), Some(1));
    assert_eq!(grid.get(0, 0, 1).copied(), Some(2));
    assert_eq!(grid.get(0, 1, 0).copied(), Some(4));
    assert!(grid.get(2, 0, 0).is_none());

    let pattern = VolumeView::correlate_pattern(&data, Dims::new(2, 2, 2)).unwrap();
    assert_eq!(pattern.get(0, 1, 0).copied(), Some(2));
    assert_eq!(pattern.get(0, 0, 1).copied(), Some(4));
}

#[test]
fn correlation_view_sizes_from_placements() {
    let mut out = vec![0u32; 2 * 3 * 1];
    let view = VolumeViewMut::correlation(&mut out, Dims::new(4, 5, 2), Dims::new(3, 3, 2)).unwrap();
    assert_eq!(view.dims(), Dims::new(2, 3, 1));
    assert_eq!(view.layout(), Layout::Xyz);

    let mut short = vec![0u32; 5];
    let err = VolumeViewMut::correlation(&mut short, Dims::new(4, 5, 2), Dims::new(3, 3, 2))
        .err()
        .unwrap();
    assert_eq!(
        err,
        VoxMatchError::BufferSizeMismatch {
            buffer: "result",
            needed: 6,
            got: 5,
        }
    );
}

#[test]
fn match_at_reports_violating_axis() {
    let grid = Volume::<i32>::zeros(Dims::new(4, 3, 2), Layout::Xzy).unwrap();
    let pattern = Volume::<i32>::zeros(Dims::new(2, 2, 2), Layout::Xzy).unwrap();

    assert_eq!(match_at(grid.view(), pattern.view(), Offset::new(2, 1, 0)), Ok(8));

    let err = match_at(grid.view(), pattern.view(), Offset::new(3, 0, 0)).unwrap_err();
    assert_eq!(
        err,
        VoxMatchError::PlacementOutOfBounds {
            axis: Axis::X,
            offset: 3,
            extent: 2,
            grid_extent: 4,
        }
    );

    let err = match_at(grid.view(), pattern.view(), Offset::new(0, 0, 1)).unwrap_err();
    assert_eq!(
        err,
        VoxMatchError::PlacementOutOfBounds {
            axis: Axis::Z,
            offset: 1,
            extent: 2,
            grid_extent: 2,
        }
    );
}

#[test]
fn match_at_rejects_empty_pattern() {
    let grid = [0i32; 4];
    let grid = VolumeView::grid(&grid, Dims::new(2, 2, 1)).unwrap();
    let pattern: [i32; 0] = [];
    let pattern = VolumeView::match_pattern(&pattern, Dims::new(0, 1, 1)).unwrap();
    assert_eq!(
        match_at(grid, pattern, Offset::default()),
        Err(VoxMatchError::InvalidDimensions {
            width: 0,
            height: 1,
            length: 1,
        })
    );
}

#[test]
fn errors_render_readable_messages() {
    let err = VoxMatchError::PlacementOutOfBounds {
        axis: Axis::Y,
        offset: 4,
        extent: 3,
        grid_extent: 5,
    };
    assert_eq!(
        err.to_string(),
        "placement 4+3 exceeds grid extent 5 on the y axis"
    );

    let err = VoxMatchError::ShapeMismatch {
        buffer: "result",
        expected: Dims::new(2, 1, 3),
        got: Dims::new(3, 1, 2),
    };
    assert_eq!(err.to_string(), "result has shape 3x1x2, expected 2x1x3");

    let err = VoxMatchError::PatternTooLarge {
        cells: 1 << 31,
        max: voxmatch::search::MAX_PATTERN_CELLS,
    };
    assert_eq!(
        err.to_string(),
        "pattern has 2147483648 cells, at most 2147483647 are supported"
    );
}
