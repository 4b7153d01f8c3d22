//! Hand-written cases stored as JSON under `tests/data`.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use voxmatch::{correlate, match_at, Dims, Layout, Offset, Volume, VolumeView};

#[derive(Debug, Deserialize)]
struct Extent {
    width: usize,
    height: usize,
    length: usize,
}

impl From<&Extent> for Dims {
    fn from(value: &Extent) -> Self {
        Dims::new(value.width, value.height, value.length)
    }
}

#[derive(Debug, Deserialize)]
struct SpotCheck {
    offset: [usize; 3],
    count: u32,
}

/// Pattern cells are stored in the single-placement (`Xzy`) order.
#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    grid_dims: Extent,
    grid: Vec<i32>,
    pattern_dims: Extent,
    pattern: Vec<i32>,
    #[serde(default)]
    spot_checks: Vec<SpotCheck>,
    correlation: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct Cases {
    cases: Vec<Case>,
}

fn load_cases() -> Cases {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/cases.json");
    let text = fs::read_to_string(&path).expect("read cases.json");
    serde_json::from_str(&text).expect("parse cases.json")
}

#[test]
fn fixture_cases_match_expected_counts() {
    let cases = load_cases();
    assert!(!cases.cases.is_empty());

    for case in &cases.cases {
        let grid = VolumeView::grid(&case.grid, Dims::from(&case.grid_dims)).unwrap();
        let pattern = Volume::new(
            case.pattern.clone(),
            Dims::from(&case.pattern_dims),
            Layout::Xzy,
        )
        .unwrap();

        for check in &case.spot_checks {
            let [x, y, z] = check.offset;
            let count = match_at(grid, pattern.view(), Offset::new(x, y, z)).unwrap();
            assert_eq!(count, check.count, "{}: offset {:?}", case.name, check.offset);
        }

        let scatter = pattern.to_layout(Layout::Xyz);
        let result = correlate(grid, scatter.view()).unwrap();
        assert_eq!(result.as_slice(), case.correlation.as_slice(), "{}", case.name);
    }
}
