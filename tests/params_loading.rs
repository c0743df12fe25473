// Parameter discovery, loading, and filtering for the paracase harness.

use std::path::Path;

use paracase::params::{
    discover_param_files, load_all_param_sets, load_param_sets, load_param_sets_or_warn,
    ParamGrid, ParamValue,
};

#[test]
fn discovers_fixture_files_in_sorted_order() {
    let files = discover_param_files("tests/params").unwrap();
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();
    assert_eq!(names, ["crops.yaml", "sizes.yaml"]);
}

#[test]
fn loads_every_fixture_set_in_file_order() {
    let sets = load_all_param_sets("tests/params").unwrap();
    let names: Vec<_> = sets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["crop_amounts", "square_sizes", "mixed"]);
}

#[test]
fn fixture_values_parse_with_expected_types() {
    let sets = load_param_sets(Path::new("tests/params/sizes.yaml")).unwrap();
    assert_eq!(sets[0].name, "square_sizes");
    assert_eq!(
        sets[0].params,
        vec![
            ParamValue::Number(50.0),
            ParamValue::Number(100.0),
            ParamValue::Number(200.0),
        ]
    );
    assert_eq!(sets[1].params[0], ParamValue::String("small".to_string()));
    assert_eq!(sets[1].params[1], ParamValue::Number(2.5));
    assert_eq!(sets[1].params[2], ParamValue::Bool(true));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_param_sets(Path::new("tests/params/absent.yaml")).unwrap_err();
    assert_eq!(err.error_code(), "paracase::params::io");
}

#[test]
fn lenient_loader_returns_empty_for_missing_root() {
    assert!(load_param_sets_or_warn("tests/no_such_dir").is_empty());
}

#[test]
fn grid_rows_feed_loaded_axes() {
    let sets = load_all_param_sets("tests/params").unwrap();
    let crops = &sets[0];
    let sizes = &sets[1];
    let rows = ParamGrid::new()
        .axis(sizes.params.iter().cloned())
        .axis(crops.params.iter().cloned())
        .rows();
    // 3 sizes x 2 crop amounts, sizes vary slowest
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].to_string(), "50_5");
    assert_eq!(rows[5].to_string(), "200_0");
}
