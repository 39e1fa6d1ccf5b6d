//! Tests for building datasets out of worksheet rows

use bloodwork_lib::utils::dataset_from_rows;
use bloodwork_lib::{ColumnKind, ColumnValues};
use calamine::Data;

#[test]
fn test_first_row_becomes_normalized_headers() {
    let raw: Vec<Vec<Data>> = vec![
        vec![
            Data::String("  patient   id ".to_string()),
            Data::String("glucose".to_string()),
        ],
        vec![Data::Int(1), Data::Float(88.0)],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(dataset.column_names(), vec!["patient id", "glucose"]);
    assert_eq!(dataset.n_rows(), 1);
}

#[test]
fn test_mixed_int_and_float_cells_unify_to_float() {
    let raw: Vec<Vec<Data>> = vec![
        vec![Data::String("glucose".to_string())],
        vec![Data::Int(88)],
        vec![Data::Float(95.5)],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(
        dataset.column("glucose").unwrap().values(),
        &ColumnValues::Float(vec![Some(88.0), Some(95.5)])
    );
}

#[test]
fn test_empty_and_error_cells_load_as_missing() {
    let raw: Vec<Vec<Data>> = vec![
        vec![
            Data::String("id".to_string()),
            Data::String("value".to_string()),
        ],
        vec![Data::Int(1), Data::Empty],
        vec![Data::Int(2), Data::Float(20.1)],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(
        dataset.column("value").unwrap().values(),
        &ColumnValues::Float(vec![None, Some(20.1)])
    );
}

#[test]
fn test_null_marker_strings_load_as_missing() {
    let raw: Vec<Vec<Data>> = vec![
        vec![Data::String("category".to_string())],
        vec![Data::String("A".to_string())],
        vec![Data::String("NaN".to_string())],
        vec![Data::String("B".to_string())],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(
        dataset.column("category").unwrap().values(),
        &ColumnValues::Text(vec![
            Some("A".to_string()),
            None,
            Some("B".to_string()),
        ])
    );
}

#[test]
fn test_blank_rows_are_skipped() {
    let raw: Vec<Vec<Data>> = vec![
        vec![Data::String("id".to_string())],
        vec![Data::Int(1)],
        vec![Data::Empty],
        vec![Data::String("   ".to_string())],
        vec![Data::Int(2)],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(
        dataset.column("id").unwrap().values(),
        &ColumnValues::Int(vec![Some(1), Some(2)])
    );
}

#[test]
fn test_short_rows_are_padded_with_missing_values() {
    let raw: Vec<Vec<Data>> = vec![
        vec![
            Data::String("id".to_string()),
            Data::String("value".to_string()),
        ],
        vec![Data::Int(1)],
        vec![Data::Int(2), Data::Float(20.1)],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(
        dataset.column("value").unwrap().values(),
        &ColumnValues::Float(vec![None, Some(20.1)])
    );
}

#[test]
fn test_bool_cells_build_bool_columns() {
    let raw: Vec<Vec<Data>> = vec![
        vec![Data::String("fasting".to_string())],
        vec![Data::Bool(true)],
        vec![Data::Bool(false)],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(dataset.column("fasting").unwrap().kind(), ColumnKind::Bool);
}

#[test]
fn test_mixed_kind_columns_fall_back_to_text() {
    let raw: Vec<Vec<Data>> = vec![
        vec![Data::String("notes".to_string())],
        vec![Data::Int(1)],
        vec![Data::String("recheck".to_string())],
    ];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(
        dataset.column("notes").unwrap().values(),
        &ColumnValues::Text(vec![Some("1".to_string()), Some("recheck".to_string())])
    );
}

#[test]
fn test_no_rows_at_all_build_an_empty_dataset() {
    let raw: Vec<Vec<Data>> = vec![];

    let dataset = dataset_from_rows(raw.iter().map(Vec::as_slice)).unwrap();

    assert!(dataset.is_empty());
    assert_eq!(dataset.n_columns(), 0);
}

#[test]
fn test_duplicate_headers_are_rejected() {
    let raw: Vec<Vec<Data>> = vec![
        vec![
            Data::String("id".to_string()),
            Data::String("id".to_string()),
        ],
        vec![Data::Int(1), Data::Int(2)],
    ];

    let result = dataset_from_rows(raw.iter().map(Vec::as_slice));

    assert!(result.is_err());
    assert!(result.unwrap_err().root_cause().to_string().contains("id"));
}
