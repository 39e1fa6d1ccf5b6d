//! Tests for the empty-dataset short-circuit

use bloodwork_lib::{Column, Dataset, DatasetValidator, ValidationError};

#[test]
fn test_empty_dataset_fails_with_the_single_emptiness_error() {
    let report = DatasetValidator::new().validate(&Dataset::new());

    assert!(!report.is_valid);
    assert_eq!(report.errors, vec![ValidationError::EmptyDataset]);
    assert_eq!(report.errors[0].to_string(), "Dataset is empty.");
    assert_eq!(report.validation_summary, None);
}

#[test]
fn test_empty_dataset_ignores_requested_checks() {
    // Required/numeric lists must not change the outcome for empty input.
    let report = DatasetValidator::new()
        .require_columns(["id", "value"])
        .require_numeric(["value"])
        .validate(&Dataset::new());

    assert!(!report.is_valid);
    assert_eq!(report.errors, vec![ValidationError::EmptyDataset]);
    assert_eq!(report.validation_summary, None);
}

#[test]
fn test_zero_row_dataset_with_columns_is_still_empty() {
    let dataset = Dataset::builder()
        .column(Column::ints("id", vec![]))
        .column(Column::floats("value", vec![]))
        .build()
        .unwrap();

    let report = DatasetValidator::new()
        .require_columns(["id"])
        .validate(&dataset);

    assert!(!report.is_valid);
    assert_eq!(report.errors, vec![ValidationError::EmptyDataset]);
    assert_eq!(report.validation_summary, None);
}

#[test]
fn test_single_row_dataset_is_not_empty() {
    let dataset = Dataset::builder()
        .column(Column::ints("id", vec![Some(1)]))
        .build()
        .unwrap();

    let report = DatasetValidator::new().validate(&dataset);

    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.validation_summary.is_some());
}
