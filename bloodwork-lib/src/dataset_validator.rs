//! Structural validation of tabular blood-test data.
//!
//! The validator runs a fixed sequence of checks over a [`Dataset`] and
//! collects every failure into a [`ValidationReport`]; it never aborts on the
//! first problem. Checks run in this order:
//!
//! 1. emptiness (a dataset with zero rows fails immediately),
//! 2. presence of the required columns,
//! 3. numeric kind of the declared numeric columns,
//! 4. missing values anywhere in the table.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::dataset::Dataset;

/// A single failed validation check.
///
/// The display form is what lands in [`ValidationReport::errors`], so the
/// message formats here are load-bearing for anything that parses reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Dataset is empty.")]
    EmptyDataset,

    #[error("Missing columns: {columns:?}")]
    MissingColumns { columns: Vec<String> },

    #[error("Non-numeric columns: {columns:?}")]
    NonNumericColumns { columns: Vec<String> },

    #[error("Column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("Columns with NaN values: {columns:?}")]
    NanColumns { columns: Vec<String> },
}

// Reports serialize errors as their display strings, so the JSON form is a
// plain list of messages.
impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Outcome of validating one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True exactly when `errors` is empty.
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    /// Human-readable list of the checks that ran. `None` only when the
    /// dataset was empty and no checks ran at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_summary: Option<String>,
}

impl ValidationReport {
    fn empty_dataset() -> Self {
        ValidationReport {
            is_valid: false,
            errors: vec![ValidationError::EmptyDataset],
            validation_summary: None,
        }
    }

    fn from_checks(errors: Vec<ValidationError>, checks_performed: Vec<String>) -> Self {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            validation_summary: Some(checks_performed.join(", ")),
        }
    }
}

/// Configurable structural validator for blood-test datasets.
///
/// Built once with the column checks to run, then applied to any number of
/// datasets:
///
/// ```
/// use bloodwork_lib::{Column, Dataset, DatasetValidator};
///
/// let dataset = Dataset::builder()
///     .column(Column::ints("id", vec![Some(1), Some(2)]))
///     .column(Column::floats("value", vec![Some(10.5), Some(20.1)]))
///     .build()
///     .unwrap();
///
/// let report = DatasetValidator::new()
///     .require_columns(["id", "value"])
///     .require_numeric(["value"])
///     .validate(&dataset);
///
/// assert!(report.is_valid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetValidator {
    required_columns: Vec<String>,
    numeric_columns: Vec<String>,
}

impl DatasetValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns that must be present. An empty list disables the check.
    pub fn require_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Columns that must hold numeric values. An empty list disables the
    /// check.
    pub fn require_numeric<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Run all checks against `dataset` and collect the failures.
    ///
    /// An empty dataset short-circuits: the report carries the single
    /// emptiness error and no summary. Otherwise every enabled check runs and
    /// the summary records each one, whether it passed or not.
    pub fn validate(&self, dataset: &Dataset) -> ValidationReport {
        if dataset.is_empty() {
            return ValidationReport::empty_dataset();
        }

        let mut errors = Vec::new();
        let mut checks_performed = Vec::new();

        if !self.required_columns.is_empty() {
            let missing: Vec<String> = self
                .required_columns
                .iter()
                .filter(|name| !dataset.has_column(name.as_str()))
                .cloned()
                .collect();
            if !missing.is_empty() {
                errors.push(ValidationError::MissingColumns { columns: missing });
            }
            checks_performed.push(format!(
                "checked {} required column(s)",
                self.required_columns.len()
            ));
        }

        if !self.numeric_columns.is_empty() {
            let mut non_numeric = Vec::new();
            for name in &self.numeric_columns {
                match dataset.column(name) {
                    Some(column) if column.kind().is_numeric() => {}
                    Some(_) => non_numeric.push(name.clone()),
                    None => errors.push(ValidationError::ColumnNotFound { name: name.clone() }),
                }
            }
            if !non_numeric.is_empty() {
                errors.push(ValidationError::NonNumericColumns {
                    columns: non_numeric,
                });
            }
            checks_performed.push(format!(
                "checked {} numeric column(s)",
                self.numeric_columns.len()
            ));
        }

        let with_missing: Vec<String> = dataset
            .columns()
            .iter()
            .filter(|column| column.has_missing())
            .map(|column| column.name().to_string())
            .collect();
        if !with_missing.is_empty() {
            errors.push(ValidationError::NanColumns {
                columns: with_missing,
            });
        }
        checks_performed.push(format!(
            "checked {} column(s) for NaN values",
            dataset.n_columns()
        ));

        ValidationReport::from_checks(errors, checks_performed)
    }
}
