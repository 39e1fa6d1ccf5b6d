//! Blood-test processing pipeline.
//!
//! [`BloodTestProcessor`] prepares raw blood panels for the downstream ML
//! stage: it loads CSV/XLSX files, validates their structure, rescales the
//! known metric columns against their reference ranges, and reports how the
//! readings classify.

use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::dataset::{Column, ColumnKind, ColumnValues, Dataset, DatasetError};
use crate::dataset_validator::{DatasetValidator, ValidationReport};
use crate::reference::{reference_range, RangeStatus, ReferenceRange, METRIC_RANGES};
use crate::utils;

/// Errors from normalizing or summarizing metric columns.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessorError {
    #[error("Metric column '{name}' not found in dataset")]
    MissingMetric { name: String },

    #[error("Metric column '{name}' holds {kind} values, expected numeric")]
    NonNumericMetric { name: String, kind: ColumnKind },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Classification counts for one metric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: String,
    pub unit: &'static str,
    /// Readings that were actually classified; missing entries are excluded.
    pub readings: usize,
    pub below_normal: usize,
    pub within_normal: usize,
    pub above_normal: usize,
}

/// Prepares blood-test tables for model consumption.
pub struct BloodTestProcessor {
    config: Config,
}

impl BloodTestProcessor {
    pub fn new(config: Config) -> Self {
        debug!(model = %config.model_name, "blood test processor ready");
        BloodTestProcessor { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load a blood-test table from a CSV or XLSX file, picked by extension.
    ///
    /// `sheet_name` applies to XLSX input only; `None` reads the first sheet.
    pub fn load(&self, path: &Path, sheet_name: Option<&str>) -> Result<Dataset> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let dataset = match extension.as_deref() {
            Some("csv") => utils::read_csv(path)?,
            Some("xlsx") => utils::read_xlsx_sheet(path, sheet_name)?,
            _ => {
                return Err(anyhow!(
                    "Unsupported input format for {} (expected .csv or .xlsx)",
                    path.display()
                ))
            }
        };

        info!(
            rows = dataset.n_rows(),
            columns = dataset.n_columns(),
            "Loaded blood test data from {}",
            path.display()
        );
        Ok(dataset)
    }

    /// Check that the known metric columns are present and numeric, and that
    /// the table has no missing values.
    pub fn validate(&self, dataset: &Dataset) -> ValidationReport {
        DatasetValidator::new()
            .require_columns(METRIC_RANGES.iter().map(|(name, _)| *name))
            .require_numeric(METRIC_RANGES.iter().map(|(name, _)| *name))
            .validate(dataset)
    }

    /// Replace each known metric column with its position inside the
    /// reference range (0 at the low bound, 1 at the high bound).
    ///
    /// Missing entries stay missing and other columns pass through untouched.
    /// All known metric columns must be present and numeric.
    pub fn normalize(&self, dataset: &Dataset) -> Result<Dataset, ProcessorError> {
        for (name, _) in &METRIC_RANGES {
            if !dataset.has_column(name) {
                return Err(ProcessorError::MissingMetric {
                    name: (*name).to_string(),
                });
            }
        }

        let mut columns = Vec::with_capacity(dataset.n_columns());
        for column in dataset.columns() {
            match reference_range(column.name()) {
                Some(range) => columns.push(normalize_column(column, &range)?),
                None => columns.push(column.clone()),
            }
        }

        let normalized = Dataset::from_columns(columns)?;
        debug!(
            rows = normalized.n_rows(),
            "normalized metric columns against reference ranges"
        );
        Ok(normalized)
    }

    /// Classification counts for each known metric column, over the raw
    /// (un-normalized) readings.
    pub fn summarize(&self, dataset: &Dataset) -> Result<Vec<MetricSummary>, ProcessorError> {
        METRIC_RANGES
            .iter()
            .map(|(name, range)| summarize_metric(dataset, name, range))
            .collect()
    }
}

fn normalize_column(column: &Column, range: &ReferenceRange) -> Result<Column, ProcessorError> {
    let values = column
        .values()
        .as_f64()
        .ok_or_else(|| ProcessorError::NonNumericMetric {
            name: column.name().to_string(),
            kind: column.kind(),
        })?;

    let normalized = values
        .into_iter()
        .map(|value| value.map(|v| range.normalize(v)))
        .collect();

    Ok(Column::new(column.name(), ColumnValues::Float(normalized)))
}

fn summarize_metric(
    dataset: &Dataset,
    name: &str,
    range: &ReferenceRange,
) -> Result<MetricSummary, ProcessorError> {
    let column = dataset
        .column(name)
        .ok_or_else(|| ProcessorError::MissingMetric {
            name: name.to_string(),
        })?;
    let values = column
        .values()
        .as_f64()
        .ok_or_else(|| ProcessorError::NonNumericMetric {
            name: name.to_string(),
            kind: column.kind(),
        })?;

    let mut summary = MetricSummary {
        metric: name.to_string(),
        unit: range.unit,
        readings: 0,
        below_normal: 0,
        within_normal: 0,
        above_normal: 0,
    };

    for value in values.into_iter().flatten() {
        if value.is_nan() {
            continue;
        }
        summary.readings += 1;
        match range.classify(value) {
            RangeStatus::BelowNormal => summary.below_normal += 1,
            RangeStatus::Normal => summary.within_normal += 1,
            RangeStatus::AboveNormal => summary.above_normal += 1,
        }
    }

    Ok(summary)
}
