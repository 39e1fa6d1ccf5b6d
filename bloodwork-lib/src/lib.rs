//! Loading, validation, and reference-range processing of blood-test
//! datasets for the bloodwork ML pipeline.

mod config;
mod dataset;
mod dataset_validator;
mod logging;
mod processor;
mod reference;
pub mod utils;

// Test utilities, exposed to integration tests through the `test` feature.
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use config::Config;
pub use dataset::{Column, ColumnKind, ColumnValues, Dataset, DatasetBuilder, DatasetError};
pub use dataset_validator::{DatasetValidator, ValidationError, ValidationReport};
pub use logging::LogConfig;
pub use processor::{BloodTestProcessor, MetricSummary, ProcessorError};
pub use reference::{reference_range, RangeStatus, ReferenceRange, METRIC_RANGES};

// Crates shared with the binary.
pub use {anyhow, serde_json, tracing};

/// Default file the CLI appends failed validation reports to.
pub const ERRORS_LOG_FILE: &str = "errors.log";
