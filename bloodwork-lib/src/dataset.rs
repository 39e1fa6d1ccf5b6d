//! In-memory table abstraction for blood-test data.
//!
//! Columns are strongly typed: each declares an element kind and stores one
//! optional value per row, so absent entries survive loading instead of being
//! silently coerced.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Element kind declared by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Int,
    Float,
    Text,
    Bool,
}

impl ColumnKind {
    /// Whether values of this kind are numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Int | ColumnKind::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Int => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Bool => write!(f, "boolean"),
        }
    }
}

/// Column values, one variant per element kind.
///
/// A `None` entry is a missing value. In `Float` columns a stored NaN also
/// counts as missing, matching the NaN-as-missing convention of the data
/// files this crate ingests.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Bool(Vec<Option<bool>>),
}

impl ColumnValues {
    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int(values) => values.len(),
            ColumnValues::Float(values) => values.len(),
            ColumnValues::Text(values) => values.len(),
            ColumnValues::Bool(values) => values.len(),
        }
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared element kind.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnValues::Int(_) => ColumnKind::Int,
            ColumnValues::Float(_) => ColumnKind::Float,
            ColumnValues::Text(_) => ColumnKind::Text,
            ColumnValues::Bool(_) => ColumnKind::Bool,
        }
    }

    /// Returns true if any entry is absent (or NaN, for float columns).
    pub fn has_missing(&self) -> bool {
        match self {
            ColumnValues::Int(values) => values.iter().any(Option::is_none),
            ColumnValues::Float(values) => values.iter().any(|value| match value {
                Some(v) => v.is_nan(),
                None => true,
            }),
            ColumnValues::Text(values) => values.iter().any(Option::is_none),
            ColumnValues::Bool(values) => values.iter().any(Option::is_none),
        }
    }

    /// Numeric view of the values; `None` for non-numeric kinds.
    pub fn as_f64(&self) -> Option<Vec<Option<f64>>> {
        match self {
            ColumnValues::Int(values) => Some(
                values
                    .iter()
                    .map(|value| value.map(|v| v as f64))
                    .collect(),
            ),
            ColumnValues::Float(values) => Some(values.clone()),
            ColumnValues::Text(_) | ColumnValues::Bool(_) => None,
        }
    }
}

/// A single named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// Integer column; `None` entries are missing values.
    pub fn ints(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Column::new(name, ColumnValues::Int(values))
    }

    /// Float column; `None` entries and NaN values are missing.
    pub fn floats(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column::new(name, ColumnValues::Float(values))
    }

    /// Text column; `None` entries are missing values.
    pub fn texts(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Column::new(name, ColumnValues::Text(values))
    }

    /// Boolean column; `None` entries are missing values.
    pub fn bools(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Column::new(name, ColumnValues::Bool(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.values.kind()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has_missing(&self) -> bool {
        self.values.has_missing()
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }
}

/// Dataset construction errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("inconsistent number of rows: column '{column}' expected {expected}, got {got}")]
    InconsistentRows {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },
}

/// An in-memory table of named columns with positionally-aligned rows.
///
/// Construction enforces that all columns have the same length and that
/// column names are unique; after that the dataset is immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// An empty dataset: no columns, zero rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset from columns, checking shape and name uniqueness.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(DatasetError::DuplicateColumn {
                    name: column.name().to_string(),
                });
            }
        }

        let n_rows = columns.first().map_or(0, Column::len);
        for column in &columns {
            if column.len() != n_rows {
                return Err(DatasetError::InconsistentRows {
                    column: column.name().to_string(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        Ok(Dataset { columns, n_rows })
    }

    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset has zero rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Columns in their declared order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in their declared order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
}

/// Collects columns and validates the table shape on build.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
}

impl DatasetBuilder {
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> Result<Dataset, DatasetError> {
        Dataset::from_columns(self.columns)
    }
}
