use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::{Column, ColumnValues, Dataset};
use crate::utils::{is_null_marker, normalize_header};

/// Read a CSV file into a [`Dataset`].
///
/// The first record is the header row; headers are normalized before use.
/// Column kinds are inferred from the present cells with the priority
/// integer, float, boolean, text. Empty cells and common null markers load
/// as missing values, and rows whose cells are all null markers are skipped.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        if record.iter().all(is_null_marker) {
            continue;
        }
        for (idx, cell) in record.iter().enumerate() {
            if idx < cells.len() {
                let value = if is_null_marker(cell) {
                    None
                } else {
                    Some(cell.trim().to_string())
                };
                cells[idx].push(value);
            }
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, infer_values(values)))
        .collect();

    Dataset::from_columns(columns)
        .with_context(|| format!("CSV file {} does not form a consistent table", path.display()))
}

/// Pick the strongest kind every present cell fits, then parse into it.
fn infer_values(raw: Vec<Option<String>>) -> ColumnValues {
    let present: Vec<&str> = raw.iter().flatten().map(String::as_str).collect();

    if !present.is_empty() && present.iter().all(|v| v.parse::<i64>().is_ok()) {
        return ColumnValues::Int(
            raw.iter()
                .map(|v| v.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        );
    }
    if !present.is_empty() && present.iter().all(|v| v.parse::<f64>().is_ok()) {
        return ColumnValues::Float(
            raw.iter()
                .map(|v| v.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        );
    }
    if !present.is_empty() && present.iter().all(|v| parse_bool(v).is_some()) {
        return ColumnValues::Bool(
            raw.iter()
                .map(|v| v.as_deref().and_then(parse_bool))
                .collect(),
        );
    }

    ColumnValues::Text(raw)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" => Some(true),
        "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
