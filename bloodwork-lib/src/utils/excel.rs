use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::dataset::{Column, ColumnValues, Dataset};
use crate::utils::{is_null_marker, normalize_header};

/// Read the first worksheet of an XLSX file into a [`Dataset`].
pub fn read_xlsx(path: &Path) -> Result<Dataset> {
    read_xlsx_sheet(path, None)
}

/// Read a worksheet of an XLSX file into a [`Dataset`].
///
/// `sheet_name` selects the worksheet; `None` reads the first one.
pub fn read_xlsx_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Dataset> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file {}", path.display()))?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("Excel file {} has no worksheets", path.display()))?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| anyhow!("Error reading sheet '{}': {}", sheet, e))?;

    dataset_from_rows(range.rows())
}

/// Build a dataset from worksheet rows.
///
/// The first row carries the headers; later rows are data. Rows whose cells
/// are all empty are skipped, and rows shorter than the header are padded
/// with missing values. Error cells and null-marker strings also load as
/// missing. Columns mixing integer and float cells unify to float; anything
/// else non-uniform falls back to text.
pub fn dataset_from_rows<'a, I>(rows: I) -> Result<Dataset>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| normalize_header(&render_cell(cell)))
            .collect(),
        None => return Ok(Dataset::new()),
    };

    let mut cells: Vec<Vec<Option<Data>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        if is_empty_row(row) {
            continue;
        }
        for (idx, column_cells) in cells.iter_mut().enumerate() {
            let cell = row.get(idx).unwrap_or(&Data::Empty);
            column_cells.push(match cell {
                Data::Empty | Data::Error(_) => None,
                Data::String(s) if is_null_marker(s) => None,
                other => Some(other.clone()),
            });
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, column_cells)| Column::new(name, infer_column(column_cells)))
        .collect();

    Dataset::from_columns(columns).context("Worksheet rows do not form a consistent table")
}

fn is_empty_row(row: &[Data]) -> bool {
    row.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}

fn infer_column(cells: Vec<Option<Data>>) -> ColumnValues {
    let mut any_present = false;
    let mut all_int = true;
    let mut all_numeric = true;
    let mut all_bool = true;

    for cell in cells.iter().flatten() {
        any_present = true;
        match cell {
            Data::Int(_) => {
                all_bool = false;
            }
            Data::Float(_) => {
                all_int = false;
                all_bool = false;
            }
            Data::Bool(_) => {
                all_int = false;
                all_numeric = false;
            }
            _ => {
                all_int = false;
                all_numeric = false;
                all_bool = false;
            }
        }
    }

    if any_present && all_int {
        ColumnValues::Int(
            cells
                .into_iter()
                .map(|cell| match cell {
                    Some(Data::Int(i)) => Some(i),
                    _ => None,
                })
                .collect(),
        )
    } else if any_present && all_numeric {
        ColumnValues::Float(
            cells
                .into_iter()
                .map(|cell| match cell {
                    Some(Data::Int(i)) => Some(i as f64),
                    Some(Data::Float(f)) => Some(f),
                    _ => None,
                })
                .collect(),
        )
    } else if any_present && all_bool {
        ColumnValues::Bool(
            cells
                .into_iter()
                .map(|cell| match cell {
                    Some(Data::Bool(b)) => Some(b),
                    _ => None,
                })
                .collect(),
        )
    } else {
        ColumnValues::Text(
            cells
                .into_iter()
                .map(|cell| cell.map(|c| render_cell(&c)))
                .collect(),
        )
    }
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
