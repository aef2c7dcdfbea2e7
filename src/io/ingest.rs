//! Workbook and CSV ingest.
//!
//! This module turns spreadsheet-shaped input into named datasets of paired
//! samples that are safe to fit.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Separation of concerns**: no fitting logic here
//!
//! Two formats are accepted:
//! - a `.json` workbook: `{ "<sheet>": { "x": [...], "y": [...] } }`, where a
//!   cell may be `null` (an empty spreadsheet cell)
//! - a `.csv` file: one sheet named after the file stem, with `x` and `y`
//!   columns

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;

use crate::domain::{Dataset, SampleSet};
use crate::error::AppError;

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub sheet: String,
    pub line: usize,
    pub message: String,
}

/// Ingest output: named datasets + row errors + row counts.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub datasets: Vec<Dataset>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load datasets from a workbook JSON or a single-sheet CSV.
pub fn load_datasets(path: &Path) -> Result<IngestedData, AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open '{}': {e}", path.display())))?;

    match ext.as_deref() {
        Some("json") => read_workbook_json(file),
        Some("csv") => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("sheet")
                .to_string();
            read_sheet_csv(file, name)
        }
        _ => Err(AppError::new(
            2,
            format!(
                "Unsupported data file '{}': expected a .json workbook or a .csv sheet.",
                path.display()
            ),
        )),
    }
}

/// One sheet's columns as stored in a workbook file. Column lengths may
/// differ; pairing is positional.
#[derive(Debug, Deserialize)]
struct SheetColumns {
    x: Vec<Option<f64>>,
    y: Vec<Option<f64>>,
}

/// Read a JSON workbook of named sheets.
///
/// Sheets are ordered by name (the file's key order is not meaningful).
pub fn read_workbook_json(reader: impl Read) -> Result<IngestedData, AppError> {
    let workbook: BTreeMap<String, SheetColumns> = serde_json::from_reader(reader)
        .map_err(|e| AppError::new(2, format!("Invalid workbook JSON: {e}")))?;

    if workbook.is_empty() {
        return Err(AppError::new(3, "Workbook contains no sheets."));
    }

    let mut datasets = Vec::with_capacity(workbook.len());
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_used = 0usize;

    for (name, columns) in workbook {
        let rows = columns.x.len().max(columns.y.len());
        let mut pairs = Vec::with_capacity(rows);

        for i in 0..rows {
            rows_read += 1;
            let x = columns.x.get(i).copied().flatten();
            let y = columns.y.get(i).copied().flatten();
            match (x, y) {
                (Some(x), Some(y)) => pairs.push((x, y)),
                _ => row_errors.push(RowError {
                    sheet: name.clone(),
                    line: i + 1,
                    message: "Incomplete pair (missing x or y cell).".to_string(),
                }),
            }
        }

        rows_used += pairs.len();
        datasets.push(Dataset {
            name,
            samples: SampleSet::from_pairs(pairs),
        });
    }

    Ok(IngestedData {
        datasets,
        row_errors,
        rows_read,
        rows_used,
    })
}

/// Read a single CSV sheet with `x` and `y` columns.
pub fn read_sheet_csv(reader: impl Read, name: String) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let x_idx = *header_map
        .get("x")
        .ok_or_else(|| AppError::new(2, "Missing required column: `x`"))?;
    let y_idx = *header_map
        .get("y")
        .ok_or_else(|| AppError::new(2, "Missing required column: `y`"))?;

    let mut pairs = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    sheet: name.clone(),
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match (parse_cell(&record, x_idx, "x"), parse_cell(&record, y_idx, "y")) {
            (Ok(x), Ok(y)) => pairs.push((x, y)),
            (Err(message), _) | (_, Err(message)) => row_errors.push(RowError {
                sheet: name.clone(),
                line,
                message,
            }),
        }
    }

    let rows_used = pairs.len();
    Ok(IngestedData {
        datasets: vec![Dataset {
            name,
            samples: SampleSet::from_pairs(pairs),
        }],
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "\u{feff}x"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_cell(record: &StringRecord, idx: usize, column: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing `{column}` value."))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("Invalid `{column}` value '{raw}'."))?;
    if !value.is_finite() {
        return Err(format!("Non-finite `{column}` value '{raw}'."));
    }
    Ok(value)
}
