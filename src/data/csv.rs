//! Single-column CSV extraction.
//!
//! Reads one named column out of a headered, comma-separated file. Quoting
//! and escaping are not handled; the tabular files this crate targets are
//! plain comma-delimited exports.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::DataError;
use crate::types::Sample;

/// Load one numeric column from a headered CSV file.
///
/// Empty lines are skipped; every remaining row must contain a parseable
/// number in the requested column.
///
/// # Errors
///
/// Returns `DataError` if the file cannot be read, the header lacks the
/// column, a cell fails to parse, or the column is empty.
pub fn load_numeric_column(path: &Path, column: &str) -> Result<Sample, DataError> {
    let mut values = Vec::new();
    for_each_cell(path, column, |line, cell| {
        let value: f64 = cell.parse().map_err(|_| DataError::InvalidValue {
            line,
            value: cell.to_string(),
        })?;
        values.push(value);
        Ok(())
    })?;
    if values.is_empty() {
        return Err(DataError::EmptyColumn {
            name: column.to_string(),
        });
    }
    Ok(Sample::Numeric(values))
}

/// Load one categorical column from a headered CSV file.
///
/// Cells are taken verbatim (trimmed); empty lines are skipped.
///
/// # Errors
///
/// Returns `DataError` if the file cannot be read, the header lacks the
/// column, or the column is empty.
pub fn load_categorical_column(path: &Path, column: &str) -> Result<Sample, DataError> {
    let mut labels = Vec::new();
    for_each_cell(path, column, |_, cell| {
        labels.push(cell.to_string());
        Ok(())
    })?;
    if labels.is_empty() {
        return Err(DataError::EmptyColumn {
            name: column.to_string(),
        });
    }
    Ok(Sample::Categorical(labels))
}

/// Walk the requested column, invoking `visit` with (1-indexed line, cell).
fn for_each_cell<F>(path: &Path, column: &str, mut visit: F) -> Result<(), DataError>
where
    F: FnMut(usize, &str) -> Result<(), DataError>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut column_index: Option<usize> = None;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').map(str::trim).collect();

        // First non-empty line is the header.
        let Some(index) = column_index else {
            let found: Vec<String> = cells.iter().map(|s| s.to_string()).collect();
            match cells.iter().position(|&c| c == column) {
                Some(i) => column_index = Some(i),
                None => {
                    return Err(DataError::MissingColumn {
                        name: column.to_string(),
                        found,
                    })
                }
            }
            continue;
        };

        if index >= cells.len() {
            return Err(DataError::Parse {
                line: line_num + 1,
                message: format!(
                    "expected at least {} columns, got {}",
                    index + 1,
                    cells.len()
                ),
            });
        }

        visit(line_num + 1, cells[index])?;
    }

    if column_index.is_none() {
        return Err(DataError::Parse {
            line: 1,
            message: "file has no header line".to_string(),
        });
    }

    Ok(())
}
