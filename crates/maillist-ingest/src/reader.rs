#![deny(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use maillist_model::{CellValue, Record, Table};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn map_csv_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::Malformed {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Load a comma-separated export into a [`Table`].
///
/// The first row is the header; header names are trimmed, BOM-stripped and
/// inner-whitespace-collapsed. Cells are trimmed, with blank fields becoming
/// [`CellValue::Missing`]. A row whose field count differs from the header
/// is a malformed input and aborts the load.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_table_from_reader(path, file)
}

/// Same as [`read_table`] over any reader; `origin` labels errors.
pub fn read_table_from_reader<R: Read>(origin: &Path, source: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|error| map_csv_error(origin, error))?;
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    if columns.is_empty() {
        return Err(IngestError::Empty {
            path: origin.to_path_buf(),
        });
    }

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(|error| map_csv_error(origin, error))?;
        let cells: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        table
            .push_row(Record { cells })
            .map_err(|error| IngestError::Malformed {
                path: origin.to_path_buf(),
                message: error.to_string(),
            })?;
    }

    debug!(
        path = %origin.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "csv table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_strips_bom_and_collapses_whitespace() {
        assert_eq!(normalize_header("\u{feff}EmailPaciente"), "EmailPaciente");
        assert_eq!(normalize_header("  Procedimento   Grupo "), "Procedimento Grupo");
        assert_eq!(normalize_header("Paciente"), "Paciente");
    }

    #[test]
    fn blank_cells_become_missing() {
        let csv = "EmailPaciente,Paciente\nana@x.com,  \n";
        let table = read_table_from_reader(Path::new("<memory>"), csv.as_bytes()).unwrap();
        assert_eq!(
            table.cell(0, "EmailPaciente"),
            Some(&CellValue::Text("ana@x.com".to_string()))
        );
        assert_eq!(table.cell(0, "Paciente"), Some(&CellValue::Missing));
    }

    #[test]
    fn unequal_row_widths_are_malformed() {
        let csv = "EmailPaciente,Paciente\nana@x.com\n";
        let error = read_table_from_reader(Path::new("bad.csv"), csv.as_bytes()).unwrap_err();
        assert!(matches!(error, IngestError::Malformed { .. }));
    }
}
