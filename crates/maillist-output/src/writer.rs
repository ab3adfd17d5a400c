//! CSV serialization with transient-file handling.
//!
//! The extract is written to a named temporary file in the destination
//! directory and persisted onto the final path once complete, so a failed
//! write never leaves a partial artifact behind. The temporary file is
//! removed on every failure path.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use maillist_model::Table;

use crate::error::{OutputError, Result};

/// Serialize a table onto `path`, header row first, `Missing` cells as
/// empty fields, column order preserved.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_table_to_writer(&mut temp, table).map_err(|error| map_csv_error(path, error))?;
    temp.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    temp.persist(path).map_err(|error| OutputError::Io {
        path: path.to_path_buf(),
        source: error.error,
    })?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "mailing list written"
    );
    Ok(())
}

/// Serialize a table into any writer.
pub fn write_table_to_writer<W: Write>(writer: W, table: &Table) -> std::result::Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(&table.columns)?;
    for row in &table.rows {
        csv_writer.write_record(row.cells.iter().map(|cell| cell.as_text().unwrap_or("")))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize a table into a string, for in-memory transports and tests.
pub fn table_to_string(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_table_to_writer(&mut buffer, table)
        .map_err(|error| map_csv_error(Path::new("<memory>"), error))?;
    String::from_utf8(buffer).map_err(|error| OutputError::Serialize {
        path: Path::new("<memory>").to_path_buf(),
        message: error.to_string(),
    })
}

fn map_csv_error(path: &Path, error: csv::Error) -> OutputError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => OutputError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => OutputError::Serialize {
            path: path.to_path_buf(),
            message,
        },
    }
}
