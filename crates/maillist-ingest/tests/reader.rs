//! File-based ingestion tests.

use std::io::Write;
use std::path::Path;

use maillist_ingest::{IngestError, read_table, read_table_from_reader};
use maillist_model::CellValue;

#[test]
fn reads_export_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(
        &path,
        "EmailPaciente,Paciente,Marca\nana@x.com,Ana Souza,Acme\n , Bruno ,Acme\n",
    )
    .unwrap();

    let table = read_table(&path).unwrap();
    assert_eq!(
        table.columns,
        vec![
            "EmailPaciente".to_string(),
            "Paciente".to_string(),
            "Marca".to_string()
        ]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, "EmailPaciente"), Some(&CellValue::Missing));
    assert_eq!(
        table.cell(1, "Paciente"),
        Some(&CellValue::Text("Bruno".to_string()))
    );
}

#[test]
fn bom_prefixed_header_is_cleaned() {
    let mut bytes = Vec::new();
    bytes.write_all(b"\xef\xbb\xbfEmailPaciente,Paciente\n").unwrap();
    bytes.write_all(b"ana@x.com,Ana\n").unwrap();

    let table = read_table_from_reader(Path::new("<memory>"), bytes.as_slice()).unwrap();
    assert_eq!(table.columns[0], "EmailPaciente");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = read_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, IngestError::FileRead { .. }));
}

#[test]
fn empty_file_has_no_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();
    let error = read_table(&path).unwrap_err();
    assert!(matches!(error, IngestError::Empty { .. }));
}

#[test]
fn header_only_export_is_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.csv");
    std::fs::write(&path, "EmailPaciente,Paciente\n").unwrap();
    let table = read_table(&path).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.column_count(), 2);
}
