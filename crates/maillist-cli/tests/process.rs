//! End-to-end tests for the extract round trip.

use maillist_cli::pipeline::{ExtractOptions, default_output_path, run_extract};

const EXPORT: &str = "\
DiaCompra,EmailPaciente,Paciente,Marca,DataOrcamento,ValorCompra
12,teste@x.com,Ana Souza,Acme,2024-01-05,150
13,ana@x.com,Ana Souza,Acme,2024-01-06,200
14,ana@x.com,Ana Souza Dup,Acme,2024-01-07,90
15,,Carlos Lima,Beta,2024-01-08,75
16,bruno@y.com,BRUNO LIMA,Beta,2024-01-09,120
";

#[test]
fn round_trip_writes_the_cleaned_extract() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    std::fs::write(&input, EXPORT).unwrap();

    let result = run_extract(&ExtractOptions {
        input: input.clone(),
        output: None,
        dry_run: false,
    })
    .unwrap();

    let output = result.output.as_deref().expect("extract written");
    assert_eq!(output, dir.path().join("processed_file.csv"));
    assert_eq!(output, default_output_path(&input));

    let written = std::fs::read_to_string(output).unwrap();
    assert_eq!(
        written,
        "EmailAddress,FirstName,Name,InterestBrand,Date\n\
         ana@x.com,Ana,Ana Souza,Acme,2024-01-06\n\
         bruno@y.com,Bruno,BRUNO LIMA,Beta,2024-01-09\n"
    );

    assert_eq!(result.report.rows_in, 5);
    assert_eq!(result.report.rows_out, 2);
    assert_eq!(result.report.missing_email(), 1);
    assert_eq!(result.report.blocked_email(), 1);
    assert_eq!(result.report.duplicate_email(), 1);
    assert_eq!(
        result.report.pruned_columns,
        vec!["DiaCompra".to_string(), "ValorCompra".to_string()]
    );
}

#[test]
fn explicit_output_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    let output = dir.path().join("mailing.csv");
    std::fs::write(&input, EXPORT).unwrap();

    let result = run_extract(&ExtractOptions {
        input,
        output: Some(output.clone()),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(result.output.as_deref(), Some(output.as_path()));
    assert!(output.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    std::fs::write(&input, EXPORT).unwrap();

    let result = run_extract(&ExtractOptions {
        input: input.clone(),
        output: None,
        dry_run: true,
    })
    .unwrap();

    assert!(result.output.is_none());
    assert_eq!(result.report.rows_out, 2);
    assert!(!default_output_path(&input).exists());
}

#[test]
fn missing_identity_column_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    std::fs::write(&input, "Paciente,Marca\nAna Souza,Acme\n").unwrap();

    let error = run_extract(&ExtractOptions {
        input: input.clone(),
        output: None,
        dry_run: false,
    })
    .unwrap_err();

    assert!(error.to_string().contains("normalize records"));
    assert!(
        error
            .chain()
            .any(|cause| cause.to_string().contains("EmailPaciente"))
    );
    assert!(!default_output_path(&input).exists());
}

#[test]
fn malformed_export_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    std::fs::write(&input, "EmailPaciente,Paciente\nana@x.com\n").unwrap();

    let error = run_extract(&ExtractOptions {
        input: input.clone(),
        output: None,
        dry_run: false,
    })
    .unwrap_err();

    assert!(
        error
            .chain()
            .any(|cause| cause.to_string().contains("malformed CSV"))
    );
    assert!(!default_output_path(&input).exists());
}
