//! Pipeline orchestration shared by the CLI commands and integration tests.
//!
//! The round trip is read source → normalize → write extract. Any error
//! aborts the whole run and no output artifact is produced.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use maillist_ingest::read_table;
use maillist_output::write_table;
use maillist_transform::RecordNormalizer;

use crate::logging::redact_value;
use crate::types::ProcessResult;

/// Fixed artifact name used when no explicit output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "processed_file.csv";

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub input: PathBuf,
    /// Destination override; defaults to `processed_file.csv` beside the
    /// input.
    pub output: Option<PathBuf>,
    /// Process and report without writing the extract.
    pub dry_run: bool,
}

pub fn default_output_path(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(DEFAULT_OUTPUT_NAME),
        _ => PathBuf::from(DEFAULT_OUTPUT_NAME),
    }
}

pub fn run_extract(options: &ExtractOptions) -> Result<ProcessResult> {
    let span = info_span!("extract", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_table(&options.input)
        .with_context(|| format!("read {}", options.input.display()))?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "input loaded"
    );

    let (table, report) = RecordNormalizer::new()
        .process_with_report(table)
        .context("normalize records")?;
    for dropped in &report.dropped {
        debug!(
            reason = %dropped.reason,
            address = redact_value(dropped.address.as_deref().unwrap_or("-")),
            "contact dropped"
        );
    }

    let output = if options.dry_run {
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&options.input));
        write_table(&path, &table).with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        duration_ms = start.elapsed().as_millis() as u64,
        "extract complete"
    );
    Ok(ProcessResult {
        input: options.input.clone(),
        output,
        columns: table.columns.clone(),
        report,
    })
}
