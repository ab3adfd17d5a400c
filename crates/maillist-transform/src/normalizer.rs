//! The record-normalization pipeline.
//!
//! Stages run in a fixed order: prune purchase columns, drop invalid
//! contacts, dedupe by email, rename to the output schema, derive the
//! first-name column. Filtering and dedupe operate on the pre-rename column
//! names; the derived column is inserted after renaming.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use maillist_model::{CellValue, Table, schema};

use crate::error::{Result, TransformError};
use crate::text::{first_name, is_blocked_email};

/// Why a contact was removed from the extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingEmail,
    BlockedPrefix,
    DuplicateEmail,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingEmail => write!(f, "missing email"),
            DropReason::BlockedPrefix => write!(f, "blocked prefix"),
            DropReason::DuplicateEmail => write!(f, "duplicate email"),
        }
    }
}

/// One removed contact, for the drop audit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DroppedContact {
    pub reason: DropReason,
    /// The offending address; absent for missing-email drops.
    pub address: Option<String>,
}

/// Per-stage accounting for one `process` invocation.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct NormalizeReport {
    pub rows_in: usize,
    pub rows_out: usize,
    /// Pruned column names, in table order.
    pub pruned_columns: Vec<String>,
    pub dropped: Vec<DroppedContact>,
}

impl NormalizeReport {
    pub fn missing_email(&self) -> usize {
        self.count(DropReason::MissingEmail)
    }

    pub fn blocked_email(&self) -> usize {
        self.count(DropReason::BlockedPrefix)
    }

    pub fn duplicate_email(&self) -> usize {
        self.count(DropReason::DuplicateEmail)
    }

    fn count(&self, reason: DropReason) -> usize {
        self.dropped
            .iter()
            .filter(|contact| contact.reason == reason)
            .count()
    }
}

/// Applies the full filter/dedupe/reshape/derive pipeline to a loaded table.
///
/// Pure transform: deterministic for a given input, no I/O, no shared state.
/// Concurrent invocations on independent tables are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Run the pipeline and return the cleaned table.
    pub fn process(&self, table: Table) -> Result<Table> {
        self.process_with_report(table).map(|(table, _)| table)
    }

    /// Run the pipeline and return the cleaned table with per-stage counts.
    pub fn process_with_report(&self, mut table: Table) -> Result<(Table, NormalizeReport)> {
        let mut report = NormalizeReport {
            rows_in: table.row_count(),
            ..NormalizeReport::default()
        };

        report.pruned_columns = table.drop_columns(&schema::PRUNED_COLUMNS);
        debug!(
            pruned = report.pruned_columns.len(),
            "purchase columns pruned"
        );

        let email_index = identity_column(&table)?;
        filter_invalid(&mut table, email_index, &mut report);
        dedupe_by_email(&mut table, email_index, &mut report);
        rename_columns(&mut table);
        derive_first_name(&mut table)?;

        report.rows_out = table.row_count();
        info!(
            rows_in = report.rows_in,
            rows_out = report.rows_out,
            missing_email = report.missing_email(),
            blocked_email = report.blocked_email(),
            duplicate_email = report.duplicate_email(),
            "normalization complete"
        );
        Ok((table, report))
    }
}

/// The identity column: `EmailPaciente` on raw exports, `EmailAddress` on
/// already-renamed output.
fn identity_column(table: &Table) -> Result<usize> {
    table
        .column_index(schema::EMAIL_SOURCE)
        .or_else(|| table.column_index(schema::EMAIL_OUTPUT))
        .ok_or_else(|| TransformError::MissingColumn {
            column: schema::EMAIL_SOURCE.to_string(),
        })
}

/// Drop records whose email is missing or starts with a blocked prefix.
fn filter_invalid(table: &mut Table, email_index: usize, report: &mut NormalizeReport) {
    let rows = std::mem::take(&mut table.rows);
    let mut kept = Vec::with_capacity(rows.len());
    for record in rows {
        match record.cells[email_index].as_text() {
            None => report.dropped.push(DroppedContact {
                reason: DropReason::MissingEmail,
                address: None,
            }),
            Some(address) if is_blocked_email(address) => report.dropped.push(DroppedContact {
                reason: DropReason::BlockedPrefix,
                address: Some(address.to_string()),
            }),
            Some(_) => kept.push(record),
        }
    }
    table.rows = kept;
    debug!(
        missing = report.missing_email(),
        blocked = report.blocked_email(),
        "invalid contacts filtered"
    );
}

/// Keep the first record per email, in table order. Grouping is by the exact
/// post-filter string: the case-insensitive comparison belongs to the prefix
/// filter only, so `Ana@X.com` and `ana@x.com` are distinct identities here.
fn dedupe_by_email(table: &mut Table, email_index: usize, report: &mut NormalizeReport) {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let rows = std::mem::take(&mut table.rows);
    let mut kept = Vec::with_capacity(rows.len());
    for record in rows {
        match record.cells[email_index].as_text() {
            Some(address) if !seen.insert(address.to_string()) => {
                report.dropped.push(DroppedContact {
                    reason: DropReason::DuplicateEmail,
                    address: Some(address.to_string()),
                });
            }
            _ => kept.push(record),
        }
    }
    table.rows = kept;
    debug!(
        duplicates = report.duplicate_email(),
        "duplicate contacts removed"
    );
}

fn rename_columns(table: &mut Table) {
    for (from, to) in schema::RENAMED_COLUMNS {
        table.rename_column(from, to);
    }
}

/// Insert `FirstName` at position 1 (clamped when fewer columns precede it),
/// derived from the renamed `Name` column. A table that already carries the
/// column, as on a re-run over clean output, gets its values recomputed in
/// place instead of a second column.
fn derive_first_name(table: &mut Table) -> Result<()> {
    let name_index = table.column_index(schema::NAME_OUTPUT);
    let existing = table.column_index(schema::FIRST_NAME_COLUMN);
    let values: Vec<CellValue> = table
        .rows
        .iter()
        .map(|record| {
            let derived = name_index
                .and_then(|index| record.cells[index].as_text())
                .map(first_name)
                .unwrap_or_default();
            CellValue::from_raw(&derived)
        })
        .collect();
    match existing {
        Some(index) => {
            for (record, value) in table.rows.iter_mut().zip(values) {
                record.cells[index] = value;
            }
        }
        None => {
            let position = schema::FIRST_NAME_POSITION.min(table.column_count());
            table.insert_column(position, schema::FIRST_NAME_COLUMN, values)?;
        }
    }
    Ok(())
}
