use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use maillist_cli::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Columns: {}", result.columns.join(", "));
    let report = &result.report;
    if !report.pruned_columns.is_empty() {
        println!("Pruned: {}", report.pruned_columns.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(report.rows_in)]);
    table.add_row(vec![
        Cell::new("Missing email"),
        drop_cell(report.missing_email()),
    ]);
    table.add_row(vec![
        Cell::new("Blocked prefix"),
        drop_cell(report.blocked_email()),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate email"),
        drop_cell(report.duplicate_email()),
    ]);
    table.add_row(vec![
        Cell::new("Written").add_attribute(Attribute::Bold),
        Cell::new(report.rows_out).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn drop_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
