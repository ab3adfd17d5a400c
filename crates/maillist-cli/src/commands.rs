use anyhow::Result;
use comfy_table::Table;

use maillist_cli::pipeline::{ExtractOptions, run_extract};
use maillist_cli::types::ProcessResult;
use maillist_model::schema;

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    run_extract(&ExtractOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
    })
}

pub fn run_columns() -> Result<()> {
    let mut contacts = Table::new();
    contacts.set_header(vec!["Source column", "Output column"]);
    apply_table_style(&mut contacts);
    for (from, to) in schema::RENAMED_COLUMNS {
        contacts.add_row(vec![from, to]);
    }
    contacts.add_row(vec!["(derived)", schema::FIRST_NAME_COLUMN]);
    println!("Contact columns:");
    println!("{contacts}");

    let mut pruned = Table::new();
    pruned.set_header(vec!["Pruned column"]);
    apply_table_style(&mut pruned);
    for column in schema::PRUNED_COLUMNS {
        pruned.add_row(vec![column]);
    }
    println!();
    println!("Purchase columns removed from the extract:");
    println!("{pruned}");
    Ok(())
}
