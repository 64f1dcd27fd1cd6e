//! List command implementation: a LaTeX document of every book read.

use super::models::ListArgs;
use super::utils::{load_and_aggregate, print_summary, validate_paths};
use crate::aggregator::ReportOptions;
use crate::output::write_document;
use crate::render::generate_book_list;
use anyhow::{Context, Result};
use log::info;

/// Execute the list command
pub fn execute_list(args: ListArgs) -> Result<()> {
    info!("Building book list from {}", args.catalog.display());

    let (catalog, report) = load_and_aggregate(&args.catalog, &ReportOptions::default())?;

    let document = generate_book_list(&report, Some(&args.list_config));

    write_document(&document, &args.output).context("Failed to write book list")?;
    info!("✓ Book list written to: {}", args.output.display());

    if args.print_summary {
        print_summary(&catalog);
    }

    Ok(())
}

/// Validate list arguments
pub fn validate_args(args: &ListArgs) -> Result<()> {
    validate_paths(&args.catalog, &args.output)
}
