//! Stats command implementation: the year report as JSON.

use super::models::StatsArgs;
use super::utils::{load_and_aggregate, print_summary, validate_paths, validate_top_authors};
use crate::aggregator::ReportOptions;
use crate::output::write_report;
use anyhow::{Context, Result};
use log::info;

/// Execute the stats command
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    let options = ReportOptions {
        top_authors: args.top_authors,
        repeat_authors_only: args.repeat_authors_only,
    };
    let (catalog, report) = load_and_aggregate(&args.catalog, &options)?;

    write_report(&report, &args.output).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output.display());

    if args.print_summary {
        print_summary(&catalog);
    }

    Ok(())
}

/// Validate stats arguments
pub fn validate_args(args: &StatsArgs) -> Result<()> {
    validate_paths(&args.catalog, &args.output)?;
    validate_top_authors(args.top_authors)
}
