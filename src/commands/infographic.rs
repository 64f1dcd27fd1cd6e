//! Infographic command implementation.
//!
//! The infographic command:
//! 1. Loads the catalog
//! 2. Aggregates it into a year report
//! 3. Renders the SVG infographic
//! 4. Writes the output file

use super::models::InfographicArgs;
use super::utils::{load_and_aggregate, print_summary, validate_paths, validate_top_authors};
use crate::aggregator::ReportOptions;
use crate::output::write_document;
use crate::render::generate_infographic;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the infographic command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written when loading or rendering fails.
pub fn execute_infographic(args: InfographicArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading and aggregating {}...", args.catalog.display());
    let options = ReportOptions {
        top_authors: args.top_authors,
        repeat_authors_only: args.repeat_authors_only,
    };
    let (catalog, report) = load_and_aggregate(&args.catalog, &options)?;

    info!("Step 2/3: Rendering infographic...");
    let svg = generate_infographic(&report, Some(&args.infographic_config))
        .context("Failed to render infographic")?;

    info!("Step 3/3: Writing output file...");
    write_document(&svg, &args.output).context("Failed to write infographic SVG")?;
    info!("✓ Infographic written to: {}", args.output.display());

    if args.print_summary {
        print_summary(&catalog);
    }

    info!(
        "Infographic completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate infographic arguments
///
/// **Public** - can be called before execute_infographic for early validation
pub fn validate_args(args: &InfographicArgs) -> Result<()> {
    validate_paths(&args.catalog, &args.output)?;
    validate_top_authors(args.top_authors)?;

    if args.infographic_config.width == 0 || args.infographic_config.height == 0 {
        anyhow::bail!("Infographic size must be non-zero");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&InfographicArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_top_authors_zero() {
        let args = InfographicArgs {
            top_authors: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_authors_too_large() {
        let args = InfographicArgs {
            top_authors: 2000,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_catalog() {
        let args = InfographicArgs {
            catalog: PathBuf::from("books.toml"),
            output: PathBuf::from("books.toml"),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = InfographicArgs {
            output: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
