use crate::aggregator::{build_report, ReportOptions, YearReport};
use crate::catalog::{load_catalog, Catalog};
use crate::output::read_report;
use crate::render::generate_text_summary;
use crate::utils::config::{MAX_TOP_AUTHORS, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Load a catalog and aggregate it into a report
pub fn load_and_aggregate(
    catalog_path: &Path,
    options: &ReportOptions,
) -> Result<(Catalog, YearReport)> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    let report = build_report(&catalog, options);
    info!("Report: {}", report.summary());

    Ok((catalog, report))
}

/// Print the numbered plain-text book list to stdout
pub fn print_summary(catalog: &Catalog) {
    let summary = generate_text_summary(catalog);
    if !summary.is_empty() {
        println!("{}", summary);
    }
}

/// Shared validation for catalog and output paths
pub fn validate_paths(catalog: &Path, output: &Path) -> Result<()> {
    if catalog.as_os_str().is_empty() {
        anyhow::bail!("Catalog path cannot be empty");
    }

    if output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if catalog == output {
        anyhow::bail!("Output path would overwrite the catalog: {}", output.display());
    }

    Ok(())
}

/// Shared validation for the top-authors table length
pub fn validate_top_authors(top_authors: usize) -> Result<()> {
    if top_authors == 0 {
        anyhow::bail!("top_authors must be greater than 0");
    }

    if top_authors > MAX_TOP_AUTHORS {
        anyhow::bail!("top_authors is too large (max {})", MAX_TOP_AUTHORS);
    }

    Ok(())
}

/// Validate a JSON report file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    match report.reporting_year {
        Some(year) => println!("  Year: {}", year),
        None => println!("  Year: (no finish dates)"),
    }
    println!("  Books: {}", report.total_books);
    println!("  Pages: {}", report.total_pages);
    println!("  Grades: {}", report.grades.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Year in Books v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Infographics and reading lists from a TOML book catalog.");
}
