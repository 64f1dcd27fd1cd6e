//! Year in Books CLI
//!
//! Renders a year-in-books infographic, a LaTeX book list, or a JSON
//! report from a TOML catalog of books read.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use year_in_books::commands::{
    display_version, execute_infographic, execute_list, execute_stats, infographic, list, stats,
    validate_report_file, InfographicArgs, ListArgs, StatsArgs,
};
use year_in_books::render::{BookListConfig, InfographicConfig};
use year_in_books::utils::config::{
    DEFAULT_INFOGRAPHIC_PATH, DEFAULT_LIST_PATH, DEFAULT_REPORT_PATH,
};

/// Year in Books - infographics from a catalog of books read
#[derive(Parser, Debug)]
#[command(name = "year-in-books")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the year-in-books infographic (SVG)
    Infographic {
        /// Path to the TOML catalog
        catalog: PathBuf,

        /// Output path for the SVG infographic
        #[arg(short, long, default_value = DEFAULT_INFOGRAPHIC_PATH)]
        output: PathBuf,

        /// Number of authors in the top-authors table
        #[arg(long, default_value = "5")]
        top_authors: usize,

        /// Only list authors read more than once
        #[arg(long)]
        repeat_authors: bool,

        /// Infographic title (defaults to "Year in Books <year>")
        #[arg(long)]
        title: Option<String>,

        /// Reader name shown under the title
        #[arg(long, env = "YEAR_IN_BOOKS_READER")]
        reader: Option<String>,

        /// Skip the background decoration
        #[arg(long)]
        no_background: bool,

        /// Do not print the book list to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Render a plain LaTeX list of the books
    List {
        /// Path to the TOML catalog
        catalog: PathBuf,

        /// Output path for the LaTeX document
        #[arg(short, long, default_value = DEFAULT_LIST_PATH)]
        output: PathBuf,

        /// Document title (defaults to "Books read in <year>")
        #[arg(long)]
        title: Option<String>,

        /// Do not print the book list to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write every aggregate as a JSON report
    Stats {
        /// Path to the TOML catalog
        catalog: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Number of authors in the top-authors table
        #[arg(long, default_value = "5")]
        top_authors: usize,

        /// Only list authors read more than once
        #[arg(long)]
        repeat_authors: bool,

        /// Do not print the book list to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a JSON report file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Infographic {
            catalog,
            output,
            top_authors,
            repeat_authors,
            title,
            reader,
            no_background,
            quiet,
        } => {
            let mut config = InfographicConfig::new().with_background(!no_background);

            if let Some(title_str) = title {
                config = config.with_title(title_str);
            }

            if let Some(reader_str) = reader {
                config = config.with_reader(reader_str);
            }

            let args = InfographicArgs {
                catalog,
                output,
                top_authors,
                repeat_authors_only: repeat_authors,
                infographic_config: config,
                print_summary: !quiet,
            };

            // Validate args first
            infographic::validate_args(&args)?;

            execute_infographic(args)?;
        }

        Commands::List {
            catalog,
            output,
            title,
            quiet,
        } => {
            let mut list_config = BookListConfig::new();
            if let Some(title_str) = title {
                list_config = list_config.with_title(title_str);
            }

            let args = ListArgs {
                catalog,
                output,
                list_config,
                print_summary: !quiet,
            };

            list::validate_args(&args)?;
            execute_list(args)?;
        }

        Commands::Stats {
            catalog,
            output,
            top_authors,
            repeat_authors,
            quiet,
        } => {
            let args = StatsArgs {
                catalog,
                output,
                top_authors,
                repeat_authors_only: repeat_authors,
                print_summary: !quiet,
            };

            stats::validate_args(&args)?;
            execute_stats(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
