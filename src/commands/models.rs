use crate::render::{BookListConfig, InfographicConfig};
use crate::utils::config::{
    DEFAULT_INFOGRAPHIC_PATH, DEFAULT_LIST_PATH, DEFAULT_REPORT_PATH, DEFAULT_TOP_AUTHORS,
};
use std::path::PathBuf;

/// Arguments for the infographic command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct InfographicArgs {
    /// Path to the TOML catalog
    pub catalog: PathBuf,

    /// Output path for the SVG infographic
    pub output: PathBuf,

    /// Number of authors in the top-authors table
    pub top_authors: usize,

    /// Only list authors read more than once
    pub repeat_authors_only: bool,

    /// Infographic configuration
    pub infographic_config: InfographicConfig,

    /// Print the numbered book list to stdout
    pub print_summary: bool,
}

impl Default for InfographicArgs {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("books.toml"),
            output: PathBuf::from(DEFAULT_INFOGRAPHIC_PATH),
            top_authors: DEFAULT_TOP_AUTHORS,
            repeat_authors_only: false,
            infographic_config: InfographicConfig::default(),
            print_summary: true,
        }
    }
}

/// Arguments for the list command
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub catalog: PathBuf,

    /// Output path for the LaTeX document
    pub output: PathBuf,

    pub list_config: BookListConfig,

    pub print_summary: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("books.toml"),
            output: PathBuf::from(DEFAULT_LIST_PATH),
            list_config: BookListConfig::default(),
            print_summary: true,
        }
    }
}

/// Arguments for the stats command
#[derive(Debug, Clone)]
pub struct StatsArgs {
    pub catalog: PathBuf,

    /// Output path for the JSON report
    pub output: PathBuf,

    pub top_authors: usize,

    pub repeat_authors_only: bool,

    pub print_summary: bool,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("books.toml"),
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            top_authors: DEFAULT_TOP_AUTHORS,
            repeat_authors_only: false,
            print_summary: true,
        }
    }
}
