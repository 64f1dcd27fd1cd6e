//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Default output paths, one per report variant
pub const DEFAULT_INFOGRAPHIC_PATH: &str = "year-in-books.svg";
pub const DEFAULT_LIST_PATH: &str = "books.tex";
pub const DEFAULT_REPORT_PATH: &str = "year-in-books.json";

/// Number of authors shown in the "Top authors" table
pub const DEFAULT_TOP_AUTHORS: usize = 5;
pub const MAX_TOP_AUTHORS: usize = 50;

/// Name of the top-level table holding the books
pub const BOOKS_TABLE: &str = "books";

/// Letters accepted as a grade, best first
pub const GRADE_LETTERS: &[char] = &['A', 'B', 'C', 'D', 'F'];

// Weeks are anchored to January 1st, so day 365 (and 366) spill into a 53rd bucket
pub const WEEKS_PER_YEAR: usize = 53;
pub const MONTHS_PER_YEAR: usize = 12;

// Page geometry: US letter at 100 px per inch
pub const PAGE_WIDTH: usize = 850;
pub const PAGE_HEIGHT: usize = 1100;
