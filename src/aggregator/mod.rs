//! Aggregation of catalog records into summary statistics.
//!
//! This module computes:
//! - Totals and top-N frequency tables (authors, genres, media, ...)
//! - Grade distributions ordered by grade rank
//! - Per-day, per-week and per-month finish histograms
//! - The combined, serializable year report

pub mod frequency;
pub mod periods;
pub mod report;

// Re-export main types and functions
pub use frequency::{
    attribute_frequency, grade_distribution, top_authors, top_repeat_authors, total_books,
    total_pages, FrequencyTable, LabelCount,
};
pub use periods::{
    daily_histogram, finished_dates_sorted, monthly_histogram, reporting_year, weekly_histogram,
};
pub use report::{build_report, BookEntry, PeriodCounts, ReportOptions, YearReport};
