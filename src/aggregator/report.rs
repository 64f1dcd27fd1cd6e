//! The year report: every aggregate of a catalog in one serializable value.
//!
//! Renderers and the JSON writer consume this instead of the catalog, so
//! presentation never reaches back into raw records.

use super::frequency::{
    attribute_frequency, grade_distribution, top_authors, top_repeat_authors, total_books,
    total_pages, LabelCount,
};
use super::periods::{daily_counts, finished_dates_sorted, monthly_counts, weekly_counts};
use crate::catalog::{Attribute, Book, Catalog};
use crate::utils::config::{DEFAULT_TOP_AUTHORS, REPORT_SCHEMA_VERSION};
use crate::utils::error::AggregateError;
use chrono::{Datelike, NaiveDate, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Options controlling which aggregates go into the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Length of the top-authors table
    pub top_authors: usize,

    /// Only list authors read more than once (falls back when there are none)
    pub repeat_authors_only: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_authors: DEFAULT_TOP_AUTHORS,
            repeat_authors_only: false,
        }
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearReport {
    /// Schema version for compatibility checking
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reader: Option<String>,

    /// Year of the earliest finish date, if any book has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_year: Option<i32>,

    pub total_books: usize,
    pub total_pages: u64,

    /// Length of the top-authors table that was asked for
    #[serde(default = "default_top_authors")]
    pub top_authors_requested: usize,
    pub top_authors: Vec<LabelCount>,
    pub genres: Vec<LabelCount>,
    pub via: Vec<LabelCount>,
    pub media: Vec<LabelCount>,
    pub formats: Vec<LabelCount>,

    /// Best grade first
    pub grades: Vec<LabelCount>,

    /// Absent when no book has a finish date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<PeriodCounts>,

    /// Display strings for each book, in catalog order
    pub books: Vec<BookEntry>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

fn default_top_authors() -> usize {
    DEFAULT_TOP_AUTHORS
}

/// Finish-date histograms for the reporting year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCounts {
    pub first_finished: NaiveDate,
    pub last_finished: NaiveDate,
    pub monthly: Vec<usize>,
    pub weekly: Vec<usize>,
    pub daily: Vec<usize>,
}

/// Per-book strings handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub authors: String,
    pub genres: String,
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl From<&Book> for BookEntry {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            authors: book.author_display(),
            genres: book.genres.join(", "),
            media: book.media.join(", "),
            finished: book.finished,
            grade: book.grade.clone(),
        }
    }
}

/// Build the full report for a catalog
///
/// **Public** - main entry point for aggregation
///
/// Period aggregates are the only ones that can fail; when no book has a
/// finish date they are left out and the rest of the report still builds.
pub fn build_report(catalog: &Catalog, options: &ReportOptions) -> YearReport {
    debug!("Building report for {} books", catalog.len());

    let top = if options.repeat_authors_only {
        top_repeat_authors(catalog, options.top_authors)
    } else {
        top_authors(catalog, options.top_authors)
    };

    let periods = match period_counts(catalog) {
        Ok(periods) => Some(periods),
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    let table = |attribute| attribute_frequency(catalog, attribute).most_common(usize::MAX);

    YearReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        reader: catalog.reader().map(str::to_string),
        reporting_year: periods.as_ref().map(|p| p.first_finished.year()),
        total_books: total_books(catalog),
        total_pages: total_pages(catalog),
        top_authors_requested: options.top_authors,
        top_authors: top,
        genres: table(Attribute::Genre),
        via: table(Attribute::Via),
        media: table(Attribute::Media),
        formats: table(Attribute::Format),
        grades: grade_distribution(catalog),
        periods,
        books: catalog.iter().map(BookEntry::from).collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Compute every period aggregate from one pass over the finish dates
///
/// **Private** - internal helper for build_report
fn period_counts(catalog: &Catalog) -> Result<PeriodCounts, AggregateError> {
    let dates = finished_dates_sorted(catalog)?;
    let first_finished = dates[0];
    let last_finished = dates[dates.len() - 1];
    let year = first_finished.year();

    Ok(PeriodCounts {
        first_finished,
        last_finished,
        monthly: monthly_counts(&dates, year),
        weekly: weekly_counts(&dates, year),
        daily: daily_counts(&dates, year),
    })
}

impl YearReport {
    /// Human-readable one-line summary for logging
    pub fn summary(&self) -> String {
        let year = self
            .reporting_year
            .map_or_else(|| "undated".to_string(), |y| y.to_string());
        let top = self
            .top_authors
            .first()
            .map_or_else(|| "-".to_string(), |a| format!("{} ({})", a.label, a.count));

        format!(
            "Year: {} | Books: {} | Pages: {} | Top author: {} | Genres: {}",
            year,
            self.total_books,
            self.total_pages,
            top,
            self.genres.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::periods::{daily_histogram, monthly_histogram, weekly_histogram};
    use crate::catalog::Book;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_report_without_dates_skips_periods() {
        let catalog = Catalog::new(vec![
            Book::new("a", "A", "X").with_pages(10),
            Book::new("b", "B", "Y"),
        ])
        .unwrap();

        let report = build_report(&catalog, &ReportOptions::default());

        assert_eq!(report.total_books, 2);
        assert_eq!(report.total_pages, 10);
        assert!(report.periods.is_none());
        assert!(report.reporting_year.is_none());
    }

    #[test]
    fn test_report_periods_and_entries() {
        let catalog = Catalog::new(vec![
            Book::new("a", "A", "X")
                .with_finished(date(2021, 3, 1))
                .with_genres(["sf", "classic"]),
            Book::new("b", "B", "Y").with_finished(date(2021, 1, 10)),
        ])
        .unwrap()
        .with_reader(Some("Jane".to_string()));

        let report = build_report(&catalog, &ReportOptions::default());
        let periods = report.periods.as_ref().unwrap();

        assert_eq!(report.reporting_year, Some(2021));
        assert_eq!(report.reader.as_deref(), Some("Jane"));
        assert_eq!(periods.first_finished, date(2021, 1, 10));
        assert_eq!(periods.last_finished, date(2021, 3, 1));
        assert_eq!(periods.monthly[0], 1);
        assert_eq!(periods.monthly[2], 1);
        assert_eq!(report.books[0].genres, "sf, classic");
        assert!(report.summary().contains("Books: 2"));
    }

    #[test]
    fn test_period_counts_match_histograms() {
        let catalog = Catalog::new(vec![
            Book::new("a", "A", "X").with_finished(date(2020, 12, 31)),
            Book::new("b", "B", "Y").with_finished(date(2020, 2, 29)),
            Book::new("c", "C", "Z").with_finished(date(2021, 1, 1)),
        ])
        .unwrap();

        let report = build_report(&catalog, &ReportOptions::default());
        let periods = report.periods.unwrap();

        assert_eq!(periods.monthly, monthly_histogram(&catalog).unwrap());
        assert_eq!(periods.weekly, weekly_histogram(&catalog).unwrap());
        assert_eq!(periods.daily, daily_histogram(&catalog).unwrap());
        assert_eq!(periods.last_finished, date(2021, 1, 1));
        assert_eq!(periods.monthly.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_report_keeps_requested_top_authors() {
        let catalog = Catalog::new(vec![Book::new("a", "A", "X")]).unwrap();
        let options = ReportOptions {
            top_authors: 5,
            repeat_authors_only: false,
        };

        let report = build_report(&catalog, &options);

        assert_eq!(report.top_authors_requested, 5);
        assert_eq!(report.top_authors.len(), 1);
    }
}
