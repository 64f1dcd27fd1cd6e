//! Per-day, per-week and per-month histograms of finish dates.
//!
//! All histograms cover the reporting year, the calendar year of the
//! earliest `finished` date. Books finished in any other year are still
//! counted by the totals but dropped from the histograms, with a warning.

use crate::catalog::Catalog;
use crate::utils::config::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::utils::error::AggregateError;
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

/// All finish dates, ascending
///
/// # Errors
/// * `AggregateError::MissingDate` - No book has a finish date
pub fn finished_dates_sorted(catalog: &Catalog) -> Result<Vec<NaiveDate>, AggregateError> {
    let mut dates: Vec<NaiveDate> = catalog.iter().filter_map(|book| book.finished).collect();

    if dates.is_empty() {
        return Err(AggregateError::MissingDate);
    }

    dates.sort_unstable();
    Ok(dates)
}

/// Calendar year of the earliest finish date
pub fn reporting_year(catalog: &Catalog) -> Result<i32, AggregateError> {
    catalog
        .iter()
        .filter_map(|book| book.finished)
        .min()
        .map(|date| date.year())
        .ok_or(AggregateError::MissingDate)
}

/// Books finished per day of the reporting year (365 or 366 buckets)
pub fn daily_histogram(catalog: &Catalog) -> Result<Vec<usize>, AggregateError> {
    let dates = finished_dates_sorted(catalog)?;
    Ok(daily_counts(&dates, dates[0].year()))
}

/// Books finished per week of the reporting year
///
/// Week 0 starts on January 1st regardless of weekday; the last one or two
/// days of the year form a short 53rd week.
pub fn weekly_histogram(catalog: &Catalog) -> Result<Vec<usize>, AggregateError> {
    let dates = finished_dates_sorted(catalog)?;
    Ok(weekly_counts(&dates, dates[0].year()))
}

/// Books finished per calendar month of the reporting year
pub fn monthly_histogram(catalog: &Catalog) -> Result<Vec<usize>, AggregateError> {
    let dates = finished_dates_sorted(catalog)?;
    Ok(monthly_counts(&dates, dates[0].year()))
}

pub(crate) fn daily_counts(dates: &[NaiveDate], year: i32) -> Vec<usize> {
    bucket_by(dates, year, days_in_year(year), |date| date.ordinal0() as usize)
}

pub(crate) fn weekly_counts(dates: &[NaiveDate], year: i32) -> Vec<usize> {
    bucket_by(dates, year, WEEKS_PER_YEAR, week_of_year)
}

pub(crate) fn monthly_counts(dates: &[NaiveDate], year: i32) -> Vec<usize> {
    bucket_by(dates, year, MONTHS_PER_YEAR, |date| date.month0() as usize)
}

/// Zero-based week bucket of `date`, anchored to January 1st
pub fn week_of_year(date: NaiveDate) -> usize {
    date.ordinal0() as usize / 7
}

/// 366 for leap years, 365 otherwise
pub fn days_in_year(year: i32) -> usize {
    NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |date| date.ordinal() as usize)
}

/// Generic histogram driver
///
/// **Private** - `bucket_fn` maps an in-year date to its bucket index
fn bucket_by(
    dates: &[NaiveDate],
    year: i32,
    bucket_count: usize,
    bucket_fn: impl Fn(NaiveDate) -> usize,
) -> Vec<usize> {
    let mut counts = vec![0usize; bucket_count];
    let mut dropped = 0usize;

    for &date in dates {
        if date.year() != year {
            dropped += 1;
            continue;
        }

        match counts.get_mut(bucket_fn(date)) {
            Some(slot) => *slot += 1,
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            "{} book(s) finished outside {} were left out of the histogram",
            dropped, year
        );
    }

    debug!("Bucketed finish dates into {} buckets for {}", bucket_count, year);

    counts
}
