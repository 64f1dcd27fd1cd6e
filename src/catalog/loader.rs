//! TOML catalog loader.
//!
//! Reads a `[books.<id>]` table per book and normalizes every record
//! into a [`Book`]. Any structural problem is a [`LoadError`].

use super::schema::{Book, Catalog, OneOrMany};
use crate::utils::config::BOOKS_TABLE;
use crate::utils::error::LoadError;
use chrono::NaiveDate;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Book entry as written in the catalog, before normalization
#[derive(Debug, Deserialize)]
struct RawBook {
    title: Option<String>,

    #[serde(default, alias = "authors")]
    author: Option<OneOrMany>,

    /// TOML native date or a `YYYY-MM-DD` string
    #[serde(default)]
    finished: Option<toml::Value>,

    #[serde(default)]
    pages: Option<u64>,

    #[serde(default, alias = "genre")]
    genres: Option<OneOrMany>,

    #[serde(default)]
    via: Option<OneOrMany>,

    #[serde(default)]
    media: Option<OneOrMany>,

    #[serde(default)]
    format: Option<OneOrMany>,

    #[serde(default)]
    grade: Option<String>,
}

/// Load a catalog from a TOML file
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Io` - File missing or unreadable
/// * `LoadError::Toml` - Not well-formed TOML
/// * `LoadError::InvalidFormat` / `LoadError::InvalidBook` - Structurally invalid catalog
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    debug!("Loading catalog from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;

    info!("Loaded {} books from {}", catalog.len(), path.display());

    Ok(catalog)
}

/// Parse a catalog from TOML text
///
/// **Public** - used by `load_catalog` and by tests
pub fn parse_catalog(contents: &str) -> Result<Catalog, LoadError> {
    let document: toml::Table = contents.parse()?;

    let reader = match document.get("reader") {
        None => None,
        Some(toml::Value::String(name)) => Some(name.trim().to_string()).filter(|n| !n.is_empty()),
        Some(other) => {
            return Err(LoadError::InvalidFormat(format!(
                "`reader` must be a string, found {}",
                other.type_str()
            )))
        }
    };

    let entries = match document.get(BOOKS_TABLE) {
        Some(toml::Value::Table(entries)) => entries,
        Some(other) => {
            return Err(LoadError::InvalidFormat(format!(
                "`{}` must be a table of books, found {}",
                BOOKS_TABLE,
                other.type_str()
            )))
        }
        None => {
            return Err(LoadError::InvalidFormat(format!(
                "Missing top-level `{}` table",
                BOOKS_TABLE
            )))
        }
    };

    let mut books = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        books.push(parse_book(id, value)?);
    }

    debug!("Parsed {} book entries", books.len());

    Ok(Catalog::new(books)?.with_reader(reader))
}

/// Normalize a single `[books.<id>]` entry
///
/// **Private** - internal helper for parse_catalog
fn parse_book(id: &str, value: &toml::Value) -> Result<Book, LoadError> {
    let invalid = |reason: String| LoadError::InvalidBook {
        id: id.to_string(),
        reason,
    };

    if !value.is_table() {
        return Err(invalid(format!(
            "expected a table, found {}",
            value.type_str()
        )));
    }

    let raw: RawBook = value
        .clone()
        .try_into()
        .map_err(|e: toml::de::Error| invalid(e.message().to_string()))?;

    let title = raw
        .title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .ok_or_else(|| invalid("missing title".to_string()))?;

    let authors = normalize(raw.author);
    if authors.is_empty() {
        return Err(invalid("missing author".to_string()));
    }

    let finished = raw
        .finished
        .as_ref()
        .map(parse_finished_date)
        .transpose()
        .map_err(invalid)?;

    let grade = raw
        .grade
        .map(|grade| grade.trim().to_string())
        .filter(|grade| !grade.is_empty());

    Ok(Book {
        id: id.to_string(),
        title,
        authors,
        finished,
        pages: raw.pages,
        genres: normalize(raw.genres),
        via: normalize(raw.via),
        media: normalize(raw.media),
        format: normalize(raw.format),
        grade,
    })
}

fn normalize(field: Option<OneOrMany>) -> Vec<String> {
    field.map(OneOrMany::into_vec).unwrap_or_default()
}

/// Parse a `finished` value into a calendar date
///
/// **Private** - accepts TOML local dates (`2020-01-05`), date-times, and quoted strings
fn parse_finished_date(value: &toml::Value) -> Result<NaiveDate, String> {
    match value {
        toml::Value::Datetime(datetime) => {
            let date = datetime
                .date
                .ok_or_else(|| format!("finished '{}' has no date part", datetime))?;
            NaiveDate::from_ymd_opt(
                i32::from(date.year),
                u32::from(date.month),
                u32::from(date.day),
            )
            .ok_or_else(|| format!("invalid finished date '{}'", datetime))
        }
        toml::Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|e| format!("invalid finished date '{}': {}", text, e)),
        other => Err(format!(
            "finished must be a date, found {}",
            other.type_str()
        )),
    }
}
