//! In-memory catalog model.
//!
//! Multi-valued fields are resolved once at load time, so aggregation
//! never has to care whether the file held a single label or a list.

use crate::utils::error::LoadError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A field that the catalog may hold either as one label or as a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Normalize into a list of trimmed, non-empty labels
    pub fn into_vec(self) -> Vec<String> {
        let labels = match self {
            OneOrMany::One(label) => vec![label],
            OneOrMany::Many(labels) => labels,
        };

        labels
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect()
    }
}

/// One book entry of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Key of the `[books.<id>]` table
    pub id: String,
    pub title: String,
    /// Authors in the order the catalog lists them (never empty)
    pub authors: Vec<String>,
    pub finished: Option<NaiveDate>,
    pub pages: Option<u64>,
    pub genres: Vec<String>,
    pub via: Vec<String>,
    pub media: Vec<String>,
    pub format: Vec<String>,
    pub grade: Option<String>,
}

impl Book {
    /// Create a book with only the required fields set
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: vec![author.into()],
            finished: None,
            pages: None,
            genres: Vec::new(),
            via: Vec::new(),
            media: Vec::new(),
            format: Vec::new(),
            grade: None,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_finished(mut self, finished: NaiveDate) -> Self {
        self.finished = Some(finished);
        self
    }

    pub fn with_pages(mut self, pages: u64) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_media<I, S>(mut self, media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media = media.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Authors joined for display, e.g. "Douglas Preston, Lincoln Child"
    pub fn author_display(&self) -> String {
        self.authors.join(", ")
    }
}

/// Multi-valued attributes that frequency tables can be keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Author,
    Genre,
    Via,
    Media,
    Format,
}

impl Attribute {
    /// Labels this attribute holds for `book` (empty when absent)
    pub fn labels<'a>(&self, book: &'a Book) -> &'a [String] {
        match self {
            Attribute::Author => &book.authors,
            Attribute::Genre => &book.genres,
            Attribute::Via => &book.via,
            Attribute::Media => &book.media,
            Attribute::Format => &book.format,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Author => "author",
            Attribute::Genre => "genres",
            Attribute::Via => "via",
            Attribute::Media => "media",
            Attribute::Format => "format",
        }
    }
}

/// The full set of books for a reporting period, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    reader: Option<String>,
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers
    pub fn new(books: Vec<Book>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(LoadError::DuplicateId(book.id.clone()));
            }
        }

        Ok(Self {
            reader: None,
            books,
        })
    }

    pub fn with_reader(mut self, reader: Option<String>) -> Self {
        self.reader = reader;
        self
    }

    /// Name of the person whose year this is, if the catalog states it
    pub fn reader(&self) -> Option<&str> {
        self.reader.as_deref()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_many_normalizes() {
        assert_eq!(
            OneOrMany::One(" fiction ".to_string()).into_vec(),
            vec!["fiction".to_string()]
        );
        assert_eq!(
            OneOrMany::Many(vec!["a".to_string(), "".to_string(), "b".to_string()]).into_vec(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let books = vec![
            Book::new("dune", "Dune", "Frank Herbert"),
            Book::new("dune", "Dune Messiah", "Frank Herbert"),
        ];

        let result = Catalog::new(books);
        assert!(matches!(result, Err(LoadError::DuplicateId(id)) if id == "dune"));
    }

    #[test]
    fn test_attribute_labels_absent_is_empty() {
        let book = Book::new("b1", "Title", "Someone");
        assert!(Attribute::Genre.labels(&book).is_empty());
        assert_eq!(Attribute::Author.labels(&book), ["Someone".to_string()]);
    }

    #[test]
    fn test_author_display() {
        let book = Book::new("relic", "Relic", "x")
            .with_authors(["Douglas Preston", "Lincoln Child"]);
        assert_eq!(book.author_display(), "Douglas Preston, Lincoln Child");
    }
}
