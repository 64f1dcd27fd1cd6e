//! LaTeX book list generation.
//!
//! Produces a standalone `article` document with one enumerated item per
//! book, using the display strings carried by the report.

use crate::aggregator::{BookEntry, YearReport};
use log::info;

/// Book list configuration
#[derive(Debug, Clone, Default)]
pub struct BookListConfig {
    /// Overrides the default "Books read in {year}" title
    pub title: Option<String>,
}

impl BookListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Generate a LaTeX document listing every book of the report
///
/// **Public** - main entry point for the plain list variant
///
/// An empty report gets a one-line note instead of the `enumerate`, which
/// LaTeX rejects when it holds no `\item`.
pub fn generate_book_list(report: &YearReport, config: Option<&BookListConfig>) -> String {
    let title = config
        .and_then(|c| c.title.clone())
        .unwrap_or_else(|| match report.reporting_year {
            Some(year) => format!("Books read in {}", year),
            None => "Books read".to_string(),
        });

    let mut lines = vec![
        r"\documentclass[11pt]{article}".to_string(),
        r"\usepackage[utf8]{inputenc}".to_string(),
        r"\usepackage[T1]{fontenc}".to_string(),
        r"\usepackage[margin=1in]{geometry}".to_string(),
        r"\usepackage{enumitem}".to_string(),
        String::new(),
        format!(r"\title{{{}}}", escape_latex(&title)),
        format!(
            r"\author{{{}}}",
            report.reader.as_deref().map(escape_latex).unwrap_or_default()
        ),
        r"\date{}".to_string(),
        String::new(),
        r"\begin{document}".to_string(),
        r"\maketitle".to_string(),
        String::new(),
    ];

    if report.books.is_empty() {
        lines.push("No books finished yet.".to_string());
    } else {
        lines.push(r"\begin{enumerate}[leftmargin=*]".to_string());
        lines.extend(report.books.iter().map(format_item));
        lines.push(r"\end{enumerate}".to_string());
    }

    lines.push(String::new());
    lines.push(r"\end{document}".to_string());
    lines.push(String::new());

    info!("Book list generated for {} books", report.books.len());
    lines.join("\n")
}

/// One `\item`, with a detail line when the book has any details
fn format_item(book: &BookEntry) -> String {
    let mut item = format!(
        r"  \item \textit{{{}}} by {}",
        escape_latex(&book.title),
        escape_latex(&book.authors)
    );

    let mut details = Vec::new();
    if !book.genres.is_empty() {
        details.push(escape_latex(&book.genres));
    }
    if !book.media.is_empty() {
        details.push(escape_latex(&book.media));
    }
    if let Some(finished) = book.finished {
        details.push(format!("finished {}", finished.format("%Y-%m-%d")));
    }
    if let Some(grade) = &book.grade {
        details.push(format!("grade {}", escape_latex(grade)));
    }

    if !details.is_empty() {
        item.push_str(&format!(
            "\\\\\n        {{\\small {}}}",
            details.join(r" \textbullet{} ")
        ));
    }

    item
}

/// Escape LaTeX special characters
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{build_report, ReportOptions};
    use crate::catalog::Catalog;
    use chrono::NaiveDate;

    fn entry(title: &str) -> BookEntry {
        BookEntry {
            title: title.to_string(),
            authors: "Ann Author".to_string(),
            genres: String::new(),
            media: String::new(),
            finished: None,
            grade: None,
        }
    }

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("50% & more_"), r"50\% \& more\_");
        assert_eq!(escape_latex(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape_latex("~^"), r"\textasciitilde{}\textasciicircum{}");
    }

    #[test]
    fn test_item_without_details() {
        assert_eq!(
            format_item(&entry("Dune")),
            r"  \item \textit{Dune} by Ann Author"
        );
    }

    #[test]
    fn test_item_with_details() {
        let mut book = entry("Dune");
        book.genres = "science fiction".to_string();
        book.finished = NaiveDate::from_ymd_opt(2020, 1, 5);
        book.grade = Some("A-".to_string());

        let item = format_item(&book);
        assert!(item.contains(r"{\small science fiction \textbullet{} finished 2020-01-05 \textbullet{} grade A-}"));
    }

    #[test]
    fn test_empty_report_has_no_enumerate() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let report = build_report(&catalog, &ReportOptions::default());

        let document = generate_book_list(&report, None);

        assert!(document.contains(r"\title{Books read}"));
        assert!(document.contains("No books finished yet."));
        assert!(!document.contains(r"\begin{enumerate}"));
        assert!(document.trim_end().ends_with(r"\end{document}"));
    }
}
