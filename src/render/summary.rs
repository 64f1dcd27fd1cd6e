//! Plain-text summary printed to stdout after every run.

use crate::catalog::Catalog;

/// Numbered list of books, one per line: `1. *Title* by Author`
pub fn generate_text_summary(catalog: &Catalog) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(i, book)| format!("{}. *{}* by {}", i + 1, book.title, book.author_display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Book;

    #[test]
    fn test_numbered_summary() {
        let catalog = Catalog::new(vec![
            Book::new("dune", "Dune", "Frank Herbert"),
            Book::new("relic", "Relic", "x").with_authors(["Douglas Preston", "Lincoln Child"]),
        ])
        .unwrap();

        assert_eq!(
            generate_text_summary(&catalog),
            "1. *Dune* by Frank Herbert\n2. *Relic* by Douglas Preston, Lincoln Child"
        );
    }

    #[test]
    fn test_empty_summary() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(generate_text_summary(&catalog), "");
    }
}
