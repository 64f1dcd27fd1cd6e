//! Year in Books
//!
//! Turns a TOML catalog of the books read in a year into an
//! infographic, a LaTeX reading list, or a JSON report.
//!
//! This crate provides the core implementation for the
//! `year-in-books` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! year-in-books infographic books.toml -o year-in-books.svg
//! year-in-books list books.toml -o books.tex
//! ```
//!
//! The library side is usable on its own:
//!
//! ```ignore
//! let catalog = year_in_books::catalog::load_catalog("books.toml")?;
//! let top = year_in_books::aggregator::top_authors(&catalog, 5);
//! ```

pub mod aggregator;
pub mod catalog;
pub mod commands;
pub mod output;
pub mod render;
pub mod utils;
