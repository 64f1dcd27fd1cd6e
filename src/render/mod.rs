//! Report rendering.
//!
//! Turns an aggregated report into presentable artifacts:
//! - SVG infographic
//! - LaTeX book list
//! - Plain-text numbered summary

pub mod book_list;
pub mod infographic;
pub mod summary;

// Re-export main types
pub use book_list::{generate_book_list, BookListConfig};
pub use infographic::{generate_infographic, InfographicConfig};
pub use summary::generate_text_summary;
