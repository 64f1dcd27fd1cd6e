//! Catalog loading and the book data model.
//!
//! This module handles:
//! - Parsing the TOML catalog into normalized book records
//! - Letter grade parsing and ranking
//! - Defining the in-memory catalog model

pub mod grade;
pub mod loader;
pub mod schema;

// Re-export main types
pub use grade::{Grade, Modifier};
pub use loader::{load_catalog, parse_catalog};
pub use schema::{Attribute, Book, Catalog, OneOrMany};
