//! URL discovery
//!
//! This module handles finding URL candidates in free-form response text.

pub mod extractor;

// Re-export commonly used items
pub use extractor::{Extractor, UrlExtractor, clean_candidate, extract_candidates};
