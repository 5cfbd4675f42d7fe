//! Result annotation
//!
//! Rewrites response text with a verified/unverified tag in front of each
//! processed URL.

pub mod annotator;

// Re-export commonly used items
pub use annotator::{TagSpan, annotate, annotate_candidates};
