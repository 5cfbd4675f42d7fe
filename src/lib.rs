//! Verify and tag the URLs in LLM search responses.
//!
//! Response text goes through four steps: candidates are extracted with a
//! permissive pattern, checked for a scheme and host, probed with a HEAD
//! request, and finally tagged in place as `[Verified]` or `[Unverified]`.

pub mod annotation;
pub mod config;
pub mod core;
pub mod discovery;
pub mod pipeline;
pub mod reporting;
pub mod source;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use crate::core::{Candidate, LinktagError, ProbeOutcome, Result, UrlReport, Verdict};
pub use pipeline::{Annotation, Pipeline};
pub use source::TextSource;
