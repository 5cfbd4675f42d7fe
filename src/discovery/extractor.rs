use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::patterns;
use crate::core::types::Candidate;

static CANDIDATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(patterns::CANDIDATE_URL).expect("candidate URL pattern is valid"));

pub trait UrlExtractor {
    fn extract(&self, text: &str) -> Vec<Candidate>;
}

#[derive(Default, Debug)]
pub struct Extractor {}

impl UrlExtractor for Extractor {
    fn extract(&self, text: &str) -> Vec<Candidate> {
        extract_candidates(text)
    }
}

/// Find every http(s) candidate in `text`, in order of appearance.
///
/// The pattern is deliberately permissive: a candidate runs until the next
/// whitespace character, so trailing sentence punctuation is captured and
/// then stripped by [`clean_candidate`]. Duplicates are kept.
pub fn extract_candidates(text: &str) -> Vec<Candidate> {
    CANDIDATE_REGEX
        .find_iter(text)
        .map(|m| Candidate::new(m.as_str(), m.start()))
        .collect()
}

/// Strip any trailing run of `.` and `)` from a raw match.
pub fn clean_candidate(raw: &str) -> &str {
    raw.trim_end_matches(patterns::TRAILING_PUNCTUATION)
}
